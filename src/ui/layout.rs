//! Layout management for the TUI.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// UI layout areas.
pub struct Layout {
    /// Status bar area (top).
    pub status_area: Rect,
    /// Agent indicator panel (left column, top).
    pub agents_area: Rect,
    /// Portfolio widget (left column, middle).
    pub portfolio_area: Rect,
    /// Watchlist table (left column, bottom).
    pub watchlist_area: Rect,
    /// Analysis input and result card (right column).
    pub analysis_area: Rect,
    /// Console transcript (bottom strip).
    pub console_area: Rect,
}

impl Layout {
    /// Create a new layout from the terminal area.
    pub fn new(area: Rect) -> Self {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status bar
                Constraint::Min(12),   // Main content
                Constraint::Length(9), // Console
            ])
            .split(area);

        let columns = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(32), // Left column
                Constraint::Min(40),    // Analysis
            ])
            .split(chunks[1]);

        let left = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // Agents (7 indicators + border)
                Constraint::Length(7), // Portfolio
                Constraint::Min(5),    // Watchlist
            ])
            .split(columns[0]);

        Self {
            status_area: chunks[0],
            agents_area: left[0],
            portfolio_area: left[1],
            watchlist_area: left[2],
            analysis_area: columns[1],
            console_area: chunks[2],
        }
    }
}
