//! UI rendering using ratatui.
//!
//! Each widget owns a disjoint layout region and reads its own slice of the
//! store; nothing here mutates state.

pub mod format;
mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{
    category_color, AgentPanel, ConsolePanel, PortfolioPanel, ResultCard, StatusBar,
    WatchlistTable,
};

use crate::state::Store;
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store) {
        let layout = Layout::new(frame.area());

        StatusBar::render(frame, layout.status_area, store);
        AgentPanel::render(frame, layout.agents_area, store);
        PortfolioPanel::render(frame, layout.portfolio_area, store);
        WatchlistTable::render(frame, layout.watchlist_area, store);
        ResultCard::render(frame, layout.analysis_area, store);
        ConsolePanel::render(frame, layout.console_area, store);
    }
}
