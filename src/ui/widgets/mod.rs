//! TUI widgets.

mod agent_panel;
mod console;
mod portfolio;
mod result_card;
mod status_bar;
mod watchlist;

pub use agent_panel::AgentPanel;
pub use console::ConsolePanel;
pub use portfolio::PortfolioPanel;
pub use result_card::ResultCard;
pub use status_bar::StatusBar;
pub use watchlist::WatchlistTable;

use crate::signal::SignalCategory;
use ratatui::style::Color;

/// Color shared by every widget that renders a signal category.
pub fn category_color(category: SignalCategory) -> Color {
    match category {
        SignalCategory::Buy => Color::Green,
        SignalCategory::Sell => Color::Red,
        SignalCategory::Hold => Color::Yellow,
        SignalCategory::Neutral => Color::DarkGray,
    }
}
