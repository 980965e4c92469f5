//! Watchlist table widget.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

use crate::state::Store;
use crate::ui::format;

/// Watchlist table. The row set never changes; only price cells do.
pub struct WatchlistTable;

impl WatchlistTable {
    /// Render the watchlist.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let header_cells = ["Symbol", "Price"].iter().map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
        let header = Row::new(header_cells).height(1);

        let rows = store.watchlist.rows().iter().map(|row| {
            let price_cell = match row.price {
                Some(price) => Cell::from(format::price(price)),
                None => Cell::from("--").style(Style::default().fg(Color::DarkGray)),
            };

            Row::new(vec![Cell::from(row.symbol.clone()), price_cell]).height(1)
        });

        let table = Table::new(rows, [Constraint::Length(8), Constraint::Min(10)])
            .header(header)
            .block(
                Block::default()
                    .title(" Watchlist ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            );

        frame.render_widget(table, area);
    }
}
