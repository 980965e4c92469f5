//! Portfolio valuation widget.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::Store;
use crate::ui::format;

/// Portfolio widget: four valuation fields. A failed refresh changes
/// nothing here; the widget keeps showing the last good snapshot.
pub struct PortfolioPanel;

impl PortfolioPanel {
    /// Render the portfolio fields.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let lines = match &store.portfolio.snapshot {
            Some(snapshot) => {
                let pnl_color = if snapshot.total_pnl < 0.0 {
                    Color::Red
                } else {
                    Color::Green
                };

                vec![
                    field("Cash", format::currency(snapshot.cash), Color::White),
                    field(
                        "Positions",
                        format::currency(snapshot.positions_value),
                        Color::White,
                    ),
                    field("Total", format::currency(snapshot.total_value), Color::White),
                    field(
                        "P&L",
                        format!(
                            "{} ({})",
                            format::currency(snapshot.total_pnl),
                            format::percent(snapshot.total_pnl_pct)
                        ),
                        pnl_color,
                    ),
                ]
            }
            None => vec![
                field("Cash", "--".to_string(), Color::DarkGray),
                field("Positions", "--".to_string(), Color::DarkGray),
                field("Total", "--".to_string(), Color::DarkGray),
                field("P&L", "--".to_string(), Color::DarkGray),
            ],
        };

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Portfolio ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, area);
    }
}

fn field(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<10}"),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(value, Style::default().fg(color)),
    ])
}
