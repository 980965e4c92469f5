//! Agent indicator panel widget.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::Store;

/// Agent indicator panel.
pub struct AgentPanel;

impl AgentPanel {
    /// Render the panel, one indicator per line.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let lines: Vec<Line> = store
            .agents
            .indicators()
            .iter()
            .map(|agent| {
                let glyph_style = if agent.status.is_running() {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC)
                } else {
                    Style::default().fg(Color::Green)
                };

                Line::from(vec![
                    Span::styled(format!("{} ", agent.status.glyph()), glyph_style),
                    Span::raw(agent.label),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Agents ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, area);
    }
}
