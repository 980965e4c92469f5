//! Console transcript widget.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state::Store;

/// Console transcript view. Shows the newest lines with a persistent
/// trailing cursor marker after the last one.
pub struct ConsolePanel;

impl ConsolePanel {
    /// Render the transcript tail.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        // One row is reserved for the trailing cursor.
        let visible = area.height.saturating_sub(3) as usize;
        let lines = store.console.lines();
        let tail_start = lines.len().saturating_sub(visible);

        let mut rendered: Vec<Line> = lines[tail_start..]
            .iter()
            .map(|line| {
                Line::from(vec![
                    Span::styled("> ", Style::default().fg(Color::DarkGray)),
                    Span::styled(line.clone(), Style::default().fg(Color::Green)),
                ])
            })
            .collect();
        rendered.push(Line::from(Span::styled(
            "█",
            Style::default().fg(Color::Green),
        )));

        let paragraph = Paragraph::new(rendered).block(
            Block::default()
                .title(" Console ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, area);
    }
}
