//! Analysis input field and result card widget.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::category_color;
use crate::state::{AnalysisCard, AnalysisPhase, Store};
use crate::ui::format;

/// Analysis region: the symbol input field plus the current result card,
/// placeholder, or error message.
pub struct ResultCard;

impl ResultCard {
    /// Render the analysis region.
    pub fn render(frame: &mut Frame, area: Rect, store: &Store) {
        let mut lines = vec![input_line(store), Line::default()];

        match &store.analysis.phase {
            AnalysisPhase::Idle => {
                lines.push(Line::from(Span::styled(
                    "Press i to edit the symbol, Enter to analyze.",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            AnalysisPhase::Requesting { symbol } => {
                lines.push(Line::from(Span::styled(
                    format!("Analyzing {symbol}..."),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
            AnalysisPhase::Failed { message } => {
                lines.push(Line::from(vec![
                    Span::styled(
                        "✗ ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(message.clone(), Style::default().fg(Color::Red)),
                ]));
            }
            AnalysisPhase::Complete(card) => render_card(&mut lines, card, area.width),
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Analysis ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(paragraph, area);
    }
}

fn input_line(store: &Store) -> Line<'static> {
    let mut spans = vec![
        Span::styled("Symbol: ", Style::default().fg(Color::Yellow)),
        Span::raw(store.app.input_buffer.clone()),
    ];
    if store.app.is_editing() {
        spans.push(Span::styled("█", Style::default().fg(Color::White)));
    }
    Line::from(spans)
}

fn render_card(lines: &mut Vec<Line<'static>>, card: &AnalysisCard, width: u16) {
    lines.push(Line::from(vec![
        Span::styled(
            card.symbol.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::raw(format::price(card.price)),
    ]));
    lines.push(Line::default());

    lines.push(signal_bar(card, width));
    lines.push(Line::default());

    for (label, signal) in [
        ("Technical", &card.technical),
        ("Sentiment", &card.sentiment),
        ("ML", &card.ml),
    ] {
        lines.push(Line::from(vec![
            Span::raw(format!("{label:<11}")),
            Span::styled(
                signal.display.clone(),
                Style::default().fg(category_color(signal.category)),
            ),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::from(vec![
        Span::raw("Decision   "),
        Span::styled(
            card.action.to_string(),
            Style::default()
                .fg(category_color(card.action.into()))
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::from(format!(
        "Confidence {}%",
        card.confidence_percent()
    )));
}

/// The sell/hold/buy bar with a marker at the signal position. Off-scale
/// signals pin the marker to the nearest edge.
fn signal_bar(card: &AnalysisCard, width: u16) -> Line<'static> {
    let track_width = width.saturating_sub(14).clamp(10, 40) as usize;
    let position = card.bar_percent() / 100.0 * (track_width - 1) as f64;
    let marker = (position.round().max(0.0) as usize).min(track_width - 1);

    let mut track = String::new();
    for i in 0..track_width {
        track.push(if i == marker { '█' } else { '─' });
    }

    Line::from(vec![
        Span::styled("SELL ", Style::default().fg(Color::Red)),
        Span::styled(track, Style::default().fg(Color::White)),
        Span::styled(" BUY", Style::default().fg(Color::Green)),
    ])
}
