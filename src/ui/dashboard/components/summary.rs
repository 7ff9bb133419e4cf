//! Rating summary panel

use crate::ui::utils::panel;
use crate::view::SummaryModel;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Padding, Paragraph, Wrap};

/// Splits "Label: value" so the label can be styled separately.
fn labelled(line: &str) -> Line<'static> {
    match line.split_once(": ") {
        Some((label, value)) => Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
            Span::styled(
                value.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(line.to_string()),
    }
}

pub fn render_summary(f: &mut Frame, area: Rect, summary: &SummaryModel) {
    let mut lines = vec![
        labelled(&summary.total_line),
        labelled(&summary.average_line),
        Line::from(Span::styled(
            "Sentiment Breakdown:",
            Style::default().fg(Color::Gray),
        )),
    ];
    lines.extend(
        summary
            .breakdown
            .iter()
            .map(|entry| Line::from(format!("  • {}", entry))),
    );

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Rating Summary", Color::Cyan).padding(Padding::horizontal(1)));
    f.render_widget(widget, area);
}
