//! Scrollable discrepancy list

use crate::ui::utils::panel;
use crate::view::DiscrepancyEntry;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Padding, Paragraph, Wrap};

/// Columns eaten by the panel's borders and horizontal padding.
const PANEL_CHROME_WIDTH: u16 = 4;

fn discrepancy_paragraph(entries: &[DiscrepancyEntry]) -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(
        "Reviews with unexpected ratings",
        Style::default().fg(Color::DarkGray),
    ))];
    for entry in entries {
        lines.push(Line::from(Span::styled(
            entry.rating_line.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            entry.review.clone(),
            Style::default().fg(Color::Gray),
        )));
    }
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

/// Width available to the text inside a discrepancy panel of `panel` size.
pub fn text_width(panel: Rect) -> u16 {
    panel.width.saturating_sub(PANEL_CHROME_WIDTH)
}

/// Number of wrapped lines the list takes at `width` columns.
pub fn content_height(entries: &[DiscrepancyEntry], width: u16) -> u16 {
    let lines = discrepancy_paragraph(entries).line_count(width);
    u16::try_from(lines).unwrap_or(u16::MAX)
}

pub fn render_discrepancies(f: &mut Frame, area: Rect, entries: &[DiscrepancyEntry], scroll: u16) {
    let widget = discrepancy_paragraph(entries)
        .scroll((scroll, 0))
        .block(panel("Rating Discrepancies", Color::Cyan).padding(Padding::horizontal(1)));
    f.render_widget(widget, area);
}
