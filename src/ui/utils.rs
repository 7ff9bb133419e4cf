//! UI utility functions
//!
//! Colours and small widgets shared by both views

use crate::view::Tone;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Bar colours for the sentiment chart, cycled per category.
pub const SENTIMENT_PALETTE: [Color; 3] = [
    Color::Rgb(0x4c, 0xaf, 0x50),
    Color::Rgb(0xff, 0x98, 0x00),
    Color::Rgb(0xf4, 0x43, 0x36),
];

/// Bar colours for the feature chart, cycled per category.
pub const FEATURE_PALETTE: [Color; 3] = [
    Color::Rgb(0x03, 0xa9, 0xf4),
    Color::Rgb(0x67, 0x3a, 0xb7),
    Color::Rgb(0xff, 0xeb, 0x3b),
];

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn palette_color(palette: &[Color], index: usize) -> Color {
    palette[index % palette.len()]
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Positive => Color::Green,
        Tone::Negative => Color::Red,
        Tone::Neutral => Color::Gray,
        Tone::Slang => Color::Yellow,
    }
}

pub fn badge_style(tone: Tone) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(tone_color(tone))
        .add_modifier(Modifier::BOLD)
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

pub fn panel(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

/// Loading indicator, animated by the UI tick.
pub fn render_loading(f: &mut Frame, area: Rect, tick: usize, what: &str) {
    let text = format!("{} Loading {}...", SPINNER[tick % SPINNER.len()], what);
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::LightBlue))
        .block(panel("", Color::DarkGray));
    f.render_widget(widget, area);
}

/// The single error message shown in place of a view's content.
pub fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![Line::from(vec![
        Span::styled(
            "Error: ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message.to_string(), Style::default().fg(Color::LightRed)),
    ])];
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel("", Color::Red));
    f.render_widget(widget, area);
}
