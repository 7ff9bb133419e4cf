//! Activity line component
//!
//! Shows the most recent displayable fetch event

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::ui::utils::format_compact_timestamp;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::collections::VecDeque;

pub fn render_activity_line(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    activity_logs: &VecDeque<Event>,
) {
    let line = match activity_logs.iter().rev().find(|e| e.should_display()) {
        Some(event) => {
            let (icon, color) = match (event.event_type, event.log_level) {
                (EventType::Success, _) => ("✅", Color::Green),
                (EventType::Error, LogLevel::Error) => ("❌", Color::Red),
                (EventType::Error, _) => ("⚠", Color::Yellow),
                (EventType::Refresh, _) => ("…", Color::Cyan),
            };
            Line::from(vec![
                Span::raw(format!("{} ", icon)),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(event.msg.clone(), Style::default().fg(color)),
            ])
        }
        None => Line::from(Span::styled(
            "Starting up...",
            Style::default().fg(Color::DarkGray),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}
