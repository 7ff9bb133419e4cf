//! Header component
//!
//! Renders the title and the view tabs

use crate::events::ViewKind;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};

pub const TAB_TITLES: [&str; 2] = ["Dashboard", "Reviews"];

pub fn render_header(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    view: ViewKind,
    api_url: &str,
) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title = Paragraph::new(format!(
        "REVIEWS ANALYSIS v{}",
        env!("CARGO_PKG_VERSION")
    ))
    .alignment(Alignment::Center)
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(title, header_chunks[0]);

    let selected = match view {
        ViewKind::Dashboard => 0,
        ViewKind::Reviews => 1,
    };
    let tabs = Tabs::new(TAB_TITLES)
        .select(selected)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title_bottom(Span::styled(
                    format!(" API: {} ", api_url),
                    Style::default().fg(Color::DarkGray),
                ))
                .title_alignment(Alignment::Right),
        );
    f.render_widget(tabs, header_chunks[1]);
}
