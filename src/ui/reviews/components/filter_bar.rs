//! Filter selector

use crate::filter::ReviewFilter;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Tabs};
use strum::IntoEnumIterator;

pub fn render_filter_bar(f: &mut Frame, area: Rect, selected: ReviewFilter) {
    let tabs = Tabs::new(ReviewFilter::iter().map(|filter| filter.label()))
        .select(selected.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title("Filter")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(tabs, area);
}
