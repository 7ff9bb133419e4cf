//! Bar chart component

use crate::ui::utils::{palette_color, panel};
use crate::view::BarSeries;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Paragraph};

/// Widest bar that still leaves room for every category in `inner_width` cells.
fn bar_width(inner_width: u16, categories: usize) -> u16 {
    if categories == 0 {
        return 1;
    }
    let gap = 1;
    let per_bar = inner_width / categories as u16;
    per_bar.saturating_sub(gap).clamp(1, 12)
}

pub fn render_bar_chart(f: &mut Frame, area: Rect, series: &BarSeries, palette: &[Color]) {
    let block = panel(series.title, Color::Cyan);

    if series.is_empty() {
        let empty = Paragraph::new("No data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = series
        .points()
        .enumerate()
        .map(|(i, (label, value))| {
            let color = palette_color(palette, i);
            Bar::default()
                .label(Line::from(label.to_string()))
                .value(value)
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(inner_width, series.len()))
        .bar_gap(1)
        .max(series.max_value().max(1));
    f.render_widget(chart, area);
}
