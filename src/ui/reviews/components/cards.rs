//! Review card grid

use crate::consts::cli_consts::ui::{CARD_HEIGHT, MAX_CARD_COLUMNS, MIN_CARD_WIDTH};
use crate::ui::utils::{badge_style, panel};
use crate::view::{Badge, ReviewCard};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Padding, Paragraph, Wrap};

pub const EMPTY_MESSAGE: &str = "No reviews match this filter";

/// Number of card columns that fit in `width`.
pub fn columns_for_width(width: u16) -> u16 {
    (width / MIN_CARD_WIDTH).clamp(1, MAX_CARD_COLUMNS)
}

/// Number of grid rows needed for `cards` cards.
pub fn row_count(cards: usize, columns: u16) -> usize {
    cards.div_ceil(columns.max(1) as usize)
}

fn badge_span(badge: &Badge) -> Span<'static> {
    Span::styled(format!(" {} ", badge.text), badge_style(badge.tone))
}

fn card_lines(card: &ReviewCard) -> Vec<Line<'static>> {
    let mut badges = Vec::new();
    for badge in card.sentiment_badge.iter().chain(card.slang_badge.iter()) {
        if !badges.is_empty() {
            badges.push(Span::raw(" "));
        }
        badges.push(badge_span(badge));
    }

    let mut lines = Vec::new();
    if !badges.is_empty() {
        lines.push(Line::from(badges));
    }
    if !card.slang_words.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Slang: ", Style::default().fg(Color::Yellow)),
            Span::styled(card.slang_words.join(", "), Style::default().fg(Color::Gray)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        card.body.clone(),
        Style::default().fg(Color::White),
    )));
    lines
}

fn render_card(f: &mut Frame, area: Rect, card: &ReviewCard) {
    let block = panel("", Color::DarkGray)
        .title(Span::styled(
            format!(" {} ", card.rating_label),
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1));
    let widget = Paragraph::new(card_lines(card))
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(widget, area);
}

/// Lays cards out in rows, starting at grid row `scroll_row`.
pub fn render_card_grid(f: &mut Frame, area: Rect, cards: &[ReviewCard], scroll_row: usize) {
    if cards.is_empty() {
        let empty = Paragraph::new(EMPTY_MESSAGE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(panel("", Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let columns = columns_for_width(area.width);
    let total_rows = row_count(cards.len(), columns);
    let first_row = scroll_row.min(total_rows.saturating_sub(1));
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);
    let column_constraints = vec![Constraint::Ratio(1, columns as u32); columns as usize];

    for (row_area, row_cards) in row_areas
        .iter()
        .zip(cards.chunks(columns as usize).skip(first_row))
    {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints.clone())
            .split(*row_area);
        for (cell, card) in cells.iter().zip(row_cards) {
            render_card(f, *cell, card);
        }
    }
}
