//! Reviews main renderer

use super::components::{cards, filter_bar};
use super::state::ReviewsState;
use crate::ui::utils::{render_error, render_loading};
use crate::ui::view_state::ViewStatus;
use crate::view::review_cards;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Card columns the grid uses when the reviews view fills `area`.
pub fn card_columns(area: Rect) -> u16 {
    cards::columns_for_width(area.width)
}

pub fn render_reviews(f: &mut Frame, area: Rect, state: &ReviewsState, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(area);

    filter_bar::render_filter_bar(f, chunks[0], state.filter());

    match state.status() {
        ViewStatus::Loading => render_loading(f, chunks[1], tick, "reviews"),
        ViewStatus::Error(message) => render_error(f, chunks[1], message),
        ViewStatus::Ready(reviews) => {
            cards::render_card_grid(f, chunks[1], &review_cards(reviews), state.scroll_row())
        }
    }
}
