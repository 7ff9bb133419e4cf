//! Reviews view state
//!
//! The active filter plus the review list fetched for it.

use super::components::cards::row_count;
use crate::api::error::FetchError;
use crate::filter::ReviewFilter;
use crate::models::Review;
use crate::ui::view_state::{FetchTicket, ViewState, ViewStatus};

#[derive(Debug, Default)]
pub struct ReviewsState {
    filter: ReviewFilter,
    view: ViewState<Vec<Review>>,
    /// First visible row of the card grid.
    scroll_row: usize,
}

impl ReviewsState {
    pub fn new(filter: ReviewFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn filter(&self) -> ReviewFilter {
        self.filter
    }

    pub fn status(&self) -> &ViewStatus<Vec<Review>> {
        self.view.status()
    }

    pub fn reviews(&self) -> &[Review] {
        match self.view.status() {
            ViewStatus::Ready(reviews) => reviews,
            _ => &[],
        }
    }

    /// Starts a fetch for the current filter.
    pub fn begin_fetch(&mut self, generation: u64) -> FetchTicket {
        self.scroll_row = 0;
        self.view.begin(generation)
    }

    /// Switches filter and starts the one fetch it needs.
    pub fn select_filter(&mut self, filter: ReviewFilter, generation: u64) -> FetchTicket {
        self.filter = filter;
        self.begin_fetch(generation)
    }

    pub fn apply(
        &mut self,
        generation: u64,
        result: Result<Vec<Review>, FetchError>,
        api_url: &str,
    ) -> bool {
        self.view.complete(generation, result, api_url)
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    /// Moves down one grid row of `columns` cards, stopping at the last row.
    pub fn scroll_down(&mut self, columns: u16) {
        let last_row = row_count(self.reviews().len(), columns).saturating_sub(1);
        if self.scroll_row < last_row {
            self.scroll_row += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_row = self.scroll_row.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(text: &str) -> Review {
        Review {
            rating: 4,
            review: text.to_string(),
            sentiment: None,
            slang_words: Vec::new(),
        }
    }

    #[test]
    /// Switching filter while a fetch is in flight supersedes it.
    fn test_filter_change_supersedes_in_flight_fetch() {
        let mut state = ReviewsState::new(ReviewFilter::All);
        let all = state.begin_fetch(1);
        let slang = state.select_filter(ReviewFilter::Slang, 2);

        assert!(all.token.is_cancelled());
        assert_eq!(state.filter(), ReviewFilter::Slang);

        assert!(state.apply(slang.generation, Ok(vec![review("lit")]), "http://api"));
        assert!(!state.apply(all.generation, Ok(vec![review("a"), review("b")]), "http://api"));
        assert_eq!(state.reviews().len(), 1);
        assert_eq!(state.reviews()[0].review, "lit");
    }

    #[test]
    fn test_error_clears_reviews() {
        let mut state = ReviewsState::new(ReviewFilter::All);
        let first = state.begin_fetch(1);
        state.apply(first.generation, Ok(vec![review("a")]), "http://api");
        let second = state.begin_fetch(2);
        state.apply(
            second.generation,
            Err(FetchError::Http {
                status: 500,
                message: String::new(),
            }),
            "http://api",
        );
        assert!(state.reviews().is_empty());
        assert!(matches!(state.status(), ViewStatus::Error(_)));
    }

    #[test]
    fn test_scroll_is_bounded_by_grid_rows() {
        let mut state = ReviewsState::new(ReviewFilter::All);
        let ticket = state.begin_fetch(1);
        let reviews = (0..6).map(|i| review(&format!("r{}", i))).collect();
        state.apply(ticket.generation, Ok(reviews), "http://api");

        for _ in 0..10 {
            state.scroll_down(3);
        }
        assert_eq!(state.scroll_row(), 1);
        state.scroll_up();
        assert_eq!(state.scroll_row(), 0);

        // A single column grid has one row per review
        for _ in 0..10 {
            state.scroll_down(1);
        }
        assert_eq!(state.scroll_row(), 5);
    }
}
