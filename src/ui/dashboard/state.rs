//! Dashboard state management
//!
//! Holds the four dashboard datasets as one value so they always change together.

use super::components::discrepancies::content_height;
use crate::api::error::FetchError;
use crate::models::DashboardData;
use crate::ui::view_state::{FetchTicket, ViewState, ViewStatus};
use crate::view::DiscrepancyEntry;

#[derive(Debug, Default)]
pub struct DashboardState {
    view: ViewState<DashboardData>,
    /// First visible line of the discrepancy list.
    discrepancy_scroll: u16,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &ViewStatus<DashboardData> {
        self.view.status()
    }

    pub fn data(&self) -> Option<&DashboardData> {
        match self.view.status() {
            ViewStatus::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Starts a (re)load of all four datasets.
    pub fn begin_fetch(&mut self, generation: u64) -> FetchTicket {
        self.discrepancy_scroll = 0;
        self.view.begin(generation)
    }

    pub fn apply(
        &mut self,
        generation: u64,
        result: Result<DashboardData, FetchError>,
        api_url: &str,
    ) -> bool {
        self.view.complete(generation, result, api_url)
    }

    pub fn discrepancy_scroll(&self) -> u16 {
        self.discrepancy_scroll
    }

    /// Scrolls one line, stopping once the last wrapped line of the list
    /// reaches the top of a panel `text_width` columns wide.
    pub fn scroll_down(&mut self, text_width: u16) {
        let max = self
            .data()
            .map(|d| {
                let entries: Vec<DiscrepancyEntry> =
                    d.discrepancies.iter().map(DiscrepancyEntry::from).collect();
                content_height(&entries, text_width).saturating_sub(1)
            })
            .unwrap_or(0);
        self.discrepancy_scroll = self.discrepancy_scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.discrepancy_scroll = self.discrepancy_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Discrepancy, RatingSummary, Tally};

    const WIDTH: u16 = 40;

    fn data(discrepancies: usize) -> DashboardData {
        DashboardData {
            sentiment: Tally::from([("Positive", 1)]),
            features: Tally::from([("price", 1)]),
            discrepancies: (0..discrepancies)
                .map(|i| Discrepancy {
                    rating: 5,
                    review: format!("review {}", i),
                })
                .collect(),
            summary: RatingSummary {
                total_reviews: 1,
                average_rating: 5.0,
                sentiment_counts: Tally::from([("Positive", 1)]),
            },
        }
    }

    #[test]
    fn test_ready_only_with_complete_data() {
        let mut state = DashboardState::new();
        assert!(state.data().is_none());

        let ticket = state.begin_fetch(1);
        assert!(state.apply(ticket.generation, Ok(data(2)), "http://api"));
        assert_eq!(state.data().unwrap().discrepancies.len(), 2);
    }

    #[test]
    fn test_reload_resets_scroll() {
        let mut state = DashboardState::new();
        let ticket = state.begin_fetch(1);
        state.apply(ticket.generation, Ok(data(3)), "http://api");
        state.scroll_down(WIDTH);
        state.scroll_down(WIDTH);
        assert_eq!(state.discrepancy_scroll(), 2);

        state.begin_fetch(2);
        assert_eq!(state.discrepancy_scroll(), 0);
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut state = DashboardState::new();
        let ticket = state.begin_fetch(1);
        state.apply(ticket.generation, Ok(data(1)), "http://api");
        for _ in 0..10 {
            state.scroll_down(WIDTH);
        }
        // Header line plus rating and review lines
        assert_eq!(state.discrepancy_scroll(), 2);
        state.scroll_up();
        state.scroll_up();
        assert_eq!(state.discrepancy_scroll(), 0);
    }

    #[test]
    fn test_scroll_reaches_end_of_wrapped_reviews() {
        let mut long = data(1);
        long.discrepancies[0].review = "battery died within a day ".repeat(8);
        let mut state = DashboardState::new();
        let ticket = state.begin_fetch(1);
        state.apply(ticket.generation, Ok(long), "http://api");

        for _ in 0..50 {
            state.scroll_down(WIDTH);
        }
        let entries: Vec<DiscrepancyEntry> = state
            .data()
            .unwrap()
            .discrepancies
            .iter()
            .map(DiscrepancyEntry::from)
            .collect();
        let wrapped = content_height(&entries, WIDTH);
        assert!(wrapped > 3);
        assert_eq!(state.discrepancy_scroll(), wrapped - 1);
    }

    #[test]
    fn test_scroll_without_data_stays_at_top() {
        let mut state = DashboardState::new();
        state.scroll_down(WIDTH);
        assert_eq!(state.discrepancy_scroll(), 0);
    }
}
