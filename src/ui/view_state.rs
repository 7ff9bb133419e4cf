//! Per-view fetch state
//!
//! A view is always in one of three states. Every fetch gets a ticket; when a
//! new fetch starts the previous ticket is cancelled, and a completion that
//! carries an outdated generation is dropped.

use crate::api::error::{FetchError, unavailable_message};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus<T> {
    Loading,
    Ready(T),
    Error(String),
}

/// Identifies one in-flight fetch.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub generation: u64,
    pub token: CancellationToken,
}

#[derive(Debug)]
pub struct ViewState<T> {
    status: ViewStatus<T>,
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self {
            status: ViewStatus::Loading,
            generation: 0,
            in_flight: None,
        }
    }

    pub fn status(&self) -> &ViewStatus<T> {
        &self.status
    }

    /// Moves to `Loading` for a new fetch, superseding any fetch still running.
    ///
    /// `generation` must be unique across every view of the session so that
    /// a completion from a torn-down view can never match.
    pub fn begin(&mut self, generation: u64) -> FetchTicket {
        if let Some(previous) = self.in_flight.take() {
            previous.cancel();
        }
        let token = CancellationToken::new();
        self.generation = generation;
        self.in_flight = Some(token.clone());
        self.status = ViewStatus::Loading;
        FetchTicket { generation, token }
    }

    /// Applies a fetch result. Returns `false` when the result was stale and ignored.
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<T, FetchError>,
        api_url: &str,
    ) -> bool {
        if generation != self.generation || self.in_flight.is_none() {
            return false;
        }
        self.in_flight = None;
        self.status = match result {
            Ok(data) => ViewStatus::Ready(data),
            Err(_) => ViewStatus::Error(unavailable_message(api_url)),
        };
        true
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ViewState<T> {
    fn drop(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }
}
