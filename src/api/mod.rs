use crate::api::error::FetchError;
use crate::api::request::ReviewQuery;
use crate::models::{Discrepancy, RatingSummary, Review, Tally};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;
pub mod request;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReviewsApi: Send + Sync {
    /// Count of reviews per sentiment label.
    async fn sentiment_distribution(&self) -> Result<Tally, FetchError>;

    /// Count of mentions per extracted product feature.
    async fn extracted_features(&self) -> Result<Tally, FetchError>;

    /// Reviews whose rating contradicts their sentiment.
    async fn rating_discrepancies(&self) -> Result<Vec<Discrepancy>, FetchError>;

    /// Totals and average rating across the whole dataset.
    async fn rating_summary(&self) -> Result<RatingSummary, FetchError>;

    /// Reviews, optionally filtered on the server.
    async fn reviews(&self, query: ReviewQuery) -> Result<Vec<Review>, FetchError>;
}
