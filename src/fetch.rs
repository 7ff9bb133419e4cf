//! View-level data loading
//!
//! Turns a view activation into API calls: the dashboard fans out to four
//! endpoints at once, the reviews list issues a single request per filter.

use crate::api::ReviewsApi;
use crate::api::error::FetchError;
use crate::filter::{ReviewFilter, ReviewSource};
use crate::models::{DashboardData, Review};
use log::{debug, info};

/// Loads all four dashboard datasets concurrently.
///
/// Either every request succeeds and a complete [`DashboardData`] is returned,
/// or the first failure is returned and nothing else is kept.
pub async fn fetch_dashboard(api: &dyn ReviewsApi) -> Result<DashboardData, FetchError> {
    debug!("Fetching dashboard datasets");
    let (sentiment, features, discrepancies, summary) = tokio::try_join!(
        api.sentiment_distribution(),
        api.extracted_features(),
        api.rating_discrepancies(),
        api.rating_summary(),
    )?;

    if sentiment.is_empty() || features.is_empty() {
        debug!(
            "Dashboard has empty mappings - sentiment_empty={}, features_empty={}",
            sentiment.is_empty(),
            features.is_empty()
        );
    }
    info!(
        "Dashboard loaded - sentiments={} ({} reviews), features={}, discrepancies={}, total_reviews={}",
        sentiment.len(),
        sentiment.total(),
        features.len(),
        discrepancies.len(),
        summary.total_reviews
    );
    Ok(DashboardData {
        sentiment,
        features,
        discrepancies,
        summary,
    })
}

/// Loads the review list for one filter with exactly one request.
pub async fn fetch_reviews(
    api: &dyn ReviewsApi,
    filter: ReviewFilter,
) -> Result<Vec<Review>, FetchError> {
    let source = filter.source();
    debug!(
        "Fetching reviews - filter={}, request={}",
        filter,
        source.request().path_and_query()
    );

    let reviews = match source {
        ReviewSource::Reviews(query) => api.reviews(query).await?,
        ReviewSource::Discrepancies => api
            .rating_discrepancies()
            .await?
            .into_iter()
            .map(Review::from)
            .collect(),
    };

    info!("Reviews loaded - filter={}, count={}", filter, reviews.len());
    Ok(reviews)
}
