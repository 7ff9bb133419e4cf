//! Review Analysis API Client
//!
//! reqwest-backed implementation of [`ReviewsApi`]. Plain JSON over GET, no
//! retries and no request timeout.

use crate::api::ReviewsApi;
use crate::api::error::FetchError;
use crate::api::request::{ApiRequest, Endpoint, ReviewQuery};
use crate::models::{Discrepancy, RatingSummary, Review, Tally};
use log::{debug, warn};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("reviews-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ClientBuilder::new()
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    fn build_url(&self, request: &ApiRequest) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            request.path_and_query()
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, FetchError> {
        if !response.status().is_success() {
            return Err(FetchError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, FetchError> {
        let url = self.build_url(&request);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            FetchError::Network(e)
        })?;
        let response = Self::handle_response_status(response).await?;
        let body = response.bytes().await?;

        // Decode separately from the transfer so malformed JSON is reported as a parse error.
        let payload = serde_json::from_slice(&body).map_err(|e| {
            warn!("Malformed response from {}: {}", url, e);
            FetchError::Parse(e)
        })?;
        debug!("{} answered with {} bytes", request.endpoint, body.len());
        Ok(payload)
    }
}

#[async_trait::async_trait]
impl ReviewsApi for ApiClient {
    async fn sentiment_distribution(&self) -> Result<Tally, FetchError> {
        self.get_json(ApiRequest::new(Endpoint::SentimentDistribution))
            .await
    }

    async fn extracted_features(&self) -> Result<Tally, FetchError> {
        self.get_json(ApiRequest::new(Endpoint::ExtractedFeatures))
            .await
    }

    async fn rating_discrepancies(&self) -> Result<Vec<Discrepancy>, FetchError> {
        self.get_json(ApiRequest::new(Endpoint::RatingDiscrepancies))
            .await
    }

    async fn rating_summary(&self) -> Result<RatingSummary, FetchError> {
        self.get_json(ApiRequest::new(Endpoint::RatingSummary)).await
    }

    async fn reviews(&self, query: ReviewQuery) -> Result<Vec<Review>, FetchError> {
        self.get_json(query.request()).await
    }
}
