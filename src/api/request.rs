//! Endpoints exposed by the analysis API and the query strings sent to them.

use crate::models::Sentiment;

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Endpoint {
    SentimentDistribution,
    ExtractedFeatures,
    RatingDiscrepancies,
    RatingSummary,
    Reviews,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::SentimentDistribution => "/sentiment-distribution",
            Endpoint::ExtractedFeatures => "/extracted-features",
            Endpoint::RatingDiscrepancies => "/rating-discrepancies",
            Endpoint::RatingSummary => "/rating-summary",
            Endpoint::Reviews => "/reviews",
        }
    }
}

/// Server-side filtering supported by `/reviews`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewQuery {
    All,
    Sentiment(Sentiment),
    WithSlang,
}

impl ReviewQuery {
    pub fn request(&self) -> ApiRequest {
        let request = ApiRequest::new(Endpoint::Reviews);
        match self {
            ReviewQuery::All => request,
            ReviewQuery::Sentiment(sentiment) => {
                request.with_param("sentiment", sentiment.as_query_value())
            }
            ReviewQuery::WithSlang => request.with_param("has_slang", "true"),
        }
    }
}

/// A GET request against one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Path plus encoded query string, e.g. `/reviews?has_slang=true`.
    pub fn path_and_query(&self) -> String {
        if self.params.is_empty() {
            return self.endpoint.path().to_string();
        }
        let query = self
            .params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.endpoint.path(), query)
    }
}
