//! Error handling for the API module

use thiserror::Error;

/// Any failure while loading a view's data. Callers treat every variant the same way.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure: host unreachable, connection reset, and so on.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The body was not the JSON shape we expected.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub async fn from_response(response: reqwest::Response) -> FetchError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        FetchError::Http { status, message }
    }
}

/// The one message shown to the user whenever a view fails to load.
pub fn unavailable_message(api_url: &str) -> String {
    format!(
        "Failed to load data. Please ensure the API server is running at {}.",
        api_url
    )
}
