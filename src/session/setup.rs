//! Session setup and initialization

use crate::api::{ApiClient, ReviewsApi};
use log::debug;
use std::sync::Arc;

/// Session data for both TUI and headless modes
#[derive(Clone)]
pub struct SessionData {
    /// Client shared by every fetch in the session
    pub api: Arc<dyn ReviewsApi>,
    /// Resolved API base URL
    pub api_url: String,
    /// Whether to paint a solid background in the TUI
    pub with_background_color: bool,
}

/// Builds the HTTP client for `api_url`.
pub fn setup_session(api_url: String, with_background_color: bool) -> SessionData {
    debug!("Creating API client for {}", api_url);
    let client = ApiClient::new(api_url.clone());
    SessionData {
        api: Arc::new(client),
        api_url,
        with_background_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_session_keeps_url() {
        let session = setup_session("http://localhost:5000".to_string(), true);
        assert_eq!(session.api_url, "http://localhost:5000");
        assert!(session.with_background_color);
    }
}
