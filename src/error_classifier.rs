use crate::api::error::FetchError;
use crate::logging::LogLevel;

#[derive(Debug, Clone)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify_fetch_error(&self, error: &FetchError) -> LogLevel {
        match error {
            // Server trouble is usually temporary
            FetchError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,

            // Wrong URL or an API that no longer matches this client
            FetchError::Http { .. } => LogLevel::Error,
            FetchError::Parse(_) => LogLevel::Error,

            // API server not started yet, most of the time
            FetchError::Network(_) => LogLevel::Warn,
        }
    }
}

impl Default for ErrorClassifier {
    fn default() -> Self {
        Self::new()
    }
}
