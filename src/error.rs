//! Error Types

use thiserror::Error;

/// Generic text shown whenever a load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Error message";

/// Why a ticket load failed.
///
/// The variant is kept for logging only; the UI shows [`LOAD_FAILED_MESSAGE`]
/// for all of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("could not decode tickets: {0}")]
    Decode(String),
    #[error("backend error: {0}")]
    Backend(String),
}

impl LoadError {
    /// User-facing summary
    pub fn summary(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_hides_detail() {
        let errors = [
            LoadError::Transport("ipc unavailable".into()),
            LoadError::Decode("missing field `completed`".into()),
            LoadError::Backend("db locked".into()),
        ];
        for e in &errors {
            assert_eq!(e.summary(), LOAD_FAILED_MESSAGE);
            assert!(!e.summary().contains("db locked"));
        }
        assert_eq!(errors[2].to_string(), "backend error: db locked");
    }
}
