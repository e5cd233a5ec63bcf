//! Error types and result alias

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type alias using [`ExtractorError`]
pub type Result<T> = std::result::Result<T, ExtractorError>;

/// The "operation failed" tier: the browser could not be driven or the
/// artifact could not be produced. A page that loads fine but carries no
/// usable payload is not an error; see
/// [`PayloadMissing`](crate::extract::PayloadMissing).
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Browser failed to launch
    #[error("failed to launch browser: {0}")]
    LaunchFailed(String),

    /// No Chrome/Chromium executable could be located on this platform
    #[error("no usable Chrome/Chromium executable found: {0}")]
    BrowserNotFound(String),

    /// Navigation to a URL failed
    #[error("navigation failed: {0}")]
    NavigationFailed(String),

    /// Tab-level operation failed
    #[error("tab operation failed: {0}")]
    TabOperationFailed(String),

    /// JavaScript evaluation in the page failed
    #[error("script evaluation failed: {0}")]
    EvaluationFailed(String),

    /// Page never reported `document.readyState === "complete"`
    #[error("page did not finish loading within {0:?}")]
    LoadTimeout(Duration),

    /// Run configuration could not be read or parsed
    #[error("failed to load configuration from {path}: {reason}")]
    ConfigFailed { path: PathBuf, reason: String },

    /// Output artifact could not be written or read back
    #[error("failed to access {path}: {reason}")]
    OutputFailed { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExtractorError::LaunchFailed("chrome exited".to_string());
        assert_eq!(err.to_string(), "failed to launch browser: chrome exited");
    }

    #[test]
    fn test_load_timeout_display_mentions_duration() {
        let err = ExtractorError::LoadTimeout(Duration::from_secs(30));
        assert!(err.to_string().contains("30s"));
    }

    #[test]
    fn test_output_failed_display_includes_path() {
        let err = ExtractorError::OutputFailed {
            path: PathBuf::from("data/x_com.json"),
            reason: "permission denied".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("data/x_com.json"));
        assert!(msg.contains("permission denied"));
    }
}
