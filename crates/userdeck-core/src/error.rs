// ── Core error types ──
//
// User-facing error categories. Consumers never match on reqwest or serde
// errors; the `From<userdeck_api::Error>` impl folds them in here.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    // ── Fetch errors ─────────────────────────────────────────────────
    #[error("Server responded with HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Cannot reach {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Unexpected response body: {message}")]
    Decode { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<userdeck_api::Error> for CoreError {
    fn from(err: userdeck_api::Error) -> Self {
        match err {
            userdeck_api::Error::HttpStatus { status } => CoreError::HttpStatus { status },
            userdeck_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if let Some(status) = e.status() {
                    CoreError::HttpStatus {
                        status: status.as_u16(),
                    }
                } else {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                }
            }
            userdeck_api::Error::Deserialization { message, body: _ } => {
                CoreError::Decode { message }
            }
            userdeck_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            userdeck_api::Error::ClientBuild(msg) => CoreError::Internal(msg),
        }
    }
}
