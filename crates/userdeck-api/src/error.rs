use thiserror::Error;

/// Top-level error type for the `userdeck-api` crate.
///
/// Covers every way a fetch of the users collection can fail: building the
/// client, reaching the server, a non-2xx answer, or a body that does not
/// decode. `userdeck-core` maps these into user-facing categories.
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, reset, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The underlying `reqwest::Client` could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── Response ────────────────────────────────────────────────────
    /// The server answered with a non-2xx status.
    #[error("HTTP error: status {status}")]
    HttpStatus { status: u16 },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
