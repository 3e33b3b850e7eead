// Transport configuration for building the reqwest::Client.
//
// No timeout unless one is configured: a hung request is allowed to hang.

use std::time::Duration;

use crate::error::Error;

const DEFAULT_USER_AGENT: &str = concat!("userdeck/", env!("CARGO_PKG_VERSION"));

/// Transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Whole-request timeout. `None` disables it.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.into(),
        }
    }
}

impl TransportConfig {
    /// Set a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.as_str());

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder
            .build()
            .map_err(|e| Error::ClientBuild(e.to_string()))
    }
}
