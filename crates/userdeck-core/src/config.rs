// ── Runtime source configuration ──
//
// Describes *where* to fetch users from and how patient to be about it.
// Never touches disk; `userdeck-config` builds one and hands it in.

use std::time::Duration;

use url::Url;
use userdeck_api::{TransportConfig, UsersClient};

use crate::error::CoreError;

/// Default API root serving the `/users` collection.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Configuration for the users endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// API root; `/users` is appended.
    pub base_url: Url,
    /// Request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// `User-Agent` header override.
    pub user_agent: Option<String>,
}

impl SourceConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
            user_agent: None,
        }
    }

    fn transport(&self) -> TransportConfig {
        let mut transport = TransportConfig::default();
        if let Some(timeout) = self.timeout {
            transport = transport.with_timeout(timeout);
        }
        if let Some(ref agent) = self.user_agent {
            transport.user_agent.clone_from(agent);
        }
        transport
    }

    /// Build the HTTP client for this endpoint.
    pub fn build_client(&self) -> Result<UsersClient, CoreError> {
        Ok(UsersClient::new(self.base_url.clone(), &self.transport())?)
    }
}
