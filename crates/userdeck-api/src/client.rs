// Users collection HTTP client
//
// Wraps `reqwest::Client` with URL construction and status/body handling
// for the single `GET {base}/users` request the application makes.

use tracing::{debug, warn};
use url::Url;

use crate::error::Error;
use crate::models::ApiUser;
use crate::transport::TransportConfig;

/// Raw HTTP client for the users collection endpoint.
///
/// One call to [`fetch_users`](Self::fetch_users) is one request: no
/// retries, no caching.
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UsersClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the API root (e.g. `https://jsonplaceholder.typicode.com`);
    /// the `users` path segment is appended per request.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The API root URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL of the users collection: `{base}/users`.
    pub fn users_url(&self) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/users"))?)
    }

    /// Fetch the users collection.
    ///
    /// Any non-2xx status is an [`Error::HttpStatus`]; a body that is not a
    /// JSON array of users is an [`Error::Deserialization`].
    pub async fn fetch_users(&self) -> Result<Vec<ApiUser>, Error> {
        let url = self.users_url()?;
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(|e| {
            warn!(error = %e, "users request failed");
            Error::Transport(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "users request returned an error status");
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        let users: Vec<ApiUser> = serde_json::from_str(&body).map_err(|e| {
            let preview = body_preview(&body);
            warn!(error = %e, "users response did not decode");
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: body.clone(),
            }
        })?;

        debug!(count = users.len(), "fetched users");
        Ok(users)
    }
}

const PREVIEW_LEN: usize = 200;

/// At most `PREVIEW_LEN` bytes of `body`, cut on a char boundary.
fn body_preview(body: &str) -> &str {
    let mut end = body.len().min(PREVIEW_LEN);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> UsersClient {
        UsersClient::with_client(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn users_url_appends_segment() {
        let url = client("https://jsonplaceholder.typicode.com").users_url().unwrap();
        assert_eq!(url.as_str(), "https://jsonplaceholder.typicode.com/users");
    }

    #[test]
    fn users_url_keeps_base_path() {
        let url = client("http://localhost:8080/api/v1/").users_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/v1/users");
    }

    #[test]
    fn body_preview_stops_on_char_boundary() {
        assert_eq!(body_preview("short"), "short");

        // 199 ASCII bytes then a 3-byte char straddling the limit
        let body = format!("{}€tail", "a".repeat(199));
        assert_eq!(body_preview(&body), "a".repeat(199));

        let long = "é".repeat(150);
        let preview = body_preview(&long);
        assert_eq!(preview.len(), 200);
        assert!(long.starts_with(preview));
    }
}
