// ── User sources ──
//
// Where the controller gets its records from. The HTTP client is the only
// production source; tests provide canned ones.

use std::future::Future;

use userdeck_api::UsersClient;

use crate::error::CoreError;
use crate::model::UserRecord;

/// Something that can produce the users collection, once per call.
pub trait UserSource: Send + Sync {
    /// Fetch the full collection. One call is one attempt.
    fn load_users(&self) -> impl Future<Output = Result<Vec<UserRecord>, CoreError>> + Send;
}

impl UserSource for UsersClient {
    fn load_users(&self) -> impl Future<Output = Result<Vec<UserRecord>, CoreError>> + Send {
        async move {
            let users = self.fetch_users().await?;
            Ok(users.into_iter().map(UserRecord::from).collect())
        }
    }
}
