// ── Controller ──
//
// Sole owner of `ApplicationState`. The initial load is the only async
// step; everything else is an immediate transition.

use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::model::{UserId, UserRecord};
use crate::source::UserSource;
use crate::state::{ApplicationState, LoadState};

/// Shown in place of the list when the initial fetch fails. The cause is
/// logged, never displayed.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch users. Please try again later.";

/// Mediates every state change: the one-shot load, selection, deletion.
///
/// Lifecycle: `Pending` on construction → exactly one
/// [`complete_initialize`](Self::complete_initialize) moves it to `Ready`
/// or `Failed`. Selection and deletion are only meaningful once `Ready`.
#[derive(Debug, Default)]
pub struct Controller {
    state: ApplicationState,
    /// Set by the first `begin_initialize`; the fetch never runs twice.
    started: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view for renderers.
    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    // ── Initial load ─────────────────────────────────────────────

    /// Fetch the collection from `source` and settle the load state.
    ///
    /// Runs once per controller; later calls are no-ops.
    pub async fn initialize<S: UserSource>(&mut self, source: &S) {
        if !self.begin_initialize() {
            return;
        }
        let result = source.load_users().await;
        self.complete_initialize(result);
    }

    /// Mark the load as started. Returns `false` if it already was, in
    /// which case the caller must not fetch.
    ///
    /// Split from [`complete_initialize`](Self::complete_initialize) so an
    /// event loop can run the fetch on another task.
    pub fn begin_initialize(&mut self) -> bool {
        if self.started {
            debug!("initial load already started, ignoring");
            return false;
        }
        self.started = true;
        self.state.load = LoadState::Pending;
        self.state.selected = None;
        info!("loading users");
        true
    }

    /// Apply the fetch outcome. Ignored unless the load is still pending.
    pub fn complete_initialize(&mut self, result: Result<Vec<UserRecord>, CoreError>) {
        if !self.state.is_loading() {
            warn!("load result arrived after the load settled, dropping it");
            return;
        }
        match result {
            Ok(users) => {
                info!(count = users.len(), "users loaded");
                self.state.load = LoadState::Ready(users);
            }
            Err(e) => {
                warn!(error = %e, "failed to fetch users");
                self.state.load = LoadState::Failed {
                    message: FETCH_FAILED_MESSAGE.into(),
                };
            }
        }
    }

    // ── Selection ────────────────────────────────────────────────

    /// Open the detail view for `id`. Unknown ids are ignored.
    pub fn select_user(&mut self, id: UserId) {
        if self.state.user(id).is_none() {
            debug!(%id, "select ignored, no such user");
            return;
        }
        debug!(%id, "user selected");
        self.state.selected = Some(id);
    }

    /// Close the detail view.
    pub fn close_detail(&mut self) {
        self.state.selected = None;
    }

    // ── Deletion ─────────────────────────────────────────────────

    /// Remove the record with `id` from the list, keeping the order of the
    /// rest. Clears the selection in the same step if it pointed at `id`.
    ///
    /// Returns the removed record, or `None` if nothing matched.
    pub fn delete_user(&mut self, id: UserId) -> Option<UserRecord> {
        let LoadState::Ready(users) = &mut self.state.load else {
            return None;
        };
        let Some(idx) = users.iter().position(|u| u.id == id) else {
            debug!(%id, "delete ignored, no such user");
            return None;
        };

        let removed = users.remove(idx);
        if self.state.selected == Some(id) {
            self.state.selected = None;
        }
        debug!(%id, remaining = users.len(), "user deleted");
        Some(removed)
    }
}
