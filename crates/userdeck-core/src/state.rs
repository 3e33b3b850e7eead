// ── Application state ──
//
// Load lifecycle plus selection. The selected record is never stored, only
// its id; every read resolves it against the live list.

use crate::model::{UserId, UserRecord};

/// Fetch lifecycle. Transitions `Pending` -> `Ready` | `Failed`, once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    /// Loaded records in server order. Shrinks on deletion, never grows.
    Ready(Vec<UserRecord>),
    /// The fetch failed; `message` is safe to show to the user.
    Failed { message: String },
}

/// Everything the views render from. Mutated only by [`Controller`](crate::Controller).
#[derive(Debug, Clone, Default)]
pub struct ApplicationState {
    pub(crate) load: LoadState,
    pub(crate) selected: Option<UserId>,
}

impl ApplicationState {
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Loaded records, or an empty slice while pending or after a failure.
    pub fn users(&self) -> &[UserRecord] {
        match &self.load {
            LoadState::Ready(users) => users,
            LoadState::Pending | LoadState::Failed { .. } => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Pending)
    }

    /// User-facing error message, if the fetch failed.
    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed { message } => Some(message),
            LoadState::Pending | LoadState::Ready(_) => None,
        }
    }

    /// Look up a loaded record by id.
    pub fn user(&self, id: UserId) -> Option<&UserRecord> {
        self.users().iter().find(|u| u.id == id)
    }

    /// The selected record, resolved against the current list.
    pub fn selected(&self) -> Option<&UserRecord> {
        self.selected.and_then(|id| self.user(id))
    }

    pub fn selected_id(&self) -> Option<UserId> {
        self.selected().map(|u| u.id)
    }
}
