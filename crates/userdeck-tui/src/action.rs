//! All possible UI actions. Actions are the sole mechanism for state mutation.

use userdeck_core::{CoreError, UserId, UserRecord};

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    /// The terminal changed size; the next frame is laid out afresh.
    Resize,

    // ── Data ──────────────────────────────────────────────────────
    /// Outcome of the one-shot initial fetch.
    UsersFetched(Result<Vec<UserRecord>, CoreError>),

    // ── List / detail ─────────────────────────────────────────────
    SelectUser(UserId),
    CloseDetail,
    DeleteUser(UserId),

    // ── Help ──────────────────────────────────────────────────────
    ToggleHelp,
}

impl Action {
    /// Whether the loop must draw a frame after processing this action.
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Self::Render | Self::Resize)
    }
}
