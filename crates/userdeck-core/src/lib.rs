//! Application state layer between `userdeck-api` and the terminal UI.
//!
//! - **[`Controller`]** — owns the [`ApplicationState`] and is the only
//!   thing allowed to mutate it: the one-shot initial load
//!   ([`initialize`](Controller::initialize)), selection, and deletion.
//!
//! - **[`LoadState`]** — the fetch lifecycle as a three-state union
//!   (`Pending`, `Ready`, `Failed`), so "loading and failed at once" cannot
//!   be expressed.
//!
//! - **[`UserSource`]** — the seam the controller fetches through.
//!   Implemented for [`UsersClient`](userdeck_api::UsersClient); tests plug
//!   in fakes.
//!
//! - **Domain model** ([`model`]) — [`UserRecord`] and friends, converted
//!   verbatim from the API wire types.

pub mod config;
pub mod controller;
pub mod convert;
pub mod error;
pub mod model;
pub mod source;
pub mod state;

#[cfg(test)]
mod fixtures;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::SourceConfig;
pub use controller::{Controller, FETCH_FAILED_MESSAGE};
pub use error::CoreError;
pub use model::{Address, Company, Geo, UserId, UserRecord};
pub use source::UserSource;
pub use state::{ApplicationState, LoadState};
