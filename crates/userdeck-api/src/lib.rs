// userdeck-api: Async Rust client for the users collection endpoint

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::UsersClient;
pub use error::Error;
pub use models::{ApiAddress, ApiCompany, ApiGeo, ApiUser};
pub use transport::TransportConfig;
