//! Client SDK for the Abrakdabra event ticketing platform.
//!
//! Wraps the platform's REST API with typed models and manages the session
//! lifecycle: login, token persistence, hydration after a restart, logout,
//! and the navigation guards that decide whether a route may be entered.
//!
//! The usual entry point is [`PlatformClient`]:
//!
//! ```no_run
//! use abrakdabra_client::{Config, PlatformClient};
//! use abrakdabra_client::guards;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = PlatformClient::new(&Config::from_env()?)?;
//!
//! client.auth().login("ana@example.com", "secret").await?;
//!
//! let verdict = guards::auth::require_auth(client.auth()).await;
//! assert!(verdict.is_allowed());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod status;

pub mod http {
    pub mod auth;
    pub mod client;
}

pub mod models {
    pub mod common;
    pub mod discount;
    pub mod event;
    pub mod event_date;
    pub mod order;
    pub mod stats;
    pub mod user;
}

pub mod session {
    pub mod store;
    pub mod token_store;
}

pub mod services {
    pub mod admin;
    pub mod auth;
    pub mod events;
    pub mod orders;
}

pub mod guards {
    pub mod auth;
    pub mod role;
    pub mod verdict;
}

pub mod validation {
    pub mod auth;
}

pub use client::PlatformClient;
pub use config::Config;
pub use error::{ApiError, Result};
pub use guards::verdict::{DenyReason, GuardVerdict};
pub use models::user::{Role, User};
pub use session::store::SessionStore;
