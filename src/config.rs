use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// The default API base URL (local backend, API routes mounted under /api).
const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// The default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The client's configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// The base URL all request paths are resolved against.
    pub api_base: String,
    /// Optional path for persisting the bearer token across restarts.
    pub token_file: Option<PathBuf>,
    /// The per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Config {
    /// Creates a new `Config` for the given API base URL.
    pub fn new(api_base: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            token_file: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Creates a new `Config` from environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `Config`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_base = env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .context("Invalid HTTP_TIMEOUT_SECS")?;

        let token_file = env::var("AUTH_TOKEN_FILE").ok().map(PathBuf::from);

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            token_file,
            timeout_secs,
        })
    }

    /// Sets the token persistence path.
    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = Some(path.into());
        self
    }
}
