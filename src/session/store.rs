use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::user::{Role, User};
use crate::session::token_store::TokenStore;

/// A point-in-time view of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// The hydrated user profile, if any.
    pub user: Option<User>,
    /// The bearer token, if any.
    pub token: Option<String>,
}

impl SessionState {
    /// `true` iff both the user and the token are present. Neither field
    /// alone authenticates.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}

/// The session context: current user profile and bearer token.
///
/// Constructed once at application start and injected (via [`Arc`]) into
/// the operations and guards that need it. Mutation goes through the
/// `pub(crate)` writers, so session operations are the single writer by
/// construction; guards and HTTP wrappers only read.
///
/// At construction the token is seeded from the [`TokenStore`], which is
/// how a session survives a restart with the user profile still absent
/// until the first hydration.
pub struct SessionStore {
    state: RwLock<SessionState>,
    tokens: Arc<dyn TokenStore>,
}

impl SessionStore {
    /// Creates a store seeded with any token surviving from a previous run.
    pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
        let token = tokens.load();
        if token.is_some() {
            tracing::debug!("🔑 Restored bearer token from token store");
        }
        Self {
            state: RwLock::new(SessionState { user: None, token }),
            tokens,
        }
    }

    /// Creates a store with no persistence, starting empty.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(
            crate::session::token_store::MemoryTokenStore::default(),
        ))
    }

    /// Returns a snapshot of the current state.
    pub async fn snapshot(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Returns the current bearer token, if any.
    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    /// Returns the current user profile, if hydrated.
    pub async fn user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    /// Whether both a user and a token are currently held.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// The current user's role, or `None` without a hydrated user.
    pub async fn role(&self) -> Option<Role> {
        self.state.read().await.user.as_ref().map(|u| u.role)
    }

    /// Writes user and token together, then persists the token.
    pub(crate) async fn set_session(&self, user: User, token: String) {
        {
            let mut state = self.state.write().await;
            state.user = Some(user);
            state.token = Some(token.clone());
        }
        if let Err(e) = self.tokens.save(&token) {
            tracing::warn!("⚠️ Failed to persist bearer token: {}", e);
        }
    }

    /// Overwrites the user profile, leaving the token untouched.
    pub(crate) async fn set_user(&self, user: User) {
        self.state.write().await.user = Some(user);
    }

    /// Clears user and token together. Never partial.
    pub(crate) async fn clear(&self) {
        {
            let mut state = self.state.write().await;
            state.user = None;
            state.token = None;
        }
        if let Err(e) = self.tokens.clear() {
            tracing::warn!("⚠️ Failed to clear persisted token: {}", e);
        }
    }
}
