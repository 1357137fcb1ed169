use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::Result;
use crate::http::auth::AuthApiClient;
use crate::http::client::ApiClient;
use crate::models::user::User;
use crate::session::store::SessionStore;
use crate::validation::auth::{validate_email, validate_password};

/// The request payload for the login endpoint.
#[derive(Serialize, Debug)]
pub struct LoginPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// The response payload of a successful login.
#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// Session lifecycle operations: login, hydration, logout.
///
/// The only writer of the [`SessionStore`]. Error policy follows the
/// session contract: login failures propagate so the caller can surface
/// them; hydration and logout failures are swallowed here and degrade to
/// "treated as logged out".
pub struct AuthService {
    api: ApiClient,
    auth_api: AuthApiClient,
    session: Arc<SessionStore>,
    /// Serializes concurrent hydrations (single-flight).
    refresh_lock: Mutex<()>,
}

impl AuthService {
    /// Creates a new `AuthService` over the given client and session.
    pub fn new(api: ApiClient, session: Arc<SessionStore>) -> Self {
        let auth_api = AuthApiClient::new(api.clone(), session.clone());
        Self {
            api,
            auth_api,
            session,
            refresh_lock: Mutex::new(()),
        }
    }

    /// The session this service operates on.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Logs in with email and password.
    ///
    /// On success, user and token are written into the session atomically
    /// and the token is persisted. On any failure the session is left
    /// untouched and the error propagates to the caller.
    ///
    /// # Arguments
    ///
    /// * `email` - The account email.
    /// * `password` - The account password.
    ///
    /// # Returns
    ///
    /// A `Result` containing the authenticated `User`.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        validate_email(email)?;
        validate_password(password)?;

        tracing::info!("🔐 Login attempt for {}", email.trim());

        let response: LoginResponse = self
            .api
            .post(
                "/login",
                &LoginPayload {
                    email: email.trim(),
                    password,
                },
            )
            .await?;

        self.session
            .set_session(response.user.clone(), response.token)
            .await;

        tracing::info!("✅ Logged in as user {}", response.user.id);
        Ok(response.user)
    }

    /// Rehydrates the user profile from a held token.
    ///
    /// This is the recovery path after a restart, when only the persisted
    /// token survived. No-op without a token (no network call is made).
    /// Failures are swallowed at this boundary: the caller observes no
    /// error and the session is left unchanged.
    ///
    /// Concurrent callers are single-flighted: whoever waits on an
    /// in-flight hydration observes its result instead of re-fetching.
    pub async fn fetch_me(&self) {
        if self.session.token().await.is_none() {
            return;
        }

        let was_authenticated = self.session.is_authenticated().await;
        let _flight = self.refresh_lock.lock().await;

        // a concurrent hydration may have completed while waiting
        if !was_authenticated && self.session.is_authenticated().await {
            return;
        }

        match self.auth_api.get::<User>("/me").await {
            Ok(user) => {
                tracing::debug!("✅ Session hydrated for user {}", user.id);
                self.session.set_user(user).await;
            }
            Err(e) => {
                tracing::debug!("⚠️ Session hydration failed: {}", e);
            }
        }
    }

    /// Logs out.
    ///
    /// The server notification is best-effort: any network or server
    /// failure is swallowed. Local state is always fully cleared, user and
    /// token together.
    pub async fn logout(&self) {
        if self.session.token().await.is_some() {
            match self
                .auth_api
                .post::<serde_json::Value, _>("/logout", &serde_json::json!({}))
                .await
            {
                Ok(_) => tracing::debug!("👋 Logout acknowledged by server"),
                Err(e) => tracing::debug!("⚠️ Logout request failed (ignored): {}", e),
            }
        }

        self.session.clear().await;
        tracing::info!("✅ Session cleared");
    }
}
