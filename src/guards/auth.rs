use crate::guards::verdict::{DenyReason, GuardVerdict};
use crate::services::auth::AuthService;

/// Guards routes that require any authenticated, active user.
///
/// Evaluation order per navigation attempt:
/// 1. Not authenticated yet: attempt a best-effort hydration from a
///    surviving token.
/// 2. Still not authenticated: redirect to the login route.
/// 3. Deactivated account: evict the session via logout, then redirect to
///    login with the `inactive` indicator.
/// 4. Otherwise allow.
///
/// The guard mutates nothing except through the session operations and is
/// idempotent for a fixed session state.
pub async fn require_auth(auth: &AuthService) -> GuardVerdict {
    if !auth.session().is_authenticated().await {
        auth.fetch_me().await;
    }

    if !auth.session().is_authenticated().await {
        tracing::debug!("🚫 Navigation denied: not authenticated");
        return GuardVerdict::RedirectLogin { reason: None };
    }

    if let Some(user) = auth.session().user().await {
        if !user.is_active {
            tracing::warn!("🚫 User {} is deactivated, evicting session", user.id);
            auth.logout().await;
            return GuardVerdict::RedirectLogin {
                reason: Some(DenyReason::Inactive),
            };
        }
    }

    GuardVerdict::Allow
}
