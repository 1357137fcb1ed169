use http::StatusCode;

use crate::guards::verdict::GuardVerdict;
use crate::models::user::Role;
use crate::services::auth::AuthService;

/// Guards routes restricted to a set of roles.
///
/// Authentication is always checked before the role, so a missing session
/// aborts with 401 and never surfaces as a role mismatch. Authenticated
/// navigations whose role is outside `allowed` abort with 403; unrecognized
/// role values are denied by default.
pub async fn require_role(auth: &AuthService, allowed: &[Role]) -> GuardVerdict {
    if !auth.session().is_authenticated().await {
        auth.fetch_me().await;
    }

    if !auth.session().is_authenticated().await {
        tracing::debug!("🚫 Navigation denied: not authenticated");
        return GuardVerdict::Abort {
            status: StatusCode::UNAUTHORIZED,
            message: "Debes iniciar sesión para acceder a esta página.".to_string(),
        };
    }

    match auth.session().role().await {
        Some(role) if allowed.contains(&role) => GuardVerdict::Allow,
        role => {
            tracing::debug!("🚫 Navigation denied: role {:?} not in {:?}", role, allowed);
            GuardVerdict::Abort {
                status: StatusCode::FORBIDDEN,
                message: "No tienes permisos para acceder a esta página.".to_string(),
            }
        }
    }
}

/// Guards routes restricted to administrators.
pub async fn require_admin(auth: &AuthService) -> GuardVerdict {
    require_role(auth, &[Role::Admin]).await
}

/// Guards routes open to administrators and gestores.
pub async fn require_admin_or_gestor(auth: &AuthService) -> GuardVerdict {
    require_role(auth, &[Role::Admin, Role::Gestor]).await
}
