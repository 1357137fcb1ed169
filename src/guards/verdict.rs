use http::StatusCode;

/// Why a navigation was sent back to the login route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// The account was deactivated server-side and the session evicted.
    Inactive,
}

/// The outcome of evaluating a guard for one navigation attempt.
///
/// Guards resolve each attempt to exactly one verdict; the host
/// application's router maps redirects and aborts onto its own navigation
/// primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardVerdict {
    /// Navigation proceeds unobstructed.
    Allow,
    /// Navigation is redirected to the login route.
    RedirectLogin {
        /// Extra context carried to the login route, if any.
        reason: Option<DenyReason>,
    },
    /// Navigation is aborted with an HTTP-style status code.
    Abort {
        /// `401` for missing authentication, `403` for insufficient role.
        status: StatusCode,
        /// A user-facing message.
        message: String,
    },
}

impl GuardVerdict {
    /// Whether navigation may proceed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardVerdict::Allow)
    }

    /// The navigation target for redirect verdicts.
    pub fn redirect_target(&self) -> Option<String> {
        match self {
            GuardVerdict::RedirectLogin { reason: None } => Some("/auth/login".to_string()),
            GuardVerdict::RedirectLogin {
                reason: Some(DenyReason::Inactive),
            } => Some("/auth/login?error=inactive".to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_targets_encode_the_reason() {
        assert_eq!(
            GuardVerdict::RedirectLogin { reason: None }
                .redirect_target()
                .as_deref(),
            Some("/auth/login")
        );
        assert_eq!(
            GuardVerdict::RedirectLogin {
                reason: Some(DenyReason::Inactive)
            }
            .redirect_target()
            .as_deref(),
            Some("/auth/login?error=inactive")
        );
        assert!(GuardVerdict::Allow.redirect_target().is_none());
    }
}
