use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's role. Closed enumeration shared with the backend.
///
/// Role values this client does not recognize collapse into
/// [`Role::Unknown`], which never satisfies a role guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full platform administration.
    Admin,
    /// Event management (gestor).
    Gestor,
    /// Regular ticket buyer.
    Buyer,
    /// Any unrecognized role value. Denied by default.
    #[serde(other)]
    Unknown,
}

/// The authenticated user profile returned by the login and me endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The unique identifier for the user.
    pub id: i64,
    /// The user's full name.
    pub name: String,
    /// The user's email address.
    pub email: String,
    /// When the email address was verified, if ever.
    pub email_verified_at: Option<DateTime<Utc>>,
    /// The user's role.
    pub role: Role,
    /// Server-controlled flag. A `false` value forces session termination
    /// on the next guarded navigation.
    pub is_active: bool,
    /// The timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// The timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The abbreviated user shape embedded in admin order views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}
