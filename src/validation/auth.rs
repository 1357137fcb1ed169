use crate::error::{ApiError, Result};

/// Validates a login email.
///
/// Only shape checks; the server performs the authoritative validation.
///
/// # Arguments
///
/// * `email` - The email to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the email is acceptable to send.
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ApiError::Validation("Email cannot be empty".to_string()));
    }

    if email.len() > 255 {
        return Err(ApiError::Validation(
            "Email must be at most 255 characters".to_string(),
        ));
    }

    // Shape only: non-empty parts around an '@'. Dotless domains such as
    // `admin@localhost` are legal, and the server is authoritative anyway.
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() {
        return Err(ApiError::Validation(
            "Email must be a valid address".to_string(),
        ));
    }

    Ok(())
}

/// Validates a login password.
///
/// No minimum length here: existing accounts must still be able to log in.
///
/// # Arguments
///
/// * `password` - The password to validate.
///
/// # Returns
///
/// A `Result<()>` indicating whether the password is acceptable to send.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(ApiError::Validation("Password cannot be empty".to_string()));
    }

    if password.len() > 128 {
        return Err(ApiError::Validation(
            "Password must be at most 128 characters".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plausible_emails() {
        assert!(validate_email("ana@example.com").is_ok());
        assert!(validate_email("  ana+tickets@sub.example.org ").is_ok());
        assert!(validate_email("admin@localhost").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ana@").is_err());
        assert!(validate_email(&format!("{}@example.com", "a".repeat(255))).is_err());
    }

    #[test]
    fn rejects_empty_password_only() {
        assert!(validate_password("").is_err());
        assert!(validate_password("x").is_ok());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }
}
