//! Validated sign-in credentials.

use crate::types::email::{Email, EmailError};
use crate::types::password::{Password, PasswordError};

/// Per-field validation failures from [`Credentials::parse`].
///
/// Both fields are validated independently so the form can render every
/// inline message at once instead of stopping at the first failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialsError {
    /// Email validation failure, if any.
    pub email: Option<EmailError>,
    /// Password validation failure, if any.
    pub password: Option<PasswordError>,
}

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.email, &self.password) {
            (Some(e), Some(p)) => write!(f, "{e}; {p}"),
            (Some(e), None) => write!(f, "{e}"),
            (None, Some(p)) => write!(f, "{p}"),
            (None, None) => write!(f, "invalid credentials"),
        }
    }
}

impl std::error::Error for CredentialsError {}

/// A validated email/password pair.
///
/// This is the only input type the auth client accepts, so input that failed
/// validation can never reach the authentication boundary. Values are
/// transient: built from form input, consumed by one sign-in call, then
/// dropped. Never persisted, never logged (`Password` redacts its `Debug`).
#[derive(Debug, Clone)]
pub struct Credentials {
    email: Email,
    password: Password,
}

impl Credentials {
    /// Validate raw form input into `Credentials`.
    ///
    /// # Errors
    ///
    /// Returns a [`CredentialsError`] carrying the failure for each invalid
    /// field. At least one of its fields is `Some` when this returns `Err`.
    pub fn parse(email: &str, password: &str) -> Result<Self, CredentialsError> {
        let email = Email::parse(email);
        let password = Password::parse(password);

        match (email, password) {
            (Ok(email), Ok(password)) => Ok(Self { email, password }),
            (email, password) => Err(CredentialsError {
                email: email.err(),
                password: password.err(),
            }),
        }
    }

    /// The validated email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// The validated password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let credentials = Credentials::parse("user@example.com", "password123").unwrap();
        assert_eq!(credentials.email().as_str(), "user@example.com");
        assert_eq!(credentials.password().expose(), "password123");
    }

    #[test]
    fn test_parse_invalid_email_only() {
        let err = Credentials::parse("not-an-email", "password123").unwrap_err();
        assert!(err.email.is_some());
        assert!(err.password.is_none());
    }

    #[test]
    fn test_parse_short_password_only() {
        let err = Credentials::parse("user@example.com", "short").unwrap_err();
        assert!(err.email.is_none());
        assert!(matches!(err.password, Some(PasswordError::TooShort { .. })));
    }

    #[test]
    fn test_parse_reports_both_fields() {
        let err = Credentials::parse("", "short").unwrap_err();
        assert!(matches!(err.email, Some(EmailError::Empty)));
        assert!(err.password.is_some());
    }

    #[test]
    fn test_error_display() {
        let err = Credentials::parse("user@example.com", "short").unwrap_err();
        assert_eq!(err.to_string(), "password must be at least 8 characters");
    }

    #[test]
    fn test_debug_never_shows_password() {
        let credentials = Credentials::parse("user@example.com", "password123").unwrap();
        let debug = format!("{credentials:?}");
        assert!(!debug.contains("password123"));
    }
}
