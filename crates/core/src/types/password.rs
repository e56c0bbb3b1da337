//! Sign-in password type.

/// Minimum password length accepted by the sign-in form.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Errors that can occur when parsing a [`Password`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// The password has fewer characters than the minimum.
    #[error("password must be at least {min} characters")]
    TooShort {
        /// Minimum required length.
        min: usize,
    },
}

/// A sign-in password that passed length validation.
///
/// This type never persists and never logs its contents: `Debug` is redacted
/// and there is no `Display` implementation. The only way to read the value
/// back is [`Password::expose`], which the auth client uses to build the
/// sign-in request body.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Parse a `Password` from user input.
    ///
    /// # Errors
    ///
    /// Returns [`PasswordError::TooShort`] when the input has fewer than
    /// [`MIN_PASSWORD_LENGTH`] characters (counted as Unicode scalar values,
    /// not bytes).
    pub fn parse(s: &str) -> Result<Self, PasswordError> {
        if s.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the password value for the auth-backend request body.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}
