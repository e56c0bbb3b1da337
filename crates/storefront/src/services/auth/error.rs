//! Authentication error types.

use thiserror::Error;

/// Errors that can occur when signing in against the auth backend.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the credentials (or the account).
    ///
    /// `message` is the backend's own error message, shown to the user as a
    /// toast notification.
    #[error("sign-in rejected: {message}")]
    Rejected {
        /// Error message returned by the backend.
        message: String,
    },

    /// The request never completed (connection, DNS, timeout).
    #[error("auth backend unreachable: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a body we could not interpret.
    #[error("unexpected auth backend response (status {status})")]
    UnexpectedResponse {
        /// HTTP status of the response.
        status: u16,
    },
}
