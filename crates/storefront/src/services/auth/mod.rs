//! Authentication backend client.
//!
//! The storefront does not issue sessions or tokens itself; sign-in is
//! delegated to an external auth backend over HTTP. The backend's
//! callback-style success/error contract is expressed here as a plain
//! `Result`: `Ok(())` on success, [`AuthError::Rejected`] carrying the
//! backend's message on failure.

mod error;

pub use error::AuthError;

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bewear_core::Credentials;

use crate::config::AuthBackendConfig;

/// Sign-in request body sent to the auth backend.
#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Error body returned by the auth backend.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the authentication backend.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<AuthClientInner>,
}

struct AuthClientInner {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
}

impl AuthClient {
    /// Create a new auth backend client.
    #[must_use]
    pub fn new(config: &AuthBackendConfig) -> Self {
        let endpoint = format!(
            "{}/api/auth/sign-in/email",
            config.base_url.trim_end_matches('/')
        );

        Self {
            inner: Arc::new(AuthClientInner {
                client: reqwest::Client::new(),
                endpoint,
                api_key: config.api_key.clone(),
            }),
        }
    }

    /// Sign a user in with validated email/password credentials.
    ///
    /// Accepting only [`Credentials`] guarantees the input passed schema
    /// validation before reaching this boundary. Exactly one request is
    /// issued per call; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Rejected`] with the backend's message when the
    /// backend refuses the credentials, [`AuthError::Http`] when the request
    /// never completes, and [`AuthError::UnexpectedResponse`] when an error
    /// response has no readable message.
    #[instrument(skip_all, fields(email = %credentials.email()))]
    pub async fn sign_in_with_email(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let body = SignInRequest {
            email: credentials.email().as_str(),
            password: credentials.password().expose(),
        };

        let mut request = self.inner.client.post(&self.inner.endpoint).json(&body);
        if let Some(key) = &self.inner.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            tracing::debug!("sign-in accepted");
            return Ok(());
        }

        // The backend reports failures as JSON `{ "message": "..." }`
        match response.json::<ErrorBody>().await {
            Ok(error_body) => {
                tracing::debug!(status = %status, "sign-in rejected");
                Err(AuthError::Rejected {
                    message: error_body.message,
                })
            }
            Err(_) => Err(AuthError::UnexpectedResponse {
                status: status.as_u16(),
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::http::StatusCode;
    use axum::{Json, Router, extract::State, routing::post};

    /// Serve a stub auth backend on an ephemeral local port.
    ///
    /// Returns its base URL and a counter of sign-in calls received.
    async fn stub_backend(
        status: StatusCode,
        body: serde_json::Value,
    ) -> (String, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_handle = Arc::clone(&calls);

        let app = Router::new()
            .route(
                "/api/auth/sign-in/email",
                post(
                    move |State(calls): State<Arc<AtomicUsize>>,
                          Json(_body): Json<serde_json::Value>| {
                        let response_body = body.clone();
                        async move {
                            calls.fetch_add(1, Ordering::SeqCst);
                            (status, Json(response_body))
                        }
                    },
                ),
            )
            .with_state(calls_handle);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (base_url, calls)
    }

    fn client_for(base_url: String) -> AuthClient {
        AuthClient::new(&AuthBackendConfig {
            base_url,
            api_key: None,
        })
    }

    fn valid_credentials() -> Credentials {
        Credentials::parse("user@example.com", "password123").unwrap()
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let (base_url, calls) = stub_backend(StatusCode::OK, serde_json::json!({})).await;
        let client = client_for(base_url);

        client
            .sign_in_with_email(&valid_credentials())
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_sign_in_rejected_carries_backend_message() {
        let (base_url, calls) = stub_backend(
            StatusCode::UNAUTHORIZED,
            serde_json::json!({ "message": "Invalid credentials" }),
        )
        .await;
        let client = client_for(base_url);

        let err = client
            .sign_in_with_email(&valid_credentials())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::Rejected { ref message } if message == "Invalid credentials"
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_sign_in_unreadable_error_body() {
        let (base_url, _calls) = stub_backend(
            StatusCode::INTERNAL_SERVER_ERROR,
            serde_json::json!({ "unexpected": true }),
        )
        .await;
        let client = client_for(base_url);

        let err = client
            .sign_in_with_email(&valid_credentials())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::UnexpectedResponse { status: 500 }
        ));
    }

    #[tokio::test]
    async fn test_sign_in_backend_unreachable() {
        // Nothing is listening on this port
        let client = client_for("http://127.0.0.1:1".to_string());

        let err = client
            .sign_in_with_email(&valid_credentials())
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Http(_)));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = client_for("http://localhost:4000/".to_string());
        assert_eq!(
            client.inner.endpoint,
            "http://localhost:4000/api/auth/sign-in/email"
        );
    }
}
