//! Sign-in route handlers.
//!
//! The storefront collects and validates the credentials, then delegates the
//! actual sign-in to the external auth backend. Validation failures render
//! inline field messages; backend rejections render a transient toast with
//! the backend's message. In both cases the entered values stay in the form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use bewear_core::{Credentials, CredentialsError, EmailError};

use crate::filters;
use crate::services::auth::AuthError;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Sign-in form data.
#[derive(Debug, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Sign-in page template.
///
/// `email` and `password` echo the entered values back so a failed submit
/// never clears the form.
#[derive(Template, WebTemplate)]
#[template(path = "auth/sign_in.html")]
pub struct SignInTemplate {
    pub email: String,
    pub password: String,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    /// Transient error notification (auth backend rejection).
    pub toast: Option<String>,
}

impl SignInTemplate {
    fn empty() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            email_error: None,
            password_error: None,
            toast: None,
        }
    }
}

/// Map validation failures to the inline messages the form shows.
fn field_messages(err: &CredentialsError) -> (Option<String>, Option<String>) {
    let email_error = err.email.as_ref().map(|e| match e {
        EmailError::Empty => "Email é obrigatório".to_string(),
        _ => "Email inválido".to_string(),
    });

    let password_error = err
        .password
        .as_ref()
        .map(|_| "Senha deve ter no mínimo 8 caracteres".to_string());

    (email_error, password_error)
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the sign-in page.
pub async fn sign_in_page() -> impl IntoResponse {
    SignInTemplate::empty()
}

/// Handle sign-in form submission.
///
/// Validates the credentials before anything leaves the process; the auth
/// backend is called at most once, and only with input that passed
/// validation.
pub async fn sign_in(State(state): State<AppState>, Form(form): Form<SignInForm>) -> Response {
    let credentials = match Credentials::parse(&form.email, &form.password) {
        Ok(credentials) => credentials,
        Err(err) => {
            let (email_error, password_error) = field_messages(&err);
            let template = SignInTemplate {
                email: form.email,
                password: form.password,
                email_error,
                password_error,
                toast: None,
            };
            return (StatusCode::UNPROCESSABLE_ENTITY, template).into_response();
        }
    };

    match state.auth().sign_in_with_email(&credentials).await {
        Ok(()) => Redirect::to("./").into_response(),
        Err(err) => {
            tracing::warn!("Sign-in failed: {}", err);

            let (status, toast) = match err {
                AuthError::Rejected { message } => (StatusCode::UNAUTHORIZED, message),
                AuthError::Http(_) | AuthError::UnexpectedResponse { .. } => (
                    StatusCode::BAD_GATEWAY,
                    "Não foi possível entrar. Tente novamente.".to_string(),
                ),
            };

            let template = SignInTemplate {
                email: form.email,
                password: form.password,
                email_error: None,
                password_error: None,
                toast: Some(toast),
            };
            (status, template).into_response()
        }
    }
}
