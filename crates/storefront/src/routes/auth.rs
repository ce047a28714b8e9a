//! Authentication route handlers.
//!
//! Sign-in and sign-up are mocked: any well-formed email and password are
//! accepted. Failures (bad email, short password, mismatched confirmation)
//! are stored on the modal and rendered inline, not returned as HTTP errors.

use axum::{Form, response::Redirect};
use demo_store_core::{Action, Credentials};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::middleware::Visitor;

/// Auth modal form data.
///
/// `confirm_password` is only sent by the sign-up variant of the form.
#[derive(Debug, Deserialize)]
pub struct AuthForm {
    pub email: String,
    pub password: SecretString,
    pub confirm_password: Option<SecretString>,
}

impl From<AuthForm> for Credentials {
    fn from(form: AuthForm) -> Self {
        Self {
            email: form.email,
            password: form.password.expose_secret().to_string(),
            confirm_password: form
                .confirm_password
                .map(|confirm| confirm.expose_secret().to_string()),
        }
    }
}

/// Open the auth modal.
#[instrument(skip(visitor))]
pub async fn open(visitor: Visitor) -> Result<Redirect> {
    visitor.dispatch(Action::OpenAuthModal).await?;
    Ok(Redirect::to("/"))
}

/// Close the auth modal, discarding any draft input.
#[instrument(skip(visitor))]
pub async fn close(visitor: Visitor) -> Result<Redirect> {
    visitor.dispatch(Action::CloseAuthModal).await?;
    Ok(Redirect::to("/"))
}

/// Switch the modal between sign-in and sign-up.
#[instrument(skip(visitor))]
pub async fn toggle(visitor: Visitor) -> Result<Redirect> {
    visitor.dispatch(Action::ToggleAuthMode).await?;
    Ok(Redirect::to("/"))
}

/// Submit the auth modal.
#[instrument(skip_all)]
pub async fn submit(visitor: Visitor, Form(form): Form<AuthForm>) -> Result<Redirect> {
    let mode = visitor.state().auth_modal.mode;
    let state = visitor.dispatch(Action::SubmitAuth(form.into())).await?;

    if let Some(user) = state.auth.current_user() {
        set_sentry_user(user.email.as_str());
        add_breadcrumb("auth", mode.label(), None);
        tracing::info!(mode = mode.label(), "visitor signed in");
    } else if let Some(error) = &state.auth_modal.error {
        tracing::info!(mode = mode.label(), error = %error, "auth form rejected");
    }

    Ok(Redirect::to("/"))
}

/// Sign out.
#[instrument(skip(visitor))]
pub async fn sign_out(visitor: Visitor) -> Result<Redirect> {
    visitor.dispatch(Action::SignOut).await?;
    clear_sentry_user();
    add_breadcrumb("auth", "sign_out", None);
    Ok(Redirect::to("/"))
}
