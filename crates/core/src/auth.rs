//! Mock authentication.
//!
//! There is no credential store. Signing in or up with any well-formed email
//! authenticates as that email; the only check beyond the input layer is that
//! a sign-up's password and confirmation match.

use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Email, EmailError};

/// Shortest password the sign-in / sign-up form accepts.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Validation failures surfaced in the auth modal's error slot.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters.")]
    PasswordTooShort { min: usize },

    #[error(transparent)]
    InvalidEmail(#[from] EmailError),
}

/// The signed-in visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub email: Email,
}

/// Who, if anyone, is signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AuthSession {
    #[default]
    Anonymous,
    Authenticated { user: CurrentUser },
}

impl AuthSession {
    /// Authenticate as `email`. Any previous user is replaced.
    pub fn sign_in(&mut self, email: Email, _password: &str) {
        *self = Self::Authenticated {
            user: CurrentUser { email },
        };
    }

    /// Create an account for `email` and authenticate as it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::PasswordMismatch`] and leaves the session untouched
    /// if `password` and `confirm_password` differ.
    pub fn sign_up(
        &mut self,
        email: Email,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), AuthError> {
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        self.sign_in(email, password);
        Ok(())
    }

    pub fn sign_out(&mut self) {
        *self = Self::Anonymous;
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&CurrentUser> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { user } => Some(user),
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Which form the auth modal is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
        }
    }
}

/// A submitted auth form, before validation.
#[derive(Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only present on the sign-up form.
    pub confirm_password: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field(
                "confirm_password",
                &self.confirm_password.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Credentials {
    /// Input-layer checks: a well-formed email and a password of at least
    /// [`MIN_PASSWORD_LENGTH`] characters.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn validate(&self) -> Result<Email, AuthError> {
        let email = Email::parse(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort {
                min: MIN_PASSWORD_LENGTH,
            });
        }
        Ok(email)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_sign_in_then_out() {
        let mut session = AuthSession::default();
        assert!(!session.is_authenticated());

        session.sign_in(email("a@b.com"), "whatever");
        assert_eq!(session.current_user().unwrap().email.as_str(), "a@b.com");

        session.sign_out();
        assert_eq!(session, AuthSession::Anonymous);
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_sign_in_replaces_user() {
        let mut session = AuthSession::default();
        session.sign_in(email("a@b.com"), "secret1");
        session.sign_in(email("c@d.com"), "secret2");
        assert_eq!(session.current_user().unwrap().email.as_str(), "c@d.com");
    }

    #[test]
    fn test_sign_out_when_anonymous() {
        let mut session = AuthSession::Anonymous;
        session.sign_out();
        assert_eq!(session, AuthSession::Anonymous);
    }

    #[test]
    fn test_sign_up_mismatch_keeps_anonymous() {
        let mut session = AuthSession::default();
        let result = session.sign_up(email("a@b.com"), "secret1", "secret2");
        assert_eq!(result, Err(AuthError::PasswordMismatch));
        assert_eq!(session, AuthSession::Anonymous);
        assert_eq!(
            AuthError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
    }

    #[test]
    fn test_sign_up_match_authenticates() {
        let mut session = AuthSession::default();
        session
            .sign_up(email("new@user.io"), "secret1", "secret1")
            .unwrap();
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_credentials_validation() {
        let ok = Credentials {
            email: "a@b.com".into(),
            password: "123456".into(),
            confirm_password: None,
        };
        assert_eq!(ok.validate().unwrap().as_str(), "a@b.com");

        let short = Credentials {
            password: "12345".into(),
            ..ok.clone()
        };
        assert_eq!(
            short.validate(),
            Err(AuthError::PasswordTooShort { min: 6 })
        );

        let bad_email = Credentials {
            email: "nope".into(),
            ..ok
        };
        assert!(matches!(
            bad_email.validate(),
            Err(AuthError::InvalidEmail(EmailError::Malformed))
        ));
    }

    #[test]
    fn test_credentials_debug_redacts_passwords() {
        let creds = Credentials {
            email: "a@b.com".into(),
            password: "hunter22".into(),
            confirm_password: Some("hunter23".into()),
        };
        let debug = format!("{creds:?}");
        assert!(debug.contains("a@b.com"));
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("hunter22"));
        assert!(!debug.contains("hunter23"));
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(AuthMode::default(), AuthMode::SignIn);
        assert_eq!(AuthMode::SignIn.toggled(), AuthMode::SignUp);
        assert_eq!(AuthMode::SignUp.toggled().label(), "Sign In");
    }

    #[test]
    fn test_session_serde_roundtrip() {
        let mut session = AuthSession::default();
        session.sign_in(email("a@b.com"), "secret1");
        let json = serde_json::to_string(&session).unwrap();
        let back: AuthSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
