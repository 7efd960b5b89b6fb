//! Credentials draft, its validation, and the simulated sign-in.

use crate::config::{SIGN_IN_DELAY_MS, SIGN_IN_ENDPOINT, SIGN_UP_ENDPOINT};
use crate::validation::{record, validate_email, validate_password, ErrorMap, FieldError};
use gloo_timers::callback::Timeout;
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn endpoint(self) -> &'static str {
        match self {
            AuthMode::SignIn => SIGN_IN_ENDPOINT,
            AuthMode::SignUp => SIGN_UP_ENDPOINT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthField {
    Email,
    Password,
    ConfirmPassword,
}

/// Unsubmitted sign-in / sign-up form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CredentialsDraft {
    pub email: String,
    pub password: String,
    /// Only consulted in [`AuthMode::SignUp`].
    pub confirm_password: String,
    pub mode: AuthMode,
}

impl CredentialsDraft {
    pub fn set_field(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
            AuthField::ConfirmPassword => self.confirm_password = value,
        }
    }

    /// Switch between sign-in and sign-up. Email and password survive; the
    /// confirmation does not.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.confirm_password.clear();
    }
}

/// Body of the (not yet wired) `POST /api/auth/{signin,signup}` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRequest {
    #[serde(skip)]
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
}

impl AuthRequest {
    pub fn endpoint(&self) -> &'static str {
        self.mode.endpoint()
    }
}

pub fn validate_auth(draft: &CredentialsDraft) -> ErrorMap<AuthField> {
    let mut errors = ErrorMap::new();

    record(&mut errors, AuthField::Email, validate_email(&draft.email));
    record(&mut errors, AuthField::Password, validate_password(&draft.password));

    if draft.mode == AuthMode::SignUp {
        let confirmation = if draft.confirm_password.is_empty() {
            Err(FieldError::Required("Confirm password"))
        } else if draft.password != draft.confirm_password {
            Err(FieldError::PasswordMismatch)
        } else {
            Ok(())
        };
        record(&mut errors, AuthField::ConfirmPassword, confirmation);
    }

    errors
}

/// Validate and build the request the submit would send.
pub fn prepare_auth(draft: &CredentialsDraft) -> Result<AuthRequest, ErrorMap<AuthField>> {
    let errors = validate_auth(draft);
    if !errors.is_empty() {
        debug!("auth draft rejected: {} field error(s)", errors.len());
        return Err(errors);
    }
    Ok(AuthRequest {
        mode: draft.mode,
        email: draft.email.clone(),
        password: draft.password.clone(),
    })
}

/// Validate, then wait out the simulated round trip.
///
/// Resolves with the request that would have been posted. Dropping the
/// future before it resolves cancels the pending delay.
pub async fn submit_auth(draft: &CredentialsDraft) -> Result<AuthRequest, ErrorMap<AuthField>> {
    let request = prepare_auth(draft)?;
    gloo_timers::future::TimeoutFuture::new(SIGN_IN_DELAY_MS).await;
    log_accepted(&request);
    Ok(request)
}

fn log_accepted(request: &AuthRequest) {
    info!("{} accepted for {}", request.endpoint(), request.email);
}

/// An in-flight simulated sign-in.
///
/// Owns the timer; dropping or [`cancel`](PendingSignIn::cancel)ling it
/// guarantees the completion callback never runs.
pub struct PendingSignIn {
    timer: Option<Timeout>,
}

impl PendingSignIn {
    pub fn start<F>(request: AuthRequest, delay_ms: u32, on_complete: F) -> Self
    where
        F: FnOnce(AuthRequest) + 'static,
    {
        debug!("{} pending for {} ms", request.endpoint(), delay_ms);
        let timer = Timeout::new(delay_ms, move || {
            log_accepted(&request);
            on_complete(request);
        });
        Self { timer: Some(timer) }
    }

    pub fn cancel(mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            debug!("pending sign-in cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(email: &str, password: &str, confirm: &str, mode: AuthMode) -> CredentialsDraft {
        CredentialsDraft {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
            mode,
        }
    }

    #[test]
    fn empty_sign_in_flags_email_and_password() {
        let errors = validate_auth(&CredentialsDraft::default());
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![AuthField::Email, AuthField::Password]
        );
        assert_eq!(errors[&AuthField::Email], "Email is required");
        assert_eq!(errors[&AuthField::Password], "Password is required");
    }

    #[test]
    fn empty_sign_up_also_flags_confirmation() {
        let errors = validate_auth(&draft("", "", "", AuthMode::SignUp));
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors[&AuthField::ConfirmPassword],
            "Confirm password is required"
        );
    }

    #[test]
    fn valid_sign_in_has_no_errors() {
        assert!(validate_auth(&draft("a@b.com", "123456", "", AuthMode::SignIn)).is_empty());
    }

    #[test]
    fn bad_email_only_flags_email() {
        let errors = validate_auth(&draft("bad", "123456", "", AuthMode::SignIn));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&AuthField::Email], "Email is invalid");
    }

    #[test]
    fn confirmation_ignored_when_signing_in() {
        let errors = validate_auth(&draft("a@b.com", "123456", "different", AuthMode::SignIn));
        assert!(errors.is_empty());
    }

    #[test]
    fn sign_up_requires_matching_confirmation() {
        let errors = validate_auth(&draft("a@b.com", "123456", "654321", AuthMode::SignUp));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&AuthField::ConfirmPassword], "Passwords do not match");

        assert!(validate_auth(&draft("a@b.com", "123456", "123456", AuthMode::SignUp)).is_empty());
    }

    #[test]
    fn toggling_mode_clears_confirmation_only() {
        let mut d = draft("a@b.com", "123456", "123456", AuthMode::SignUp);
        d.toggle_mode();
        assert_eq!(d.mode, AuthMode::SignIn);
        assert_eq!(d.email, "a@b.com");
        assert_eq!(d.password, "123456");
        assert!(d.confirm_password.is_empty());
    }

    #[test]
    fn prepared_request_targets_mode_endpoint() {
        let req = prepare_auth(&draft("a@b.com", "123456", "123456", AuthMode::SignUp)).unwrap();
        assert_eq!(req.endpoint(), "/api/auth/signup");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "email": "a@b.com", "password": "123456" })
        );

        let err = prepare_auth(&draft("bad", "1", "", AuthMode::SignIn)).unwrap_err();
        assert_eq!(err.len(), 2);
    }
}
