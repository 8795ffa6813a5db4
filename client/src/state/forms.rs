//! Credential form state and submission.
//!
//! DESIGN
//! ======
//! Form values live in plain structs so validation and submission can be
//! tested without a DOM. Pages mirror these fields into signals, build the
//! struct at submit time, and act on the returned `SubmitResult`.
//!
//! ERROR HANDLING
//! ==============
//! Submission failures never leave the form: they become a message for the
//! page to show inline. Field values are never cleared on failure.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::api::ApiClient;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::routing::table::HOME_PATH;

pub const REGISTER_FALLBACK: &str = "Registration failed. Please try again.";
pub const LOGIN_FALLBACK: &str = "Login failed. Please try again.";

/// Client-side validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter your {0}.")]
    MissingField(&'static str),
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Outcome of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitResult {
    /// Navigate to this path.
    Redirect(&'static str),
    /// Stay on the form and show this message.
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

impl RegisterForm {
    /// Check required fields and password confirmation.
    ///
    /// Passwords are compared untrimmed; whitespace is significant in them.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule, checked in field order.
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        let username = required(&self.username, "username")?;
        let email = required(&self.email, "email")?;
        required(&self.password, "password")?;
        required(&self.confirmation, "password confirmation")?;
        if self.password != self.confirmation {
            return Err(FormError::PasswordMismatch);
        }
        Ok(RegisterRequest {
            username,
            email,
            password: self.password.clone(),
            confirmation: self.confirmation.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns [`FormError::MissingField`] for the first empty field.
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        let username = required(&self.username, "username")?;
        required(&self.password, "password")?;
        Ok(LoginRequest { username, password: self.password.clone() })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(trimmed.to_owned())
    }
}

/// Validate and send a registration.
pub async fn submit_registration(client: &ApiClient, form: &RegisterForm) -> SubmitResult {
    let request = match form.validate() {
        Ok(request) => request,
        Err(e) => return SubmitResult::Failed(e.to_string()),
    };
    match client.register_user(&request).await {
        Ok(_) => SubmitResult::Redirect(HOME_PATH),
        Err(e) => {
            leptos::logging::warn!("registration rejected: {e}");
            SubmitResult::Failed(e.user_message(REGISTER_FALLBACK))
        }
    }
}

/// Validate and send a login.
pub async fn submit_login(client: &ApiClient, form: &LoginForm) -> SubmitResult {
    let request = match form.validate() {
        Ok(request) => request,
        Err(e) => return SubmitResult::Failed(e.to_string()),
    };
    match client.login(&request).await {
        Ok(_) => SubmitResult::Redirect(HOME_PATH),
        Err(e) => {
            leptos::logging::warn!("login rejected: {e}");
            SubmitResult::Failed(e.user_message(LOGIN_FALLBACK))
        }
    }
}

/// Per-mount submission status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub busy: bool,
    pub error: Option<String>,
}

impl FormStatus {
    /// Mark a submit as started. Returns `false` if one is already running.
    pub fn start(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// Record the outcome. Returns the redirect target, if any.
    pub fn finish(&mut self, result: SubmitResult) -> Option<&'static str> {
        self.busy = false;
        match result {
            SubmitResult::Redirect(path) => Some(path),
            SubmitResult::Failed(message) => {
                self.error = Some(message);
                None
            }
        }
    }
}
