//! Contact form validation rules

use super::field::{FieldKey, FormFields};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Local-part, `@`, domain, `.`, top-level segment; no whitespace or extra `@`.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// A rule a contact form field failed.
///
/// The display text is exactly what the form shows under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Message is required")]
    MessageRequired,
}

/// Per-field validation errors, parallel to [`FormFields`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub email: Option<ValidationError>,
    pub message: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, key: FieldKey) -> Option<ValidationError> {
        match key {
            FieldKey::Name => self.name,
            FieldKey::Email => self.email,
            FieldKey::Message => self.message,
        }
    }

    /// Error text for a field, or an empty string when it has none
    pub fn text(&self, key: FieldKey) -> String {
        self.get(key).map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn clear_field(&mut self, key: FieldKey) {
        match key {
            FieldKey::Name => self.name = None,
            FieldKey::Email => self.email = None,
            FieldKey::Message => self.message = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

fn validate_name(value: &str) -> Option<ValidationError> {
    value
        .trim()
        .is_empty()
        .then_some(ValidationError::NameRequired)
}

fn validate_email(value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError::EmailRequired)
    } else if !EMAIL_SHAPE.is_match(value) {
        Some(ValidationError::InvalidEmailFormat)
    } else {
        None
    }
}

fn validate_message(value: &str) -> Option<ValidationError> {
    value
        .trim()
        .is_empty()
        .then_some(ValidationError::MessageRequired)
}

/// Check every field and report all failures at once.
///
/// Returns the errors alongside whether the form is valid. Each rule runs
/// regardless of whether an earlier field failed.
pub fn validate(fields: &FormFields) -> (FieldErrors, bool) {
    let errors = FieldErrors {
        name: validate_name(&fields.name),
        email: validate_email(&fields.email),
        message: validate_message(&fields.message),
    };
    let is_valid = errors.is_empty();
    (errors, is_valid)
}
