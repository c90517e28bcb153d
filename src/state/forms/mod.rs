//! Form domain layer
//!
//! Type-safe contact form handling: field values, validation rules and the
//! submission state machine.

mod contact_form;
mod field;
mod validation;

pub use contact_form::{ContactForm, SubmissionState, SubmitOutcome, SubmitStart};
pub use field::{ContactMessage, FieldKey, FormFields, ParseFieldKeyError};
pub use validation::{validate, FieldErrors, ValidationError};
