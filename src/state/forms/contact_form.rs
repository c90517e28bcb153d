//! Contact form controller: field edits, validation and the submission lifecycle

use super::field::{ContactMessage, FieldKey, FormFields};
use super::validation::{validate, FieldErrors};
use crate::delivery::{deliver_with_timeout, DeliveryError, MessageDelivery};
use std::time::Duration;

/// Where the current submission attempt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Result of asking the controller to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation passed; deliver this snapshot and report back via `settle`
    Started(ContactMessage),
    /// Validation failed; errors are populated and nothing was sent
    Invalid,
    /// A submission is already in flight
    InFlight,
}

/// Final result of a full submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    AlreadySubmitting,
    Delivered,
    Failed,
}

/// Owns the contact form's fields, per-field errors and submission state.
///
/// Everything outside the controller only reads these through accessors.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: FormFields,
    errors: FieldErrors,
    submission: SubmissionState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    /// Replace a field's value, dropping any stale error for that field.
    ///
    /// Does not re-validate. Allowed while a submission is in flight; the
    /// in-flight snapshot is unaffected.
    pub fn update_field(&mut self, key: FieldKey, value: impl Into<String>) {
        self.fields.set(key, value.into());
        if self.errors.get(key).is_some() {
            self.errors.clear_field(key);
        }
    }

    /// Append a character to a field (keyboard input)
    pub fn push_char(&mut self, key: FieldKey, c: char) {
        let mut value = self.fields.get(key).to_string();
        value.push(c);
        self.update_field(key, value);
    }

    /// Remove the last character of a field (keyboard input)
    pub fn pop_char(&mut self, key: FieldKey) {
        let mut value = self.fields.get(key).to_string();
        if value.pop().is_some() {
            self.update_field(key, value);
        }
    }

    /// Validate and, if the form is valid, enter `Submitting`.
    ///
    /// On `Started` the caller owns the snapshot and must call
    /// [`ContactForm::settle`] exactly once with the delivery result.
    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.submission.is_submitting() {
            tracing::debug!("Ignoring submit while a submission is in flight");
            return SubmitStart::InFlight;
        }

        let (errors, is_valid) = validate(&self.fields);
        if !is_valid {
            tracing::debug!("Submit rejected by validation: {:?}", errors);
            self.errors = errors;
            return SubmitStart::Invalid;
        }

        self.submission = SubmissionState::Submitting;
        self.errors = FieldErrors::default();
        tracing::info!("Submitting contact message");
        SubmitStart::Started(ContactMessage::from(&self.fields))
    }

    /// Apply the delivery result of the in-flight submission
    pub fn settle(&mut self, result: Result<(), DeliveryError>) -> SubmissionState {
        if !self.submission.is_submitting() {
            tracing::warn!("Delivery settled with no submission in flight; ignoring");
            return self.submission;
        }

        match result {
            Ok(()) => {
                tracing::info!("Contact message delivered");
                self.submission = SubmissionState::Succeeded;
                self.fields.clear();
            }
            Err(e) => {
                tracing::warn!("Contact message delivery failed: {e}");
                self.submission = SubmissionState::Failed;
            }
        }
        self.submission
    }

    /// Run a whole submit cycle inline against `delivery`
    pub async fn submit(
        &mut self,
        delivery: &dyn MessageDelivery,
        timeout: Duration,
    ) -> SubmitOutcome {
        let snapshot = match self.begin_submit() {
            SubmitStart::Started(snapshot) => snapshot,
            SubmitStart::Invalid => return SubmitOutcome::Invalid,
            SubmitStart::InFlight => return SubmitOutcome::AlreadySubmitting,
        };

        let result = deliver_with_timeout(delivery, &snapshot, timeout).await;
        match self.settle(result) {
            SubmissionState::Succeeded => SubmitOutcome::Delivered,
            _ => SubmitOutcome::Failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::{MockMessageDelivery, SimulatedDelivery};
    use crate::state::ValidationError;
    use pretty_assertions::assert_eq;

    const TIMEOUT: Duration = Duration::from_secs(1);

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(FieldKey::Name, "Jane");
        form.update_field(FieldKey::Email, "jane@x.com");
        form.update_field(FieldKey::Message, "Hi");
        form
    }

    fn filled_fields() -> FormFields {
        FormFields {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    mod update_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initial_state() {
            let form = ContactForm::new();
            assert_eq!(form.fields(), &FormFields::default());
            assert!(form.errors().is_empty());
            assert_eq!(form.submission(), SubmissionState::Idle);
        }

        #[test]
        fn test_sets_value() {
            let mut form = ContactForm::new();
            form.update_field(FieldKey::Name, "x");
            assert_eq!(form.fields().name, "x");
        }

        #[test]
        fn test_clears_only_edited_error() {
            let mut form = ContactForm::new();
            assert_eq!(form.begin_submit(), SubmitStart::Invalid);
            assert!(form.errors().name.is_some());

            form.update_field(FieldKey::Name, "x");

            assert!(form.errors().name.is_none());
            assert_eq!(form.errors().email, Some(ValidationError::EmailRequired));
            assert_eq!(form.errors().message, Some(ValidationError::MessageRequired));
        }

        #[test]
        fn test_does_not_revalidate() {
            let mut form = ContactForm::new();
            form.update_field(FieldKey::Email, "bad");
            assert!(form.errors().email.is_none());

            form.begin_submit();
            assert_eq!(form.errors().email, Some(ValidationError::InvalidEmailFormat));

            // Still malformed, but the stale error goes away on edit
            form.update_field(FieldKey::Email, "bad2");
            assert!(form.errors().email.is_none());
        }

        #[test]
        fn test_push_and_pop_char() {
            let mut form = ContactForm::new();
            form.push_char(FieldKey::Message, 'h');
            form.push_char(FieldKey::Message, 'i');
            assert_eq!(form.fields().message, "hi");
            form.pop_char(FieldKey::Message);
            assert_eq!(form.fields().message, "h");
        }

        #[test]
        fn test_pop_char_on_empty_keeps_error() {
            let mut form = ContactForm::new();
            form.begin_submit();
            form.pop_char(FieldKey::Name);
            assert_eq!(form.errors().name, Some(ValidationError::NameRequired));
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_never_reaches_backend() {
            let mut form = ContactForm::new();
            form.update_field(FieldKey::Name, "Jane");
            form.update_field(FieldKey::Email, "jane@x.com");

            let mut mock = MockMessageDelivery::new();
            mock.expect_deliver().never();

            let outcome = form.submit(&mock, TIMEOUT).await;

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert_eq!(form.submission(), SubmissionState::Idle);
            assert_eq!(form.errors().text(FieldKey::Message), "Message is required");
            assert!(form.errors().name.is_none());
            assert!(form.errors().email.is_none());
        }

        #[tokio::test]
        async fn test_success_resets_fields() {
            let mut form = filled_form();
            let mut mock = MockMessageDelivery::new();
            mock.expect_deliver()
                .withf(|m| m.name == "Jane" && m.email == "jane@x.com" && m.message == "Hi")
                .times(1)
                .returning(|_| Ok(()));

            let outcome = form.submit(&mock, TIMEOUT).await;

            assert_eq!(outcome, SubmitOutcome::Delivered);
            assert_eq!(form.submission(), SubmissionState::Succeeded);
            assert_eq!(form.fields(), &FormFields::default());
            assert!(form.errors().is_empty());
        }

        #[tokio::test]
        async fn test_failure_keeps_fields() {
            let mut form = filled_form();
            let mut mock = MockMessageDelivery::new();
            mock.expect_deliver()
                .times(1)
                .returning(|_| Err(DeliveryError::Rejected("down".to_string())));

            let outcome = form.submit(&mock, TIMEOUT).await;

            assert_eq!(outcome, SubmitOutcome::Failed);
            assert_eq!(form.submission(), SubmissionState::Failed);
            assert_eq!(form.fields(), &filled_fields());
            assert!(form.errors().is_empty());
        }

        #[tokio::test]
        async fn test_timeout_is_failure() {
            let mut form = filled_form();
            let slow = SimulatedDelivery::new(Duration::from_secs(5), false);

            let outcome = form.submit(&slow, Duration::from_millis(10)).await;

            assert_eq!(outcome, SubmitOutcome::Failed);
            assert_eq!(form.submission(), SubmissionState::Failed);
            assert_eq!(form.fields(), &filled_fields());
        }

        #[tokio::test]
        async fn test_retry_after_failure_runs_full_cycle() {
            let mut form = filled_form();
            let mut failing = MockMessageDelivery::new();
            failing
                .expect_deliver()
                .times(1)
                .returning(|_| Err(DeliveryError::Rejected("down".to_string())));
            form.submit(&failing, TIMEOUT).await;

            let mut working = MockMessageDelivery::new();
            working.expect_deliver().times(1).returning(|_| Ok(()));
            let outcome = form.submit(&working, TIMEOUT).await;

            assert_eq!(outcome, SubmitOutcome::Delivered);
            assert_eq!(form.submission(), SubmissionState::Succeeded);
        }

        #[tokio::test]
        async fn test_invalid_submit_after_success_keeps_banner_state() {
            let mut form = filled_form();
            let mut mock = MockMessageDelivery::new();
            mock.expect_deliver().times(1).returning(|_| Ok(()));
            form.submit(&mock, TIMEOUT).await;

            // Fields were reset, so the next attempt fails validation
            let outcome = form.submit(&mock, TIMEOUT).await;

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert_eq!(form.submission(), SubmissionState::Succeeded);
            assert!(form.errors().name.is_some());
        }
    }

    mod lifecycle {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_begin_submit_enters_submitting_with_snapshot() {
            let mut form = filled_form();
            let start = form.begin_submit();
            assert_eq!(start, SubmitStart::Started(ContactMessage::from(&filled_fields())));
            assert_eq!(form.submission(), SubmissionState::Submitting);
        }

        #[test]
        fn test_begin_submit_clears_previous_errors() {
            let mut form = ContactForm::new();
            form.begin_submit();
            form.update_field(FieldKey::Name, "Jane");
            form.update_field(FieldKey::Email, "jane@x.com");
            // Message error is still set until the valid submit clears it
            form.errors.message = Some(ValidationError::MessageRequired);
            form.fields.message = "Hi".to_string();

            assert!(matches!(form.begin_submit(), SubmitStart::Started(_)));
            assert!(form.errors().is_empty());
        }

        #[tokio::test]
        async fn test_resubmit_while_submitting_is_noop() {
            let mut form = filled_form();
            let mut mock = MockMessageDelivery::new();
            mock.expect_deliver().never();

            assert!(matches!(form.begin_submit(), SubmitStart::Started(_)));

            let outcome = form.submit(&mock, TIMEOUT).await;
            assert_eq!(outcome, SubmitOutcome::AlreadySubmitting);
            assert_eq!(form.begin_submit(), SubmitStart::InFlight);
            assert_eq!(form.submission(), SubmissionState::Submitting);
        }

        #[test]
        fn test_edits_during_flight_do_not_touch_snapshot() {
            let mut form = filled_form();
            let SubmitStart::Started(snapshot) = form.begin_submit() else {
                panic!("expected submission to start");
            };

            form.update_field(FieldKey::Message, "Edited while sending");

            assert_eq!(snapshot.message, "Hi");
            assert_eq!(form.fields().message, "Edited while sending");
        }

        #[test]
        fn test_success_discards_edits_made_during_flight() {
            let mut form = filled_form();
            form.begin_submit();
            form.update_field(FieldKey::Message, "Edited while sending");

            assert_eq!(form.settle(Ok(())), SubmissionState::Succeeded);
            assert_eq!(form.fields(), &FormFields::default());
        }

        #[test]
        fn test_failure_keeps_edits_made_during_flight() {
            let mut form = filled_form();
            form.begin_submit();
            form.update_field(FieldKey::Message, "Edited while sending");

            let state = form.settle(Err(DeliveryError::Rejected("down".to_string())));
            assert_eq!(state, SubmissionState::Failed);
            assert_eq!(form.fields().message, "Edited while sending");
        }

        #[test]
        fn test_settle_without_flight_is_ignored() {
            let mut form = filled_form();
            assert_eq!(form.settle(Ok(())), SubmissionState::Idle);
            assert_eq!(form.fields(), &filled_fields());
        }

        #[test]
        fn test_settle_is_applied_once() {
            let mut form = filled_form();
            form.begin_submit();
            form.settle(Err(DeliveryError::Rejected("down".to_string())));

            // A late duplicate result must not flip the outcome
            assert_eq!(form.settle(Ok(())), SubmissionState::Failed);
            assert_eq!(form.fields(), &filled_fields());
        }
    }
}
