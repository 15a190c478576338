//! Contact form: validation, asynchronous submission, and the button state
//! around it.
//!
//! Submission is split in two halves. [`App::on_contact_submit`] validates,
//! locks the button and hands a request to the transport; the transport later
//! answers with a [`SubmitOutcome`] that [`App::on_submitted`] turns into a
//! notification. The button is restored on every outcome.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use regex::Regex;

use super::notify::Severity;
use crate::app::{App, NodeOf, Platform};
use crate::bindings::Event;
use crate::config::ContactConfig;
use crate::dom::Dom;
use crate::net::form::{FormRequest, FormTransport, SubmitOutcome};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";
pub const NETWORK_MESSAGE: &str = "Network error. Please try again.";

/// `local@domain.tld` with no whitespace anywhere.
static EMAIL_SHAPE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Why a form was not sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingField(String),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.as_ref().is_some_and(|shape| shape.is_match(email))
}

/// Check the four required entries. Absent and empty count the same.
///
/// # Errors
///
/// [`ValidationError::MissingField`] names the first empty field;
/// [`ValidationError::InvalidEmail`] is only reported once all are present.
pub fn validate(entries: &[(String, String)], fields: &ContactConfig) -> Result<(), ValidationError> {
    let value = |name: &str| entries.iter().find(|(k, _)| k == name).map_or("", |(_, v)| v.as_str());

    let required = [&fields.name_field, &fields.email_field, &fields.subject_field, &fields.message_field];
    if let Some(missing) = required.into_iter().find(|name| value(name.as_str()).is_empty()) {
        return Err(ValidationError::MissingField(missing.clone()));
    }
    if !is_valid_email(value(fields.email_field.as_str())) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// A request in flight and the button to restore when it settles.
#[derive(Clone, Debug)]
pub struct PendingSubmission<N> {
    pub form: N,
    pub button: Option<N>,
    pub original_label: Option<String>,
}

impl<P: Platform> App<P> {
    pub(crate) fn on_contact_submit(&mut self, event: &Event<NodeOf<P>>) {
        let Some(form) = event.current.clone() else {
            return;
        };
        if self.state.submission.is_some() {
            log::debug!("contact form already submitting; ignoring");
            return;
        }

        let entries = self.dom.form_entries(&form);
        if let Err(invalid) = validate(&entries, &self.config.contact) {
            log::debug!("contact form rejected: {invalid:?}");
            self.show_notification(&invalid.to_string(), Severity::Error);
            return;
        }

        let button = self.dom.query_in(&form, &self.config.selectors.submit_button);
        let original_label = button.as_ref().map(|b| self.dom.text(b));
        if let Some(button) = &button {
            self.dom.set_text(button, &self.config.contact.pending_label);
            self.dom.set_disabled(button, true);
        }

        let request = FormRequest { action: self.dom.form_action(&form), fields: entries };
        log::info!("submitting contact form to {}", request.action);
        self.state.submission = Some(PendingSubmission { form, button, original_label });
        self.transport.send(request);
    }

    pub(crate) fn on_submitted(&mut self, outcome: SubmitOutcome) {
        let Some(pending) = self.state.submission.take() else {
            log::debug!("submission settled with nothing pending");
            return;
        };

        match outcome {
            Ok(reply) if reply.is_success() => {
                log::info!("contact form accepted ({})", reply.status);
                self.show_notification(SUCCESS_MESSAGE, Severity::Success);
                self.dom.reset_form(&pending.form);
            }
            Ok(reply) => {
                log::warn!("contact form rejected with status {}: {:?}", reply.status, reply.errors);
                self.show_notification(FAILURE_MESSAGE, Severity::Error);
            }
            Err(e) => {
                log::error!("contact form submission failed: {e}");
                self.show_notification(NETWORK_MESSAGE, Severity::Error);
            }
        }

        if let Some(button) = &pending.button {
            if let Some(label) = &pending.original_label {
                self.dom.set_text(button, label);
            }
            self.dom.set_disabled(button, false);
        }
    }
}
