//! Contact form submission port.
//!
//! The app hands a [`FormRequest`] to a [`FormTransport`] and forgets about
//! it. The transport performs the POST asynchronously and reports back with a
//! [`SubmitOutcome`] through the app's message channel. The browser transport
//! lives in `web::http`; [`RecordingTransport`] captures requests in tests.
//!
//! The backend answers JSON. On rejection it sends
//! `{"errors":[{"field":"email","message":"should be an email"}]}`; those
//! messages are kept for diagnostics only, the user sees a generic text.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::Deserialize;

use crate::error::Error;

/// `Accept` header value sent with every submission.
pub const ACCEPT_JSON: &str = "application/json";

/// A multipart POST of form entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormRequest {
    pub action: String,
    pub fields: Vec<(String, String)>,
}

impl FormRequest {
    /// Value of the first entry named `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

/// An HTTP response from the form backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormReply {
    pub status: u16,
    /// Backend error messages, `field: message` when a field is named.
    pub errors: Vec<String>,
}

impl FormReply {
    /// Build a reply from a status and raw body. Unparseable bodies carry no errors.
    pub fn from_body(status: u16, body: &str) -> Self {
        Self { status, errors: backend_errors(body) }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// How a submission settled: an HTTP reply of any status, or no reply at all.
pub type SubmitOutcome = Result<FormReply, Error>;

/// Sends form requests without blocking the caller.
pub trait FormTransport {
    fn send(&mut self, request: FormRequest);
}

/// Transport that only records what it was asked to send.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    pub sent: Vec<FormRequest>,
}

impl FormTransport for RecordingTransport {
    fn send(&mut self, request: FormRequest) {
        self.sent.push(request);
    }
}

#[derive(Deserialize)]
struct BackendReply {
    #[serde(default)]
    errors: Vec<BackendError>,
}

#[derive(Deserialize)]
struct BackendError {
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    message: String,
}

fn backend_errors(body: &str) -> Vec<String> {
    let Ok(reply) = serde_json::from_str::<BackendReply>(body) else {
        return Vec::new();
    };
    reply
        .errors
        .into_iter()
        .map(|e| match e.field {
            Some(field) => format!("{field}: {}", e.message),
            None => e.message,
        })
        .collect()
}
