//! Turns observations into `LogEntry` values.
//!
//! # Design
//! Both constructors are total: absent inputs stay absent and nothing is
//! replaced by placeholder text here (that is the renderer's job). A payload
//! that cannot be shown as JSON degrades to "no body" without surfacing an
//! error to the caller.

use std::error::Error;

use serde_json::Value;
use tracing::debug;

use crate::entry::{Details, Headers, LogEntry};
use crate::observation::{RequestObservation, ResponseObservation};
use crate::status::StatusLookup;

/// Builds a request entry stamped with the current time.
pub fn build_request_entry(
    request_name: &str,
    method: Option<&str>,
    url: Option<&str>,
    headers: Option<Headers>,
) -> LogEntry {
    LogEntry::new(
        request_name.to_string(),
        url.map(str::to_string),
        headers,
        Details::Request {
            method: method.map(str::to_string),
        },
    )
}

/// Builds a response entry stamped with the current time.
///
/// A present status code always yields a status text, empty if `lookup` does
/// not know the code. `error` is recorded independently of the status.
pub fn build_response_entry(
    request_name: &str,
    url: Option<&str>,
    status_code: Option<u16>,
    headers: Option<Headers>,
    error: Option<&dyn Error>,
    body: Option<&[u8]>,
    lookup: &dyn StatusLookup,
) -> LogEntry {
    LogEntry::new(
        request_name.to_string(),
        url.map(str::to_string),
        headers,
        Details::Response {
            status_code,
            status_text: status_code.map(|code| lookup.description(code)),
            error_text: error.map(|err| err.to_string()),
            body: body.and_then(pretty_json),
        },
    )
}

pub fn request_entry(request: &dyn RequestObservation) -> LogEntry {
    build_request_entry(
        request.request_name(),
        request.method(),
        request.url().as_deref(),
        request.headers(),
    )
}

pub fn response_entry(
    response: &dyn ResponseObservation,
    error: Option<&dyn Error>,
    lookup: &dyn StatusLookup,
) -> LogEntry {
    build_response_entry(
        response.request_name(),
        response.url().as_deref(),
        response.status_code(),
        response.headers(),
        error,
        response.body(),
        lookup,
    )
}

/// Re-serializes a JSON object or array with indentation.
///
/// Bare scalars are not treated as a document and yield `None`, as do empty
/// and malformed payloads.
fn pretty_json(bytes: &[u8]) -> Option<String> {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, len = bytes.len(), "response body is not JSON, omitting");
            return None;
        }
    };
    if !(value.is_object() || value.is_array()) {
        debug!("response body is a bare JSON scalar, omitting");
        return None;
    }
    serde_json::to_string_pretty(&value).ok()
}
