//! The canonical record of one observed request or response.
//!
//! # Design
//! A `LogEntry` is built once by the entry builder, handed to the renderer and
//! then dropped. Fields are private and there are no setters, so an entry
//! cannot change after construction. Data that only one kind may carry lives
//! in the `Details` sum type: a request entry has nowhere to store a status
//! code and a response entry has nowhere to store a method.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Header mapping as observed on the wire. Names are not case-normalized.
/// Ordered so that the rendered dump is deterministic.
pub type Headers = BTreeMap<String, String>;

/// Which rendering rules apply to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Request,
    Response,
}

/// Per-kind payload of a `LogEntry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Details {
    Request {
        method: Option<String>,
    },
    Response {
        status_code: Option<u16>,
        /// Resolved from `status_code`; empty when the code is unknown.
        status_text: Option<String>,
        /// Description of an observed transport error.
        error_text: Option<String>,
        /// Pretty-printed JSON payload.
        body: Option<String>,
    },
}

/// One observed request or response, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: DateTime<Utc>,
    request_name: String,
    url: Option<String>,
    headers: Option<Headers>,
    details: Details,
}

impl LogEntry {
    /// Stamps the entry with the current time.
    pub(crate) fn new(
        request_name: String,
        url: Option<String>,
        headers: Option<Headers>,
        details: Details,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            request_name,
            url,
            headers,
            details,
        }
    }

    pub fn kind(&self) -> LogKind {
        match self.details {
            Details::Request { .. } => LogKind::Request,
            Details::Response { .. } => LogKind::Response,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn request_name(&self) -> &str {
        &self.request_name
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Always `None` for response entries.
    pub fn method(&self) -> Option<&str> {
        match &self.details {
            Details::Request { method } => method.as_deref(),
            Details::Response { .. } => None,
        }
    }

    /// Always `None` for request entries, as are the three accessors below.
    pub fn status_code(&self) -> Option<u16> {
        match &self.details {
            Details::Response { status_code, .. } => *status_code,
            Details::Request { .. } => None,
        }
    }

    pub fn status_text(&self) -> Option<&str> {
        match &self.details {
            Details::Response { status_text, .. } => status_text.as_deref(),
            Details::Request { .. } => None,
        }
    }

    pub fn error_text(&self) -> Option<&str> {
        match &self.details {
            Details::Response { error_text, .. } => error_text.as_deref(),
            Details::Request { .. } => None,
        }
    }

    pub fn body(&self) -> Option<&str> {
        match &self.details {
            Details::Response { body, .. } => body.as_deref(),
            Details::Request { .. } => None,
        }
    }
}
