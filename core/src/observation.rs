//! Read-only views of observed traffic.
//!
//! # Design
//! The logger never touches the network. The host performs the round-trip and
//! hands over an observation of what it sent or received. Any type can be an
//! observation by implementing `RequestObservation` / `ResponseObservation`;
//! `HttpRequest` and `HttpResponse` are plain-data carriers for hosts that do
//! not already have a suitable type, and `http::Request<B>` is supported
//! directly.
//!
//! All accessors are optional except the request name: a request may lack a
//! method or URL, and a response observed after a transport failure has no
//! status code.

use std::borrow::Cow;

use http::HeaderMap;

use crate::entry::Headers;

/// Name used when an `http::Request` carries no `RequestName` extension.
pub const UNNAMED_REQUEST: &str = "Unknown";

/// What the logger needs to know about an outgoing request.
pub trait RequestObservation {
    /// Caller-supplied label for the logical operation, e.g. `GetGenres`.
    fn request_name(&self) -> &str;
    fn method(&self) -> Option<&str>;
    fn url(&self) -> Option<Cow<'_, str>>;
    fn headers(&self) -> Option<Headers>;
}

/// What the logger needs to know about a received response.
pub trait ResponseObservation {
    fn request_name(&self) -> &str;
    /// `None` when no HTTP response arrived at all.
    fn status_code(&self) -> Option<u16>;
    fn url(&self) -> Option<Cow<'_, str>>;
    fn headers(&self) -> Option<Headers>;
    /// Raw payload bytes, if any were read.
    fn body(&self) -> Option<&[u8]>;
}

/// HTTP method for a request.
///
/// `Other` carries any verb not listed here, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Other(String),
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Other(method) => method,
        }
    }
}

impl From<&str> for HttpMethod {
    fn from(method: &str) -> Self {
        match method {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            "HEAD" => HttpMethod::Head,
            "OPTIONS" => HttpMethod::Options,
            other => HttpMethod::Other(other.to_string()),
        }
    }
}

impl From<&http::Method> for HttpMethod {
    fn from(method: &http::Method) -> Self {
        HttpMethod::from(method.as_str())
    }
}

/// An outgoing request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub name: String,
    pub method: Option<HttpMethod>,
    pub url: Option<String>,
    pub headers: Option<Headers>,
}

impl HttpRequest {
    /// A request with only a name; everything else absent.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method: None,
            url: None,
            headers: None,
        }
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Adds one header, creating the mapping on first use.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }
}

impl RequestObservation for HttpRequest {
    fn request_name(&self) -> &str {
        &self.name
    }

    fn method(&self) -> Option<&str> {
        self.method.as_ref().map(HttpMethod::as_str)
    }

    fn url(&self) -> Option<Cow<'_, str>> {
        self.url.as_deref().map(Cow::Borrowed)
    }

    fn headers(&self) -> Option<Headers> {
        self.headers.clone()
    }
}

/// A received response (or the absence of one) described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub name: String,
    pub status: Option<u16>,
    pub url: Option<String>,
    pub headers: Option<Headers>,
    pub body: Option<Vec<u8>>,
}

impl HttpResponse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: None,
            url: None,
            headers: None,
            body: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Captures an `http::Response`. The response does not know which URL
    /// it came from, so the caller passes it along.
    pub fn from_http<B: AsRef<[u8]>>(
        name: impl Into<String>,
        url: Option<String>,
        response: &http::Response<B>,
    ) -> Self {
        Self {
            name: name.into(),
            status: Some(response.status().as_u16()),
            url,
            headers: Some(headers_from_map(response.headers())),
            body: Some(response.body().as_ref().to_vec()),
        }
    }
}

impl ResponseObservation for HttpResponse {
    fn request_name(&self) -> &str {
        &self.name
    }

    fn status_code(&self) -> Option<u16> {
        self.status
    }

    fn url(&self) -> Option<Cow<'_, str>> {
        self.url.as_deref().map(Cow::Borrowed)
    }

    fn headers(&self) -> Option<Headers> {
        self.headers.clone()
    }

    fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

/// Logical request name carried as an `http::Request` extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestName(pub String);

impl<B> RequestObservation for http::Request<B> {
    fn request_name(&self) -> &str {
        self.extensions()
            .get::<RequestName>()
            .map(|name| name.0.as_str())
            .unwrap_or(UNNAMED_REQUEST)
    }

    fn method(&self) -> Option<&str> {
        Some(self.method().as_str())
    }

    fn url(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.uri().to_string()))
    }

    fn headers(&self) -> Option<Headers> {
        Some(headers_from_map(self.headers()))
    }
}

/// Flattens a `HeaderMap`. Repeated names are joined with `", "`.
///
/// Values that are not visible ASCII are decoded as UTF-8, with invalid bytes
/// replaced by U+FFFD.
pub fn headers_from_map(map: &HeaderMap) -> Headers {
    map.keys()
        .map(|name| {
            let values: Vec<_> = map
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()))
                .collect();
            (name.as_str().to_string(), values.join(", "))
        })
        .collect()
}
