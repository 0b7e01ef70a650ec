//! Human-readable logging of observed HTTP traffic.
//!
//! # Overview
//! Networking code hands over what it sent and what came back; this crate
//! turns each observation into a `LogEntry` and renders it as labeled
//! sections written to a sink. It only observes: requests and responses are
//! never altered.
//!
//! # Design
//! - The builder and renderer are pure and total. Missing data degrades to
//!   omitted sections or `None` placeholders, never to errors.
//! - Collaborators sit behind traits: observations (`RequestObservation`,
//!   `ResponseObservation`), status descriptions (`StatusLookup`), sinks
//!   (`LogOutput`) and printers (`LogPrinter`).
//! - Everything is synchronous. The only shared resource is the sink.
//!
//! ```
//! use netlog_core::{HttpMethod, HttpRequest, MemoryOutput, NetworkLog, NetworkLogger};
//!
//! let logger = NetworkLogger::new(MemoryOutput::new());
//! logger.log_request(
//!     &HttpRequest::new("GetGenres")
//!         .with_method(HttpMethod::Get)
//!         .with_url("http://x/y"),
//! );
//! let lines = logger.printer().output().lines();
//! assert_eq!(lines[3], "⬆️ Sending GET to http://x/y");
//! ```

pub mod builder;
pub mod config;
pub mod entry;
pub mod error;
pub mod logger;
pub mod observation;
pub mod output;
pub mod printer;
pub mod render;
pub mod status;

pub use builder::{build_request_entry, build_response_entry};
pub use config::{LoggerConfig, MarkerStyle, OutputTarget};
pub use entry::{Details, Headers, LogEntry, LogKind};
pub use error::ConfigError;
pub use logger::{NetworkLog, NetworkLogger};
pub use observation::{
    HttpMethod, HttpRequest, HttpResponse, RequestName, RequestObservation, ResponseObservation,
};
pub use output::{ConsoleOutput, LogOutput, MemoryOutput, TracingOutput};
pub use printer::{LogPrinter, NetworkLogPrinter};
pub use render::{render, render_with, Markers};
pub use status::{CanonicalReasons, StatusLookup};
