//! Logging façade: build an entry, then print it.

use std::error::Error;

use tracing::trace;

use crate::builder::{request_entry, response_entry};
use crate::config::LoggerConfig;
use crate::observation::{RequestObservation, ResponseObservation};
use crate::output::LogOutput;
use crate::printer::{LogPrinter, NetworkLogPrinter};
use crate::status::{CanonicalReasons, StatusLookup};

/// Operations exposed to networking code.
pub trait NetworkLog {
    fn log_request(&self, request: &dyn RequestObservation);

    fn log_response(&self, response: &dyn ResponseObservation) {
        self.log_response_with_error(response, None);
    }

    /// `error` is the transport error observed alongside (or instead of) the
    /// response, if any.
    fn log_response_with_error(&self, response: &dyn ResponseObservation, error: Option<&dyn Error>);
}

/// Composes the entry builder with a `LogPrinter`.
///
/// Holds no mutable state; whether concurrent use is safe depends only on
/// the printer's sink.
#[derive(Debug, Clone)]
pub struct NetworkLogger<P, L = CanonicalReasons> {
    printer: P,
    lookup: L,
}

impl<O: LogOutput> NetworkLogger<NetworkLogPrinter<O>> {
    /// Logs to `output` with the default markers and reason phrases.
    pub fn new(output: O) -> Self {
        Self::with_printer(NetworkLogPrinter::new(output))
    }
}

impl NetworkLogger<NetworkLogPrinter<Box<dyn LogOutput + Send + Sync>>> {
    pub fn from_config(config: &LoggerConfig) -> Self {
        let printer = NetworkLogPrinter::new(config.build_output()).with_markers(config.markers.markers());
        Self::with_printer(printer)
    }
}

impl<P: LogPrinter> NetworkLogger<P> {
    pub fn with_printer(printer: P) -> Self {
        Self {
            printer,
            lookup: CanonicalReasons,
        }
    }
}

impl<P, L> NetworkLogger<P, L> {
    /// Replaces the status-description table.
    pub fn with_status_lookup<M: StatusLookup>(self, lookup: M) -> NetworkLogger<P, M> {
        NetworkLogger {
            printer: self.printer,
            lookup,
        }
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }
}

impl<P: LogPrinter, L: StatusLookup> NetworkLog for NetworkLogger<P, L> {
    fn log_request(&self, request: &dyn RequestObservation) {
        let entry = request_entry(request);
        trace!(request_name = entry.request_name(), "logging request");
        self.printer.write_log(&entry);
    }

    fn log_response_with_error(&self, response: &dyn ResponseObservation, error: Option<&dyn Error>) {
        let entry = response_entry(response, error, &self.lookup);
        trace!(
            request_name = entry.request_name(),
            status = entry.status_code(),
            failed = error.is_some(),
            "logging response"
        );
        self.printer.write_log(&entry);
    }
}
