//! Delivers a rendered entry to a sink.

use crate::entry::LogEntry;
use crate::output::LogOutput;
use crate::render::{render_with, Markers};

/// Writes one `LogEntry` somewhere.
pub trait LogPrinter {
    fn write_log(&self, entry: &LogEntry);
}

impl<P: LogPrinter + ?Sized> LogPrinter for &P {
    fn write_log(&self, entry: &LogEntry) {
        (**self).write_log(entry)
    }
}

/// Renders an entry and writes its sections to `O`, one call per section.
#[derive(Debug, Clone)]
pub struct NetworkLogPrinter<O> {
    output: O,
    markers: Markers,
}

impl<O: LogOutput> NetworkLogPrinter<O> {
    pub fn new(output: O) -> Self {
        Self {
            output,
            markers: Markers::default(),
        }
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }
}

impl<O: LogOutput> LogPrinter for NetworkLogPrinter<O> {
    fn write_log(&self, entry: &LogEntry) {
        for line in render_with(entry, &self.markers) {
            self.output.write(&line);
        }
    }
}
