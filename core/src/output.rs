//! Output sinks for rendered lines.
//!
//! A sink accepts one section at a time and does not report failure. Sinks
//! take `&self` so one instance can be shared; any sink used from several
//! threads serializes its own writes.

use std::io;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

/// Receives rendered sections in emission order.
pub trait LogOutput {
    fn write(&self, line: &str);
}

impl<T: LogOutput + ?Sized> LogOutput for &T {
    fn write(&self, line: &str) {
        (**self).write(line)
    }
}

impl<T: LogOutput + ?Sized> LogOutput for Box<T> {
    fn write(&self, line: &str) {
        (**self).write(line)
    }
}

impl<T: LogOutput + ?Sized> LogOutput for Arc<T> {
    fn write(&self, line: &str) {
        (**self).write(line)
    }
}

/// Which standard stream a `ConsoleOutput` writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// Writes each section followed by a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOutput {
    stream: Stream,
}

impl ConsoleOutput {
    pub fn stdout() -> Self {
        Self { stream: Stream::Stdout }
    }

    pub fn stderr() -> Self {
        Self { stream: Stream::Stderr }
    }
}

impl LogOutput for ConsoleOutput {
    fn write(&self, line: &str) {
        use std::io::Write;

        // A closed pipe must not take the host down with it.
        let _ = match self.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{line}"),
            Stream::Stderr => writeln!(io::stderr().lock(), "{line}"),
        };
    }
}

/// Forwards each section to the host's `tracing` subscriber as an info event
/// with target `netlog`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingOutput;

impl LogOutput for TracingOutput {
    fn write(&self, line: &str) {
        info!(target: "netlog", "{line}");
    }
}

/// Keeps every section in memory.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    lines: Mutex<Vec<String>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns and clears the recorded sections.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl LogOutput for MemoryOutput {
    fn write(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}
