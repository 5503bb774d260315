//! Console devices.
//!
//! Concrete output sinks for the LS-8. It provides:
//! 1. **`StdoutConsole`:** Writes program output to stdout, flushing per character.
//! 2. **`StderrTrace`:** Writes trace lines to stderr.
//! 3. **`BufferedConsole`:** Captures everything in memory for embedding and tests.

use std::borrow::Cow;
use std::io::{self, Write};

use crate::core::cpu::trace::TraceSnapshot;
use crate::soc::traits::{OutputSink, TraceSink};

/// Writes program output to the process's stdout.
#[derive(Debug, Default)]
pub struct StdoutConsole;

impl StdoutConsole {
    /// Creates a stdout console.
    pub const fn new() -> Self {
        Self
    }
}

impl OutputSink for StdoutConsole {
    fn print_number(&mut self, value: u8) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{value}") {
            tracing::warn!("console write failed: {e}");
        }
    }

    fn print_char(&mut self, value: u8) {
        let mut out = io::stdout().lock();
        if let Err(e) = out.write_all(&[value]).and_then(|()| out.flush()) {
            tracing::warn!("console write failed: {e}");
        }
    }
}

/// Writes trace lines to the process's stderr.
#[derive(Debug, Default)]
pub struct StderrTrace;

impl StderrTrace {
    /// Creates a stderr trace sink.
    pub const fn new() -> Self {
        Self
    }
}

impl TraceSink for StderrTrace {
    fn record(&mut self, snapshot: &TraceSnapshot) {
        let mut err = io::stderr().lock();
        if let Err(e) = writeln!(err, "{snapshot}") {
            tracing::warn!("trace write failed: {e}");
        }
    }
}

/// In-memory console capturing program output and trace lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferedConsole {
    /// Values emitted by `PRN`, in execution order.
    pub numbers: Vec<u8>,
    /// Every byte emitted, exactly as stdout would receive it.
    pub bytes: Vec<u8>,
    /// Rendered trace lines, in execution order.
    pub trace: Vec<String>,
}

impl BufferedConsole {
    /// Creates an empty console.
    pub const fn new() -> Self {
        Self {
            numbers: Vec::new(),
            bytes: Vec::new(),
            trace: Vec::new(),
        }
    }

    /// Output decoded as UTF-8; invalid sequences become `U+FFFD`.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Output as individual lines.
    pub fn lines(&self) -> Vec<String> {
        self.text().lines().map(str::to_owned).collect()
    }
}

impl OutputSink for BufferedConsole {
    fn print_number(&mut self, value: u8) {
        self.numbers.push(value);
        self.bytes.extend_from_slice(value.to_string().as_bytes());
        self.bytes.push(b'\n');
    }

    fn print_char(&mut self, value: u8) {
        self.bytes.push(value);
    }
}

impl TraceSink for BufferedConsole {
    fn record(&mut self, snapshot: &TraceSnapshot) {
        self.trace.push(snapshot.to_string());
    }
}
