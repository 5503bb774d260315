//! Output collaborator traits.
//!
//! This module defines the seams between the CPU and the outside world. It provides:
//! 1. **Program output:** `OutputSink` receives values emitted by `PRN` and `PRA`.
//! 2. **Tracing:** `TraceSink` receives a machine snapshot before each executed instruction.
//!
//! Both are fire-and-forget: a sink cannot fault the machine. Implementations that can
//! fail (e.g. writing to a closed pipe) log the failure and carry on.

use crate::core::cpu::trace::TraceSnapshot;

/// Destination for program output.
pub trait OutputSink {
    /// Emits a register value as a decimal number on its own line (`PRN`).
    fn print_number(&mut self, value: u8);

    /// Emits a register value as an ASCII character (`PRA`).
    fn print_char(&mut self, value: u8);
}

/// Destination for per-instruction trace records.
pub trait TraceSink {
    /// Records the machine state about to execute.
    fn record(&mut self, snapshot: &TraceSnapshot);
}

/// Discards all output.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn print_number(&mut self, _value: u8) {}

    fn print_char(&mut self, _value: u8) {}
}

impl TraceSink for NullSink {
    fn record(&mut self, _snapshot: &TraceSnapshot) {}
}
