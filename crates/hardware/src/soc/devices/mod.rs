//! Output devices.
//!
//! The LS-8 has no memory-mapped I/O; `PRN` and `PRA` write straight to an
//! [`OutputSink`](crate::soc::traits::OutputSink). This module holds the concrete sinks.

/// Stdout, stderr, and in-memory consoles.
pub mod console;

pub use console::{BufferedConsole, StderrTrace, StdoutConsole};
