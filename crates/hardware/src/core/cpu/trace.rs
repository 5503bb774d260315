//! Trace snapshots.
//!
//! A snapshot captures PC, the three bytes at `PC..PC+3`, and all eight
//! registers just before an instruction executes. It renders as
//!
//! ```text
//! TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4
//! ```

use std::fmt;

use super::Cpu;
use crate::common::constants::NUM_REGISTERS;

/// Machine state about to execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceSnapshot {
    /// Program counter.
    pub pc: usize,
    /// Bytes at `pc`, `pc + 1`, `pc + 2`; zero past the end of RAM.
    pub bytes: [u8; 3],
    /// Register values `R0`-`R7`.
    pub regs: [u8; NUM_REGISTERS],
}

impl fmt::Display for TraceSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc, self.bytes[0], self.bytes[1], self.bytes[2]
        )?;
        for reg in self.regs {
            write!(f, " {reg:02X}")?;
        }
        Ok(())
    }
}

impl Cpu {
    /// Captures the current trace snapshot.
    pub fn trace_snapshot(&self) -> TraceSnapshot {
        TraceSnapshot {
            pc: self.pc,
            bytes: [
                self.ram.peek(self.pc),
                self.ram.peek(self.pc + 1),
                self.ram.peek(self.pc + 2),
            ],
            regs: *self.regs.as_array(),
        }
    }
}
