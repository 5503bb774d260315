//! Error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Load Errors:** Failures reading or parsing a program before execution starts.
//! 2. **Machine Errors:** Fatal faults raised by the fetch-decode-execute loop.
//! 3. **Config Errors:** Failures reading a JSON run configuration.
//!
//! None are recoverable within a run. The dispatcher stops and the error is surfaced
//! to whatever invoked the machine.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning a program listing into a memory image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program file '{}': {source}", path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A listing line did not contain a valid 8-bit binary literal.
    #[error("line {line}: invalid binary byte '{token}'")]
    Parse {
        /// 1-based line number in the listing.
        line: usize,
        /// The offending token after comment stripping.
        token: String,
    },

    /// The program image does not fit into RAM.
    #[error("program is {len} bytes but RAM holds only {capacity}")]
    ProgramTooLarge {
        /// Length of the program image.
        len: usize,
        /// RAM capacity in bytes.
        capacity: usize,
    },
}

/// Fatal faults raised while the machine is executing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The fetched opcode has no registered handler.
    #[error("undefined opcode {opcode:#010b} at pc {pc:#04x}")]
    Decode {
        /// The undecodable opcode byte.
        opcode: u8,
        /// Address the opcode was fetched from.
        pc: usize,
    },

    /// A memory access fell outside RAM.
    #[error("memory address {address:#x} out of bounds")]
    MemoryOutOfBounds {
        /// The offending address.
        address: usize,
    },

    /// A register operand named a register that does not exist.
    #[error("register index {index} out of bounds")]
    RegisterOutOfBounds {
        /// The offending register index.
        index: usize,
    },

    /// The ALU was asked to execute an opcode it has no operation for.
    #[error("unsupported ALU operation {opcode:#010b}")]
    UnsupportedAluOperation {
        /// The opcode routed to the ALU.
        opcode: u8,
    },

    /// DIV or MOD with a zero divisor.
    #[error("division by zero (divisor register R{register})")]
    DivideByZero {
        /// Index of the register holding the zero divisor.
        register: usize,
    },
}

/// Errors raised while reading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config file '{}': {source}", path.display())]
    Io {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
