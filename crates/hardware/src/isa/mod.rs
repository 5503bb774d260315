//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode table, opcode field extraction, decoding from RAM,
//! and the disassembler used for tracing and listings.

/// Instruction decoding from RAM or raw images.
pub mod decode;

/// Instruction disassembler for debug tracing and listings.
pub mod disasm;

/// Opcode field extraction and the decoded instruction type.
pub mod instruction;

/// Opcode constants.
pub mod opcodes;

pub use instruction::{Instruction, OpcodeBits};
