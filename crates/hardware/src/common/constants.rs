//! Global Machine Constants.
//!
//! This module defines the fixed parameters of this version of the LS-8 ISA. It includes:
//! 1. **Memory Constants:** RAM capacity and program load address.
//! 2. **Register Constants:** Register count and the reserved stack pointer slot.
//! 3. **Encoding Constants:** Opcode field masks and shifts used by the decoder.

/// RAM capacity in bytes.
pub const RAM_SIZE: usize = 256;

/// Address where program images are copied before execution.
pub const PROGRAM_BASE: usize = 0;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved for the stack pointer (R7).
pub const SP: usize = 7;

/// Initial stack pointer value; the stack is empty and grows downward.
pub const SP_INIT: u8 = 0xF4;

/// Shift that extracts the operand count from an opcode (`AA` in `AABCDDDD`).
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit set in opcodes handled by the ALU (`B` in `AABCDDDD`).
pub const ALU_BIT: u8 = 0b0010_0000;

/// Bit set in opcodes that set the program counter directly (`C` in `AABCDDDD`).
pub const SETS_PC_BIT: u8 = 0b0001_0000;
