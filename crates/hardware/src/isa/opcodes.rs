//! LS-8 Opcodes.
//!
//! Opcodes follow the `AABCDDDD` layout: `AA` is the operand count, `B` marks ALU
//! operations, `C` marks instructions that set the PC, and `DDDD` identifies the
//! instruction within its group.

/// No operation.
pub const NOP: u8 = 0b0000_0000;
/// Halt the CPU.
pub const HLT: u8 = 0b0000_0001;
/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;
/// Pop the stack into a register.
pub const POP: u8 = 0b0100_0110;
/// Print a register as a decimal number.
pub const PRN: u8 = 0b0100_0111;
/// Print a register as an ASCII character.
pub const PRA: u8 = 0b0100_1000;

/// Call the subroutine at the address held in a register.
pub const CALL: u8 = 0b0101_0000;
/// Jump to the address held in a register.
pub const JMP: u8 = 0b0101_0100;
/// Jump if equal.
pub const JEQ: u8 = 0b0101_0101;
/// Jump if not equal.
pub const JNE: u8 = 0b0101_0110;
/// Jump if greater than.
pub const JGT: u8 = 0b0101_0111;
/// Jump if less than.
pub const JLT: u8 = 0b0101_1000;
/// Jump if less than or equal.
pub const JLE: u8 = 0b0101_1001;
/// Jump if greater than or equal.
pub const JGE: u8 = 0b0101_1010;

/// Increment a register.
pub const INC: u8 = 0b0110_0101;
/// Decrement a register.
pub const DEC: u8 = 0b0110_0110;
/// Bitwise NOT of a register.
pub const NOT: u8 = 0b0110_1001;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;
/// Load a register from the address held in another register.
pub const LD: u8 = 0b1000_0011;
/// Store a register to the address held in another register.
pub const ST: u8 = 0b1000_0100;

/// Add two registers.
pub const ADD: u8 = 0b1010_0000;
/// Subtract two registers.
pub const SUB: u8 = 0b1010_0001;
/// Multiply two registers.
pub const MUL: u8 = 0b1010_0010;
/// Divide two registers.
pub const DIV: u8 = 0b1010_0011;
/// Remainder of two registers.
pub const MOD: u8 = 0b1010_0100;
/// Compare two registers and set the flags.
pub const CMP: u8 = 0b1010_0111;
/// Bitwise AND of two registers.
pub const AND: u8 = 0b1010_1000;
/// Bitwise OR of two registers.
pub const OR: u8 = 0b1010_1010;
/// Bitwise XOR of two registers.
pub const XOR: u8 = 0b1010_1011;
/// Shift a register left by another register's value.
pub const SHL: u8 = 0b1010_1100;
/// Shift a register right by another register's value.
pub const SHR: u8 = 0b1010_1101;
