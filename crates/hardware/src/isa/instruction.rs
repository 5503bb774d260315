//! Instruction encoding and decoding utilities.
//!
//! Provides field extraction for LS-8 opcode bytes and the transient `Instruction`
//! value the dispatcher builds each fetch cycle.

use crate::common::constants::{ALU_BIT, OPERAND_COUNT_SHIFT, SETS_PC_BIT};

/// Trait for extracting fields from an LS-8 opcode byte.
pub trait OpcodeBits {
    /// Number of operand bytes following the opcode (`AA`, 0-2).
    fn operand_count(&self) -> usize;

    /// Total encoded length in bytes, opcode included.
    fn instruction_len(&self) -> usize {
        1 + self.operand_count()
    }

    /// Whether the opcode is executed by the ALU (`B`).
    fn is_alu(&self) -> bool;

    /// Whether the opcode may set the PC itself (`C`).
    fn sets_pc(&self) -> bool;
}

impl OpcodeBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> usize {
        (*self >> OPERAND_COUNT_SHIFT) as usize
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_BIT != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_BIT != 0
    }
}

/// A decoded instruction.
///
/// Operands the opcode does not declare are zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Address the opcode was fetched from.
    pub address: usize,
    /// The opcode byte.
    pub opcode: u8,
    /// First operand byte (register index or unused).
    pub operand_a: u8,
    /// Second operand byte (register index, immediate, or unused).
    pub operand_b: u8,
}

impl Instruction {
    /// Encoded length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.opcode.instruction_len()
    }

    /// Instructions always occupy at least the opcode byte.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// First operand as a register index.
    #[inline]
    pub const fn reg_a(&self) -> usize {
        self.operand_a as usize
    }

    /// Second operand as a register index.
    #[inline]
    pub const fn reg_b(&self) -> usize {
        self.operand_b as usize
    }
}
