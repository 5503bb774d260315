//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the LS-8 ALU. Every operation names two registers
//! (`a` and `b`); results are written back to `a`, except `CMP`, which writes the
//! flag register. All arithmetic is 8-bit and wraps.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Mod, Inc, Dec
//! - [`logic`]:      And, Or, Xor, Not
//! - [`shifts`]:     Shl, Shr
//! - [`compare`]:    Cmp

/// Integer arithmetic operations.
pub mod arithmetic;

/// Comparison producing flags.
pub mod compare;

/// Bitwise logical operations.
pub mod logic;

/// Shift operations.
pub mod shifts;

use crate::common::error::MachineError;
use crate::common::reg::RegisterFile;
use crate::core::arch::flags::Flags;
use crate::isa::opcodes as op;

/// Operation selector for the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `a = a + b`
    Add,
    /// `a = a - b`
    Sub,
    /// `a = a * b`
    Mul,
    /// `a = a / b`
    Div,
    /// `a = a % b`
    Mod,
    /// `a = a + 1`
    Inc,
    /// `a = a - 1`
    Dec,
    /// `a = a & b`
    And,
    /// `a = a | b`
    Or,
    /// `a = a ^ b`
    Xor,
    /// `a = !a`
    Not,
    /// `a = a << b`
    Shl,
    /// `a = a >> b`
    Shr,
    /// `FL = compare(a, b)`
    Cmp,
}

impl AluOp {
    /// Selects the ALU operation for an opcode.
    ///
    /// # Errors
    ///
    /// [`MachineError::UnsupportedAluOperation`] if the opcode has no ALU
    /// operation. The dispatch table only routes ALU opcodes here, so this
    /// firing means the table and the ALU disagree.
    pub const fn from_opcode(opcode: u8) -> Result<Self, MachineError> {
        let op = match opcode {
            op::ADD => Self::Add,
            op::SUB => Self::Sub,
            op::MUL => Self::Mul,
            op::DIV => Self::Div,
            op::MOD => Self::Mod,
            op::INC => Self::Inc,
            op::DEC => Self::Dec,
            op::AND => Self::And,
            op::OR => Self::Or,
            op::XOR => Self::Xor,
            op::NOT => Self::Not,
            op::SHL => Self::Shl,
            op::SHR => Self::Shr,
            op::CMP => Self::Cmp,
            _ => return Err(MachineError::UnsupportedAluOperation { opcode }),
        };
        Ok(op)
    }

    /// Whether the operation reads only register `a`.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Inc | Self::Dec | Self::Not)
    }
}

/// Arithmetic Logic Unit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu;

impl Alu {
    /// Executes `op` on registers `a` and `b`.
    ///
    /// Register `b` is not read for unary operations. On error nothing has
    /// been written.
    ///
    /// # Arguments
    ///
    /// * `op`    - The ALU operation to perform.
    /// * `regs`  - Register file holding the operands and receiving the result.
    /// * `flags` - Flag register, written only by `Cmp`.
    /// * `a`     - Index of the first (destination) register.
    /// * `b`     - Index of the second register.
    ///
    /// # Errors
    ///
    /// [`MachineError::RegisterOutOfBounds`] for a bad register index and
    /// [`MachineError::DivideByZero`] for `Div`/`Mod` with a zero divisor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::common::RegisterFile;
    /// use ls8_core::core::arch::Flags;
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// let mut regs = RegisterFile::new();
    /// let mut flags = Flags::new();
    /// regs.write(0, 250).unwrap();
    /// regs.write(1, 10).unwrap();
    ///
    /// Alu::execute(AluOp::Add, &mut regs, &mut flags, 0, 1).unwrap();
    /// assert_eq!(regs.read(0).unwrap(), 4);
    ///
    /// Alu::execute(AluOp::Cmp, &mut regs, &mut flags, 0, 1).unwrap();
    /// assert!(flags.less());
    /// ```
    pub fn execute(
        op: AluOp,
        regs: &mut RegisterFile,
        flags: &mut Flags,
        a: usize,
        b: usize,
    ) -> Result<(), MachineError> {
        let lhs = regs.read(a)?;
        let rhs = if op.is_unary() { 0 } else { regs.read(b)? };

        match op {
            AluOp::Add
            | AluOp::Sub
            | AluOp::Mul
            | AluOp::Div
            | AluOp::Mod
            | AluOp::Inc
            | AluOp::Dec => {
                let value = arithmetic::execute(op, lhs, rhs)
                    .ok_or(MachineError::DivideByZero { register: b })?;
                regs.write(a, value)
            }

            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not => {
                regs.write(a, logic::execute(op, lhs, rhs))
            }

            AluOp::Shl | AluOp::Shr => regs.write(a, shifts::execute(op, lhs, rhs)),

            AluOp::Cmp => {
                *flags = compare::compare(lhs, rhs);
                Ok(())
            }
        }
    }
}
