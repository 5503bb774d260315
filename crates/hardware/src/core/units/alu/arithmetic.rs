//! ALU arithmetic operations.
//!
//! Implements 8-bit addition, subtraction, multiplication, division, and
//! remainder, plus increment and decrement. Results wrap modulo 256; nothing is
//! promoted to a wider type.

use super::AluOp;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - First operand.
/// * `b`  - Second operand (ignored by `Inc`/`Dec`).
///
/// # Returns
///
/// The wrapped 8-bit result, or `None` when `Div`/`Mod` has a zero divisor.
/// Non-arithmetic opcodes return `a` unchanged.
pub const fn execute(op: AluOp, a: u8, b: u8) -> Option<u8> {
    match op {
        AluOp::Add => Some(a.wrapping_add(b)),
        AluOp::Sub => Some(a.wrapping_sub(b)),
        AluOp::Mul => Some(a.wrapping_mul(b)),
        AluOp::Div => a.checked_div(b),
        AluOp::Mod => a.checked_rem(b),
        AluOp::Inc => Some(a.wrapping_add(1)),
        AluOp::Dec => Some(a.wrapping_sub(1)),
        _ => Some(a),
    }
}
