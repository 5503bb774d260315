//! ALU bitwise logical operations.

use super::AluOp;

/// Executes a logical operation.
///
/// `Not` ignores `b`. Non-logic opcodes return `a` unchanged.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        _ => a,
    }
}
