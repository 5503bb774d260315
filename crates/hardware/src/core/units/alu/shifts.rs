//! ALU shift operations.
//!
//! The shift amount is the full value of register `b`. Shifting an 8-bit
//! register by 8 or more clears it.

use super::AluOp;

/// Executes a shift operation.
///
/// Non-shift opcodes return `a` unchanged.
pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
    let amount = b as u32;
    match op {
        AluOp::Shl => match a.checked_shl(amount) {
            Some(v) => v,
            None => 0,
        },
        AluOp::Shr => match a.checked_shr(amount) {
            Some(v) => v,
            None => 0,
        },
        _ => a,
    }
}
