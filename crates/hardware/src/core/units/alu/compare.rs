//! ALU comparison.

use crate::core::arch::flags::Flags;

/// Compares two unsigned register values.
///
/// Exactly one of `E`, `G`, `L` is set in the result; all other bits are clear.
pub const fn compare(a: u8, b: u8) -> Flags {
    let ordering = if a == b {
        std::cmp::Ordering::Equal
    } else if a > b {
        std::cmp::Ordering::Greater
    } else {
        std::cmp::Ordering::Less
    };
    Flags::from_ordering(ordering)
}
