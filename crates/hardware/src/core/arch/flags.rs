//! LS-8 Flag Register.
//!
//! The `FL` register holds the outcome of the most recent `CMP` in the layout
//! `00000LGE`. Exactly one bit is set after a comparison; the register persists
//! until the next `CMP` overwrites it.

use std::cmp::Ordering;
use std::fmt;

/// Equal bit.
pub const FLAG_E: u8 = 0b0000_0001;
/// Greater-than bit.
pub const FLAG_G: u8 = 0b0000_0010;
/// Less-than bit.
pub const FLAG_L: u8 = 0b0000_0100;

/// Comparison flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags(u8);

impl Flags {
    /// All flags clear (power-on state).
    pub const fn new() -> Self {
        Self(0)
    }

    /// Flags describing how `a` compares to `b`.
    pub const fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Equal => Self(FLAG_E),
            Ordering::Greater => Self(FLAG_G),
            Ordering::Less => Self(FLAG_L),
        }
    }

    /// Raw `00000LGE` bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `E` is set.
    pub const fn equal(self) -> bool {
        self.0 & FLAG_E != 0
    }

    /// `G` is set.
    pub const fn greater(self) -> bool {
        self.0 & FLAG_G != 0
    }

    /// `L` is set.
    pub const fn less(self) -> bool {
        self.0 & FLAG_L != 0
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bit = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}",
            bit(self.less(), 'L'),
            bit(self.greater(), 'G'),
            bit(self.equal(), 'E')
        )
    }
}
