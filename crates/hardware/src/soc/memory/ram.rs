//! Main Memory.
//!
//! This module provides `Ram`, the flat 256-byte memory that holds both the program
//! image and data. It provides:
//! 1. **Storage:** A fixed, zero-initialised byte array allocated once per machine.
//! 2. **Access:** Bounds-checked byte reads and writes.
//! 3. **Loading:** Verbatim copy of a program image to [`PROGRAM_BASE`].

use crate::common::constants::{PROGRAM_BASE, RAM_SIZE};
use crate::common::error::{LoadError, MachineError};

/// Byte-addressable RAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ram {
    bytes: [u8; RAM_SIZE],
}

impl Ram {
    /// Creates a zeroed RAM.
    pub const fn new() -> Self {
        Self {
            bytes: [0; RAM_SIZE],
        }
    }

    /// Capacity in bytes.
    pub const fn len(&self) -> usize {
        RAM_SIZE
    }

    /// RAM is never empty; provided for API symmetry with `len`.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Reads the byte at `address`.
    ///
    /// # Errors
    ///
    /// [`MachineError::MemoryOutOfBounds`] if `address >= RAM_SIZE`.
    pub fn read(&self, address: usize) -> Result<u8, MachineError> {
        self.bytes
            .get(address)
            .copied()
            .ok_or(MachineError::MemoryOutOfBounds { address })
    }

    /// Writes `value` to `address`.
    ///
    /// # Errors
    ///
    /// [`MachineError::MemoryOutOfBounds`] if `address >= RAM_SIZE`.
    pub fn write(&mut self, address: usize, value: u8) -> Result<(), MachineError> {
        let cell = self
            .bytes
            .get_mut(address)
            .ok_or(MachineError::MemoryOutOfBounds { address })?;
        *cell = value;
        Ok(())
    }

    /// Reads a byte for diagnostics; addresses past the end read as zero.
    #[inline]
    pub fn peek(&self, address: usize) -> u8 {
        self.bytes.get(address).copied().unwrap_or(0)
    }

    /// Copies `image` into memory starting at [`PROGRAM_BASE`].
    ///
    /// Bytes past the end of the image are left untouched.
    ///
    /// # Errors
    ///
    /// [`LoadError::ProgramTooLarge`] if the image does not fit.
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        let end = PROGRAM_BASE + image.len();
        if end > RAM_SIZE {
            return Err(LoadError::ProgramTooLarge {
                len: image.len(),
                capacity: RAM_SIZE - PROGRAM_BASE,
            });
        }
        self.bytes[PROGRAM_BASE..end].copy_from_slice(image);
        Ok(())
    }

    /// The full backing store, for inspection.
    pub const fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}
