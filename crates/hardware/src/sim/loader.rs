//! Program Loader.
//!
//! This module turns `.ls8` listings into program images. It performs:
//! 1. **Parsing:** One byte per non-empty line, written as a base-2 literal.
//! 2. **Comment stripping:** Everything from `#` to the end of the line is ignored.
//! 3. **File loading:** Reads a listing from disk and parses it.
//!
//! A listing looks like:
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::Path;

use crate::common::error::LoadError;

/// Marker that starts a comment.
const COMMENT_MARKER: char = '#';

/// Parses a listing into a program image.
///
/// # Errors
///
/// [`LoadError::Parse`] for the first line whose token is not an 8-bit binary
/// literal. An optional `0b` prefix is accepted, as are single `_`
/// separators between digits or directly after the prefix.
///
/// # Examples
///
/// ```
/// use ls8_core::sim::loader::parse_program;
///
/// let image = parse_program("10000010 # LDI R0,8\n00000000\n00001000\n\n00000001\n").unwrap();
/// assert_eq!(image, vec![0b1000_0010, 0, 8, 1]);
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut image = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let code = raw
            .split_once(COMMENT_MARKER)
            .map_or(raw, |(code, _)| code)
            .trim();
        if code.is_empty() {
            continue;
        }
        let byte = parse_binary_byte(code).ok_or_else(|| LoadError::Parse {
            line: idx + 1,
            token: code.to_string(),
        })?;
        image.push(byte);
    }
    Ok(image)
}

/// Reads and parses a listing file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read, otherwise as
/// [`parse_program`].
pub fn load_program_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = parse_program(&source)?;
    tracing::debug!(path = %path.display(), bytes = image.len(), "parsed program listing");
    Ok(image)
}

/// Parses a base-2 literal. A single `_` may separate digits or follow the
/// `0b` prefix; empty digit groups are rejected.
fn parse_binary_byte(token: &str) -> Option<u8> {
    let digits = match token
        .strip_prefix("0b")
        .or_else(|| token.strip_prefix("0B"))
    {
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => token,
    };
    let well_formed = digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b == b'0' || b == b'1'));
    if !well_formed {
        return None;
    }
    let digits: String = digits.chars().filter(|&c| c != '_').collect();
    u8::from_str_radix(&digits, 2).ok()
}
