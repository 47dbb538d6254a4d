//! Serial number validation
//!
//! Scanned units carry a fixed-width 17-character serial number. Validation
//! is purely length-based: the scanner hardware guarantees the character
//! set, the backend enforces uniqueness. This is not a checksum.

use crate::error::{Error, Result};

/// Fixed width of a router serial number
pub const SERIAL_LEN: usize = 17;

/// Check whether a raw scan is a well-formed serial number.
///
/// Surrounding whitespace is trimmed before the length check; internal
/// characters (including whitespace) all count toward the length.
///
/// # Examples
/// ```
/// use stock_scan_common::serial::is_valid_serial;
///
/// assert!(is_valid_serial("AAAAAAAAAAAAAAAAA"));
/// assert!(is_valid_serial("  AAAAAAAAAAAAAAAAA\n"));
/// assert!(!is_valid_serial("TOOSHORT"));
/// assert!(!is_valid_serial(""));
/// ```
pub fn is_valid_serial(raw: &str) -> bool {
    raw.trim().len() == SERIAL_LEN
}

/// A validated serial number.
///
/// Construction through [`SerialNumber::parse`] is the only way to obtain
/// one, so every value in a [`crate::ScanBatch`] is already trimmed and
/// exactly [`SERIAL_LEN`] characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialNumber(String);

impl SerialNumber {
    /// Trim and validate a raw scan.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.len() == SERIAL_LEN {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(Error::Validation(format!(
                "serial number must be {} characters, got {} ({:?})",
                SERIAL_LEN,
                trimmed.len(),
                trimmed
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SerialNumber> for String {
    fn from(serial: SerialNumber) -> Self {
        serial.0
    }
}
