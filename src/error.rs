//! Hex parse errors.

use thiserror::Error;

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidLength(usize),

    #[error("hex color contains a non-hexadecimal digit")]
    InvalidDigit,
}
