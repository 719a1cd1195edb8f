//! Error types for data parsing in metawear-types.

use thiserror::Error;

/// Errors that can occur when interpreting MetaWear protocol values.
///
/// This error type is platform-agnostic and does not include
/// encoding or transport errors (those belong in metawear-core).
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Not enough bytes to decode the value.
    #[error("Insufficient bytes: requires {expected} bytes, got {actual}")]
    InsufficientBytes {
        /// Number of bytes required.
        expected: usize,
        /// Number of bytes available.
        actual: usize,
    },

    /// Preset identifier is not one of the known presets.
    #[error("Unknown preset: {0}")]
    UnknownPreset(u8),

    /// Color index is not one of the known LED colors.
    #[error("Unknown color: {0}")]
    UnknownColor(u8),

    /// A value could not be interpreted.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Result type alias using metawear-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
