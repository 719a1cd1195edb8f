//! Error types for metawear-core.
//!
//! Every error is raised synchronously, before a frame is handed to a
//! [`CommandSink`](crate::CommandSink). A failed call never emits a partial
//! frame.
//!
//! # Error Classification
//!
//! | Error Type | Raised by | Retry? |
//! |------------|-----------|--------|
//! | [`Error::InvalidPreset`] | preset lookup | No, fix the identifier |
//! | [`Error::InvalidColor`] | pattern write with a raw color index | No |
//! | [`Error::EncodingOverflow`] | encoder with [`OverflowPolicy::Reject`](crate::OverflowPolicy::Reject) | No |
//! | [`Error::InvalidFrame`] | frame decoding | No |
//! | [`Error::Sink`] | the transport behind a sink | Transport's call |
//! | [`Error::InvalidConfig`] | [`Encoder::from_config_file`](crate::Encoder::from_config_file) | No, fix the file |
//!
//! This layer never retries. Retrying a failed send belongs to the
//! transport.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur when building, decoding or sending command frames.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Preset identifier is not a known preset.
    #[error("Invalid preset: {0}")]
    InvalidPreset(u8),

    /// Color index is not a known LED color.
    #[error("Invalid color: {0}")]
    InvalidColor(u8),

    /// A field value does not fit in its declared width.
    #[error("Encoding overflow: value {value:#x} does not fit in {width} byte(s)")]
    EncodingOverflow {
        /// The value that was being encoded.
        value: u32,
        /// The declared field width in bytes.
        width: usize,
    },

    /// Bytes could not be decoded as a command frame.
    #[error("Invalid frame: {0}")]
    InvalidFrame(String),

    /// The sink failed to deliver a frame.
    #[error("Sink error: {0}")]
    Sink(String),

    /// An encoder configuration file could not be used.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a sink error.
    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink(message.into())
    }

    /// Create an invalid frame error.
    pub fn invalid_frame(message: impl Into<String>) -> Self {
        Self::InvalidFrame(message.into())
    }

}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::InvalidConfig(err.to_string())
    }
}

impl From<metawear_types::ParseError> for Error {
    fn from(err: metawear_types::ParseError) -> Self {
        match err {
            metawear_types::ParseError::UnknownPreset(id) => Error::InvalidPreset(id),
            metawear_types::ParseError::UnknownColor(id) => Error::InvalidColor(id),
            metawear_types::ParseError::InsufficientBytes { expected, actual } => {
                Error::InvalidFrame(format!("expected {expected} bytes, got {actual}"))
            }
            metawear_types::ParseError::InvalidValue(msg) => Error::InvalidFrame(msg),
            // Handle future ParseError variants (non_exhaustive)
            _ => Error::InvalidFrame(format!("Parse error: {}", err)),
        }
    }
}

/// Result type alias using metawear-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
