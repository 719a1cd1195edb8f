//! Command frames.
//!
//! A frame is the complete byte sequence for one command:
//! `[module_id, register_id, payload...]`. Frames are built fresh for each
//! call and are immutable afterwards.

use std::fmt;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::util::format_hex;

/// Number of header bytes (module id and register id) in every frame.
pub const FRAME_HEADER_BYTES: usize = 2;

/// An encoded command frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    bytes: Bytes,
}

impl Frame {
    /// Wrap already-encoded bytes. Callers guarantee the header is present.
    pub(crate) fn from_encoded(bytes: Bytes) -> Self {
        debug_assert!(bytes.len() >= FRAME_HEADER_BYTES);
        Self { bytes }
    }

    /// Parse raw bytes into a frame.
    ///
    /// Only the header is checked; the payload is not interpreted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFrame`] if `data` is shorter than the header.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < FRAME_HEADER_BYTES {
            return Err(Error::invalid_frame(format!(
                "expected at least {} bytes, got {}",
                FRAME_HEADER_BYTES,
                data.len()
            )));
        }
        Ok(Self {
            bytes: Bytes::copy_from_slice(data),
        })
    }

    /// The module this frame addresses.
    pub fn module_id(&self) -> u8 {
        self.bytes[0]
    }

    /// The register within the module.
    pub fn register_id(&self) -> u8 {
        self.bytes[1]
    }

    /// Everything after the header.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[FRAME_HEADER_BYTES..]
    }

    /// The full frame.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total length in bytes, header included.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; a frame carries at least its header.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copy the frame into a `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Consume the frame, returning the underlying buffer.
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for Frame {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self> {
        Self::parse(data)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hex(&self.bytes))
    }
}
