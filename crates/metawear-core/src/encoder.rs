//! Command encoder.
//!
//! Turns a module id, a register id and an ordered list of fixed-width
//! fields into a [`Frame`]:
//!
//! ```text
//! [module_id, register_id, LE(field_0), LE(field_1), ...]
//! ```
//!
//! There is no padding, length prefix or checksum. The frame length follows
//! from the register's fixed layout.
//!
//! # Example
//!
//! ```
//! use metawear_core::encoder::{Field, encode};
//!
//! let frame = encode(0x02, 0x01, &[Field::u8(0x01)]).unwrap();
//! assert_eq!(frame.as_bytes(), &[0x02, 0x01, 0x01]);
//!
//! let frame = encode(0x13, 0x03, &[Field::u16(0x01f4)]).unwrap();
//! assert_eq!(frame.as_bytes(), &[0x13, 0x03, 0xf4, 0x01]);
//! ```

use std::path::Path;

use bytes::{BufMut, BytesMut};
use tracing::{debug, warn};

use crate::config::{EncoderConfig, OverflowPolicy};
use crate::error::{Error, Result};
use crate::frame::{FRAME_HEADER_BYTES, Frame};

/// Width of a field on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// One byte.
    One,
    /// Two bytes, little-endian.
    Two,
    /// Four bytes, little-endian.
    Four,
}

impl Width {
    /// Number of bytes this width occupies.
    pub const fn bytes(self) -> usize {
        match self {
            Width::One => 1,
            Width::Two => 2,
            Width::Four => 4,
        }
    }

    /// Largest value that fits in this width.
    pub const fn max_value(self) -> u32 {
        match self {
            Width::One => u8::MAX as u32,
            Width::Two => u16::MAX as u32,
            Width::Four => u32::MAX,
        }
    }
}

/// One value in a frame payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    value: u32,
    width: Width,
}

impl Field {
    /// A value with an explicit width. It may not fit; the encoder decides
    /// what to do about that.
    pub const fn new(value: u32, width: Width) -> Self {
        Self { value, width }
    }

    /// A one-byte field.
    pub const fn u8(value: u8) -> Self {
        Self::new(value as u32, Width::One)
    }

    /// A two-byte little-endian field.
    pub const fn u16(value: u16) -> Self {
        Self::new(value as u32, Width::Two)
    }

    /// A four-byte little-endian field.
    pub const fn u32(value: u32) -> Self {
        Self::new(value, Width::Four)
    }

    /// A one-byte flag, `0x01` for `true`.
    pub const fn flag(value: bool) -> Self {
        Self::u8(value as u8)
    }

    /// The field's value.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The field's width.
    pub const fn width(&self) -> Width {
        self.width
    }

    /// Whether the value fits its width without losing bits.
    pub const fn fits(&self) -> bool {
        self.value <= self.width.max_value()
    }
}

/// Serializes fields into frames.
///
/// The encoder holds nothing but its overflow policy: identical inputs
/// always produce identical frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Encoder {
    overflow: OverflowPolicy,
}

impl Encoder {
    /// Create an encoder with the given overflow policy.
    pub const fn new(overflow: OverflowPolicy) -> Self {
        Self { overflow }
    }

    /// Create an encoder from configuration.
    pub fn from_config(config: &EncoderConfig) -> Self {
        Self::new(config.overflow)
    }

    /// Build an encoder from a TOML configuration file.
    ///
    /// Read and parse failures surface as [`Error::InvalidConfig`].
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = EncoderConfig::load(path)?;
        Ok(Self::from_config(&config))
    }

    /// The overflow policy in use.
    pub fn overflow_policy(&self) -> OverflowPolicy {
        self.overflow
    }

    /// Encode a frame.
    ///
    /// Every field is checked before any byte is written, so an overflow
    /// under [`OverflowPolicy::Reject`] never yields a partial frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EncodingOverflow`] if a field does not fit its width
    /// and the policy is [`OverflowPolicy::Reject`].
    pub fn encode(&self, module_id: u8, register_id: u8, fields: &[Field]) -> Result<Frame> {
        for field in fields.iter().filter(|f| !f.fits()) {
            match self.overflow {
                OverflowPolicy::Reject => {
                    return Err(Error::EncodingOverflow {
                        value: field.value,
                        width: field.width.bytes(),
                    });
                }
                OverflowPolicy::Truncate => {
                    warn!(
                        "Truncating value {:#x} to {} byte(s) in frame {:#04x}/{:#04x}",
                        field.value,
                        field.width.bytes(),
                        module_id,
                        register_id
                    );
                }
            }
        }

        let len = FRAME_HEADER_BYTES + fields.iter().map(|f| f.width.bytes()).sum::<usize>();
        let mut buf = BytesMut::with_capacity(len);
        buf.put_u8(module_id);
        buf.put_u8(register_id);
        for field in fields {
            match field.width {
                Width::One => buf.put_u8(field.value as u8),
                Width::Two => buf.put_u16_le(field.value as u16),
                Width::Four => buf.put_u32_le(field.value),
            }
        }

        let frame = Frame::from_encoded(buf.freeze());
        debug!(
            "Encoded frame {:#04x}/{:#04x}: {}",
            module_id, register_id, frame
        );
        Ok(frame)
    }
}

/// Encode a frame with the default encoder, which rejects overflowing fields.
///
/// # Errors
///
/// Returns [`Error::EncodingOverflow`] if a field does not fit its width.
pub fn encode(module_id: u8, register_id: u8, fields: &[Field]) -> Result<Frame> {
    Encoder::default().encode(module_id, register_id, fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only() {
        let frame = encode(0x02, 0x01, &[]).unwrap();
        assert_eq!(frame.as_bytes(), &[0x02, 0x01]);
    }

    #[test]
    fn test_fields_little_endian_in_order() {
        let frame = encode(
            0x02,
            0x03,
            &[Field::u8(0xaa), Field::u16(0x02d5), Field::u32(0x0102_0304)],
        )
        .unwrap();
        assert_eq!(
            frame.as_bytes(),
            &[0x02, 0x03, 0xaa, 0xd5, 0x02, 0x04, 0x03, 0x02, 0x01]
        );
    }

    #[test]
    fn test_flag_field() {
        let frame = encode(0x02, 0x02, &[Field::flag(true)]).unwrap();
        assert_eq!(frame.as_bytes(), &[0x02, 0x02, 0x01]);
        let frame = encode(0x02, 0x02, &[Field::flag(false)]).unwrap();
        assert_eq!(frame.as_bytes(), &[0x02, 0x02, 0x00]);
    }

    #[test]
    fn test_width_limits() {
        assert_eq!(Width::One.max_value(), 0xff);
        assert_eq!(Width::Two.max_value(), 0xffff);
        assert_eq!(Width::Four.max_value(), u32::MAX);
        assert!(Field::new(0xff, Width::One).fits());
        assert!(!Field::new(0x100, Width::One).fits());
        assert!(Field::new(u32::MAX, Width::Four).fits());
    }

    #[test]
    fn test_reject_overflow() {
        let err = encode(0x02, 0x03, &[Field::u8(1), Field::new(0x1_0000, Width::Two)])
            .unwrap_err();
        assert_eq!(
            err,
            Error::EncodingOverflow {
                value: 0x1_0000,
                width: 2
            }
        );
    }

    #[test]
    fn test_truncate_overflow_keeps_low_bytes() {
        let encoder = Encoder::new(OverflowPolicy::Truncate);
        let frame = encoder
            .encode(0x02, 0x03, &[Field::new(0x1_02d5, Width::Two), Field::new(0x120, Width::One)])
            .unwrap();
        assert_eq!(frame.as_bytes(), &[0x02, 0x03, 0xd5, 0x02, 0x20]);
    }

    #[test]
    fn test_from_config() {
        let config = EncoderConfig {
            overflow: OverflowPolicy::Truncate,
        };
        assert_eq!(
            Encoder::from_config(&config).overflow_policy(),
            OverflowPolicy::Truncate
        );
        assert_eq!(Encoder::default().overflow_policy(), OverflowPolicy::Reject);
    }

    #[test]
    fn test_from_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("encoder.toml");
        std::fs::write(&path, "overflow = \"truncate\"\n").unwrap();

        let encoder = Encoder::from_config_file(&path).unwrap();
        assert_eq!(encoder.overflow_policy(), OverflowPolicy::Truncate);
    }

    #[test]
    fn test_from_config_file_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let err = Encoder::from_config_file(&missing).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(ref msg) if msg.contains("missing.toml")));

        let bad = temp_dir.path().join("bad.toml");
        std::fs::write(&bad, "overflow = \"wrap\"").unwrap();
        assert!(matches!(
            Encoder::from_config_file(&bad),
            Err(Error::InvalidConfig(_))
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn encoding_is_deterministic(module in any::<u8>(), register in any::<u8>(), a in any::<u8>(), b in any::<u16>(), c in any::<u32>()) {
                let fields = [Field::u8(a), Field::u16(b), Field::u32(c)];
                let first = encode(module, register, &fields).unwrap();
                let second = encode(module, register, &fields).unwrap();
                prop_assert_eq!(first, second);
            }

            #[test]
            fn length_is_header_plus_widths(module in any::<u8>(), register in any::<u8>(), values in proptest::collection::vec(any::<u16>(), 0..16)) {
                let fields: Vec<Field> = values.iter().copied().map(Field::u16).collect();
                let frame = encode(module, register, &fields).unwrap();
                prop_assert_eq!(frame.len(), 2 + 2 * values.len());
                prop_assert_eq!(frame.module_id(), module);
                prop_assert_eq!(frame.register_id(), register);
            }
        }
    }
}
