//! Core types for MetaWear LED patterns.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Highest intensity the LED driver distinguishes.
///
/// Larger values are not rejected here; they are written to the wire as-is.
pub const MAX_INTENSITY: u8 = 31;

/// Number of bytes a [`Pattern`] occupies on the wire.
pub const PATTERN_BYTES: usize = 13;

/// LED color channel.
///
/// Each color has its own pattern slot on the device, so the color
/// doubles as the slot index in a pattern write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Color {
    /// Green channel.
    Green = 0,
    /// Red channel.
    Red = 1,
    /// Blue channel.
    Blue = 2,
}

impl Color {
    /// All colors, in wire order.
    pub const ALL: [Color; 3] = [Color::Green, Color::Red, Color::Blue];
}

impl TryFrom<u8> for Color {
    type Error = ParseError;

    /// Convert a slot index to a `Color`.
    ///
    /// # Examples
    ///
    /// ```
    /// use metawear_types::Color;
    ///
    /// assert_eq!(Color::try_from(0), Ok(Color::Green));
    /// assert_eq!(Color::try_from(2), Ok(Color::Blue));
    /// assert!(Color::try_from(3).is_err());
    /// ```
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Color::Green),
            1 => Ok(Color::Red),
            2 => Ok(Color::Blue),
            _ => Err(ParseError::UnknownColor(value)),
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "green" => Ok(Color::Green),
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            _ => Err(ParseError::InvalidValue(format!("unknown color '{s}'"))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Green => write!(f, "green"),
            Color::Red => write!(f, "red"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

/// Built-in pattern templates.
///
/// See [`crate::preset`] for the values each preset expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Preset {
    /// Short flash, then off for the rest of the period.
    Blink = 0,
    /// Constant full brightness.
    Solid = 1,
    /// Slow ramp up and down.
    Pulse = 2,
}

impl Preset {
    /// All presets, in identifier order.
    pub const ALL: [Preset; 3] = [Preset::Blink, Preset::Solid, Preset::Pulse];
}

impl TryFrom<u8> for Preset {
    type Error = ParseError;

    /// Convert a preset identifier to a `Preset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use metawear_types::Preset;
    ///
    /// assert_eq!(Preset::try_from(1), Ok(Preset::Solid));
    /// assert!(Preset::try_from(7).is_err());
    /// ```
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Preset::Blink),
            1 => Ok(Preset::Solid),
            2 => Ok(Preset::Pulse),
            _ => Err(ParseError::UnknownPreset(value)),
        }
    }
}

impl FromStr for Preset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blink" => Ok(Preset::Blink),
            "solid" => Ok(Preset::Solid),
            "pulse" => Ok(Preset::Pulse),
            _ => Err(ParseError::InvalidValue(format!("unknown preset '{s}'"))),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Blink => write!(f, "blink"),
            Preset::Solid => write!(f, "solid"),
            Preset::Pulse => write!(f, "pulse"),
        }
    }
}

/// One LED light sequence.
///
/// A period starts with a ramp from `low_intensity` to `high_intensity`
/// over `rise_time_ms`, holds for `high_time_ms`, ramps back down over
/// `fall_time_ms` and stays low until `pulse_duration_ms` has elapsed.
///
/// No field is range-checked. Whether `pulse_duration_ms` covers the
/// rise, high and fall phases is left to the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Pattern {
    /// Brightness ceiling during the high phase (0-31).
    pub high_intensity: u8,
    /// Brightness floor outside the high phase (0-31).
    pub low_intensity: u8,
    /// Ramp-up time in milliseconds.
    pub rise_time_ms: u16,
    /// Time spent at `high_intensity` in milliseconds.
    pub high_time_ms: u16,
    /// Ramp-down time in milliseconds.
    pub fall_time_ms: u16,
    /// Length of one full period in milliseconds.
    pub pulse_duration_ms: u16,
    /// Delay before the first period starts, in milliseconds.
    pub delay_time_ms: u16,
    /// Number of periods to play; 0 repeats forever.
    pub repeat_count: u8,
}

impl Pattern {
    /// Create an empty pattern with only the repeat count set.
    ///
    /// Typically followed by [`Pattern::apply_preset`].
    #[must_use]
    pub fn with_repeat_count(repeat_count: u8) -> Self {
        Self {
            repeat_count,
            ..Self::default()
        }
    }

    /// Parse a `Pattern` from its wire representation.
    ///
    /// The byte format is:
    /// - byte 0: high intensity (u8)
    /// - byte 1: low intensity (u8)
    /// - bytes 2-3: rise time (u16 LE)
    /// - bytes 4-5: high time (u16 LE)
    /// - bytes 6-7: fall time (u16 LE)
    /// - bytes 8-9: pulse duration (u16 LE)
    /// - bytes 10-11: delay time (u16 LE)
    /// - byte 12: repeat count (u8)
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InsufficientBytes`] if `data` contains fewer than
    /// [`PATTERN_BYTES`] (13) bytes.
    #[must_use = "parsing returns a Result that should be handled"]
    pub fn from_bytes(data: &[u8]) -> Result<Self, ParseError> {
        use bytes::Buf;

        if data.len() < PATTERN_BYTES {
            return Err(ParseError::InsufficientBytes {
                expected: PATTERN_BYTES,
                actual: data.len(),
            });
        }

        let mut buf = data;
        Ok(Pattern {
            high_intensity: buf.get_u8(),
            low_intensity: buf.get_u8(),
            rise_time_ms: buf.get_u16_le(),
            high_time_ms: buf.get_u16_le(),
            fall_time_ms: buf.get_u16_le(),
            pulse_duration_ms: buf.get_u16_le(),
            delay_time_ms: buf.get_u16_le(),
            repeat_count: buf.get_u8(),
        })
    }

    /// Returns `true` if both intensities are within [`MAX_INTENSITY`].
    #[must_use]
    pub fn intensities_in_range(&self) -> bool {
        self.high_intensity <= MAX_INTENSITY && self.low_intensity <= MAX_INTENSITY
    }
}
