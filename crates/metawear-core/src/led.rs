//! LED command builder.
//!
//! Maps LED operations onto frames for module `0x02`:
//!
//! | Operation | Frame |
//! |-----------|-------|
//! | play | `02 01 01` |
//! | autoplay | `02 01 02` |
//! | pause | `02 01 00` |
//! | stop | `02 02 <clear>` |
//! | write pattern | `02 03 <color> 02 <pattern(13)>` |
//!
//! The pattern bytes are high and low intensity (one byte each), then rise,
//! high, fall, pulse duration and delay times (two bytes LE each), then the
//! repeat count.

use core::fmt;

use metawear_types::module::{
    LED_CONFIG, LED_PATTERN_TYPE_PULSE, LED_PLAY, LED_STOP, MODULE_LED,
};
use metawear_types::{Color, PATTERN_BYTES, ParseError, Pattern};

use crate::encoder::{Encoder, Field};
use crate::error::{Error, Result};
use crate::frame::{FRAME_HEADER_BYTES, Frame};

/// Length of a play, pause, autoplay or stop frame.
pub const STATE_FRAME_BYTES: usize = FRAME_HEADER_BYTES + 1;

/// Length of a pattern write frame.
pub const PATTERN_FRAME_BYTES: usize = FRAME_HEADER_BYTES + 2 + PATTERN_BYTES;

/// Value written to the play register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PlayState {
    /// Pause playback, keeping the current position.
    Pause = 0x00,
    /// Start playing the stored patterns.
    Play = 0x01,
    /// Play as soon as a pattern is written.
    Autoplay = 0x02,
}

impl TryFrom<u8> for PlayState {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0x00 => Ok(PlayState::Pause),
            0x01 => Ok(PlayState::Play),
            0x02 => Ok(PlayState::Autoplay),
            _ => Err(Error::invalid_frame(format!("unknown play state {value:#04x}"))),
        }
    }
}

/// An LED operation as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LedCommand {
    /// Start playing.
    Play,
    /// Play automatically once a pattern is written.
    Autoplay,
    /// Pause playback.
    Pause,
    /// Stop playback, optionally clearing every stored pattern.
    Stop {
        /// Clear stored patterns.
        clear: bool,
    },
    /// Store a pattern in a color's slot.
    WritePattern {
        /// Target slot.
        color: Color,
        /// Pattern to store.
        pattern: Pattern,
    },
}

impl LedCommand {
    /// Encode the command.
    pub fn encode(&self, encoder: &Encoder) -> Result<Frame> {
        match self {
            LedCommand::Play => play_state(encoder, PlayState::Play),
            LedCommand::Autoplay => play_state(encoder, PlayState::Autoplay),
            LedCommand::Pause => play_state(encoder, PlayState::Pause),
            LedCommand::Stop { clear } => {
                encoder.encode(MODULE_LED, LED_STOP, &[Field::flag(*clear)])
            }
            LedCommand::WritePattern { color, pattern } => {
                encoder.encode(MODULE_LED, LED_CONFIG, &pattern_fields(*color, pattern))
            }
        }
    }

    /// Decode an LED frame.
    ///
    /// Frames must have exactly the length their register defines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for an unknown color slot and
    /// [`Error::InvalidFrame`] for anything else that is not a well-formed
    /// LED frame.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < STATE_FRAME_BYTES {
            return Err(ParseError::InsufficientBytes {
                expected: STATE_FRAME_BYTES,
                actual: data.len(),
            }
            .into());
        }
        if data[0] != MODULE_LED {
            return Err(Error::invalid_frame(format!(
                "module {:#04x} is not the LED module",
                data[0]
            )));
        }

        let expected = match data[1] {
            LED_PLAY | LED_STOP => STATE_FRAME_BYTES,
            LED_CONFIG => PATTERN_FRAME_BYTES,
            register => {
                return Err(Error::invalid_frame(format!(
                    "unknown LED register {register:#04x}"
                )));
            }
        };
        if data.len() != expected {
            return Err(Error::invalid_frame(format!(
                "register {:#04x} expects {} bytes, got {}",
                data[1],
                expected,
                data.len()
            )));
        }

        match data[1] {
            LED_PLAY => Ok(match PlayState::try_from(data[2])? {
                PlayState::Pause => LedCommand::Pause,
                PlayState::Play => LedCommand::Play,
                PlayState::Autoplay => LedCommand::Autoplay,
            }),
            LED_STOP => match data[2] {
                0x00 => Ok(LedCommand::Stop { clear: false }),
                0x01 => Ok(LedCommand::Stop { clear: true }),
                flag => Err(Error::invalid_frame(format!("invalid clear flag {flag:#04x}"))),
            },
            _ => {
                let color = Color::try_from(data[2])?;
                if data[3] != LED_PATTERN_TYPE_PULSE {
                    return Err(Error::invalid_frame(format!(
                        "unknown pattern type {:#04x}",
                        data[3]
                    )));
                }
                let pattern = Pattern::from_bytes(&data[4..])?;
                Ok(LedCommand::WritePattern { color, pattern })
            }
        }
    }
}

impl fmt::Display for LedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedCommand::Play => write!(f, "play"),
            LedCommand::Autoplay => write!(f, "autoplay"),
            LedCommand::Pause => write!(f, "pause"),
            LedCommand::Stop { clear: true } => write!(f, "stop and clear"),
            LedCommand::Stop { clear: false } => write!(f, "stop"),
            LedCommand::WritePattern { color, pattern } => write!(
                f,
                "write {} pattern ({} ms period, repeat {})",
                color, pattern.pulse_duration_ms, pattern.repeat_count
            ),
        }
    }
}

fn play_state(encoder: &Encoder, state: PlayState) -> Result<Frame> {
    encoder.encode(MODULE_LED, LED_PLAY, &[Field::u8(state as u8)])
}

fn pattern_fields(color: Color, pattern: &Pattern) -> [Field; 10] {
    [
        Field::u8(color as u8),
        Field::u8(LED_PATTERN_TYPE_PULSE),
        Field::u8(pattern.high_intensity),
        Field::u8(pattern.low_intensity),
        Field::u16(pattern.rise_time_ms),
        Field::u16(pattern.high_time_ms),
        Field::u16(pattern.fall_time_ms),
        Field::u16(pattern.pulse_duration_ms),
        Field::u16(pattern.delay_time_ms),
        Field::u8(pattern.repeat_count),
    ]
}

/// Resolve a raw preset identifier into a pattern with `repeat_count` set.
///
/// # Errors
///
/// Returns [`Error::InvalidPreset`] if `preset_id` is not a known preset.
pub fn load_preset_pattern(preset_id: u8, repeat_count: u8) -> Result<Pattern> {
    Ok(metawear_types::load_preset_pattern(preset_id, repeat_count)?)
}

/// Builds LED frames.
///
/// Holds only an [`Encoder`], so it is `Copy` and can be shared freely.
///
/// # Example
///
/// ```
/// use metawear_core::LedCommandBuilder;
/// use metawear_types::{Color, Preset};
///
/// let builder = LedCommandBuilder::new();
/// assert_eq!(builder.play().unwrap().as_bytes(), &[0x02, 0x01, 0x01]);
///
/// let pattern = Preset::Blink.pattern(10);
/// let frame = builder.write_pattern(&pattern, Color::Green).unwrap();
/// assert_eq!(frame.len(), 17);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LedCommandBuilder {
    encoder: Encoder,
}

impl LedCommandBuilder {
    /// Create a builder with the default encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder that encodes with `encoder`.
    pub fn with_encoder(encoder: Encoder) -> Self {
        Self { encoder }
    }

    /// The encoder in use.
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// Encode any LED command.
    pub fn build(&self, command: &LedCommand) -> Result<Frame> {
        command.encode(&self.encoder)
    }

    /// `02 01 01`
    pub fn play(&self) -> Result<Frame> {
        self.build(&LedCommand::Play)
    }

    /// `02 01 02`
    pub fn autoplay(&self) -> Result<Frame> {
        self.build(&LedCommand::Autoplay)
    }

    /// `02 01 00`
    pub fn pause(&self) -> Result<Frame> {
        self.build(&LedCommand::Pause)
    }

    /// `02 02 <clear>`
    pub fn stop(&self, clear: bool) -> Result<Frame> {
        self.build(&LedCommand::Stop { clear })
    }

    /// Same frame as [`stop`](Self::stop); kept under the name the board
    /// API uses.
    pub fn stop_and_clear(&self, clear: bool) -> Result<Frame> {
        self.stop(clear)
    }

    /// Write `pattern` into `color`'s slot.
    pub fn write_pattern(&self, pattern: &Pattern, color: Color) -> Result<Frame> {
        self.build(&LedCommand::WritePattern {
            color,
            pattern: *pattern,
        })
    }

    /// Write `pattern` into the slot with index `color_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if `color_id` is not a known color.
    pub fn write_pattern_raw(&self, pattern: &Pattern, color_id: u8) -> Result<Frame> {
        let color = Color::try_from(color_id)?;
        self.write_pattern(pattern, color)
    }

    /// Resolve a preset. No frame is produced.
    pub fn load_preset_pattern(&self, preset_id: u8, repeat_count: u8) -> Result<Pattern> {
        load_preset_pattern(preset_id, repeat_count)
    }
}
