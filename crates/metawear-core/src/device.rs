//! LED handle bound to a sink.
//!
//! [`Led`] pairs a [`LedCommandBuilder`] with a sink. Each operation
//! encodes its frame first and hands it to the sink only if encoding
//! succeeded, so validation failures never reach the transport.

use tracing::{debug, info};

use metawear_types::{Color, Pattern, Preset};

use crate::error::Result;
use crate::frame::Frame;
use crate::led::{LedCommand, LedCommandBuilder};
use crate::traits::{AsyncCommandSink, CommandSink};

/// The LED module of one board.
///
/// # Example
///
/// ```
/// use metawear_core::{Led, RecordingSink};
/// use metawear_types::{Color, Preset};
///
/// let led = Led::new(RecordingSink::new());
/// led.write_preset(Preset::Solid, Color::Red, 20).unwrap();
/// led.play().unwrap();
///
/// assert_eq!(led.sink().frame_count(), 2);
/// ```
#[derive(Debug)]
pub struct Led<S> {
    sink: S,
    builder: LedCommandBuilder,
}

impl<S> Led<S> {
    /// Create a handle that sends through `sink` using the default encoder.
    pub fn new(sink: S) -> Self {
        Self::with_builder(sink, LedCommandBuilder::new())
    }

    /// Create a handle with a custom builder.
    pub fn with_builder(sink: S, builder: LedCommandBuilder) -> Self {
        Self { sink, builder }
    }

    /// The sink frames are sent through.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The builder used to encode frames.
    pub fn builder(&self) -> &LedCommandBuilder {
        &self.builder
    }

    /// Consume the handle, returning the sink.
    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Resolve a preset identifier. Nothing is sent.
    pub fn load_preset_pattern(&self, preset_id: u8, repeat_count: u8) -> Result<Pattern> {
        self.builder.load_preset_pattern(preset_id, repeat_count)
    }
}

impl<S: CommandSink> Led<S> {
    /// Encode and send any LED command.
    pub fn execute(&self, command: &LedCommand) -> Result<()> {
        let frame = self.builder.build(command)?;
        self.dispatch(command, &frame)
    }

    /// Start playing.
    pub fn play(&self) -> Result<()> {
        self.execute(&LedCommand::Play)
    }

    /// Play automatically once a pattern is written.
    pub fn autoplay(&self) -> Result<()> {
        self.execute(&LedCommand::Autoplay)
    }

    /// Pause playback.
    pub fn pause(&self) -> Result<()> {
        self.execute(&LedCommand::Pause)
    }

    /// Stop playback, clearing stored patterns if `clear` is set.
    pub fn stop(&self, clear: bool) -> Result<()> {
        self.execute(&LedCommand::Stop { clear })
    }

    /// Same as [`stop`](Self::stop).
    pub fn stop_and_clear(&self, clear: bool) -> Result<()> {
        self.stop(clear)
    }

    /// Write `pattern` into `color`'s slot.
    pub fn write_pattern(&self, pattern: &Pattern, color: Color) -> Result<()> {
        info!("Writing {} LED pattern", color);
        self.execute(&LedCommand::WritePattern {
            color,
            pattern: *pattern,
        })
    }

    /// Write `pattern` into the slot with index `color_id`.
    ///
    /// Nothing is sent if `color_id` is unknown.
    pub fn write_pattern_raw(&self, pattern: &Pattern, color_id: u8) -> Result<()> {
        let color = Color::try_from(color_id)?;
        self.write_pattern(pattern, color)
    }

    /// Write a preset with `repeat_count` into `color`'s slot.
    pub fn write_preset(&self, preset: Preset, color: Color, repeat_count: u8) -> Result<()> {
        info!("Writing {} preset to {} LED", preset, color);
        self.write_pattern(&preset.pattern(repeat_count), color)
    }

    fn dispatch(&self, command: &LedCommand, frame: &Frame) -> Result<()> {
        debug!("Sending LED command '{}': {}", command, frame);
        self.sink.send(frame)
    }
}

impl<S: AsyncCommandSink> Led<S> {
    /// Encode and send any LED command through an async sink.
    pub async fn execute_async(&self, command: &LedCommand) -> Result<()> {
        let frame = self.builder.build(command)?;
        debug!("Sending LED command '{}': {}", command, frame);
        self.sink.send_async(&frame).await
    }

    /// Async form of [`play`](Self::play).
    pub async fn play_async(&self) -> Result<()> {
        self.execute_async(&LedCommand::Play).await
    }

    /// Async form of [`autoplay`](Self::autoplay).
    pub async fn autoplay_async(&self) -> Result<()> {
        self.execute_async(&LedCommand::Autoplay).await
    }

    /// Async form of [`pause`](Self::pause).
    pub async fn pause_async(&self) -> Result<()> {
        self.execute_async(&LedCommand::Pause).await
    }

    /// Async form of [`stop`](Self::stop).
    pub async fn stop_async(&self, clear: bool) -> Result<()> {
        self.execute_async(&LedCommand::Stop { clear }).await
    }

    /// Async form of [`write_pattern`](Self::write_pattern).
    pub async fn write_pattern_async(&self, pattern: &Pattern, color: Color) -> Result<()> {
        info!("Writing {} LED pattern", color);
        self.execute_async(&LedCommand::WritePattern {
            color,
            pattern: *pattern,
        })
        .await
    }
}
