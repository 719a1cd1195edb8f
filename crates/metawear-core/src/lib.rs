//! Command frame encoding for the MetaWear LED module.
//!
//! This crate turns LED operations into the byte-exact frames the board
//! firmware expects. Delivering those frames is left to a transport behind
//! the [`CommandSink`] (or [`AsyncCommandSink`]) trait.
//!
//! # Features
//!
//! - **Command encoder**: module id, register id and little-endian fields
//!   in, [`Frame`] out ([`encoder`])
//! - **LED operations**: play, autoplay, pause, stop and pattern writes
//!   ([`LedCommandBuilder`], [`Led`])
//! - **Preset patterns**: blink, solid and pulse templates
//! - **Frame decoding**: parse LED frames back into [`LedCommand`]s
//! - **Test sink**: [`RecordingSink`] captures frames with failure injection
//!
//! # Frames
//!
//! | Operation | Bytes |
//! |-----------|-------|
//! | play | `02 01 01` |
//! | autoplay | `02 01 02` |
//! | pause | `02 01 00` |
//! | stop (clear) | `02 02 01` |
//! | stop (keep) | `02 02 00` |
//! | blink, green, 10 repeats | `02 03 00 02 1f 00 00 00 32 00 00 00 f4 01 00 00 0a` |
//!
//! # Quick Start
//!
//! ```
//! use metawear_core::{Led, RecordingSink};
//! use metawear_types::{Color, Pattern, Preset};
//!
//! let led = Led::new(RecordingSink::new());
//!
//! let mut pattern = Pattern::with_repeat_count(10);
//! pattern.apply_preset(Preset::Blink);
//! led.write_pattern(&pattern, Color::Green)?;
//! led.play()?;
//!
//! assert_eq!(led.sink().frame_count(), 2);
//! # Ok::<(), metawear_core::Error>(())
//! ```
//!
//! # Concurrency
//!
//! Encoders and builders are `Copy` and hold no mutable state; the preset
//! table is static. Any ordering or exclusivity on the physical link is the
//! sink's responsibility.

pub mod config;
pub mod device;
pub mod encoder;
pub mod error;
pub mod frame;
pub mod led;
pub mod mock;
pub mod traits;
pub mod util;

// Re-export the types and module-id modules from metawear-types
pub use metawear_types::module;
pub use metawear_types::types;

// Core exports
pub use config::{ConfigError, EncoderConfig, OverflowPolicy};
pub use device::Led;
pub use encoder::{Encoder, Field, Width, encode};
pub use error::{Error, Result};
pub use frame::Frame;
pub use led::{LedCommand, LedCommandBuilder, PlayState, load_preset_pattern};
pub use mock::RecordingSink;
pub use traits::{AsyncCommandSink, CommandSink};

// Re-export from metawear-types
pub use metawear_types::{Color, Pattern, Preset};
