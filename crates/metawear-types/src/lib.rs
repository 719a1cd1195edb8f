//! Platform-agnostic types for the MetaWear LED command protocol.
//!
//! This crate holds the values that flow into LED command frames and
//! has no encoding or transport logic of its own.
//!
//! # Features
//!
//! - LED [`Color`] channels and built-in [`Preset`] patterns
//! - The [`Pattern`] parameter set and its wire parsing
//! - The immutable preset table ([`preset`])
//! - Module and register identifiers ([`module`])
//!
//! # Example
//!
//! ```
//! use metawear_types::{Color, Pattern, Preset};
//!
//! let mut pattern = Pattern::with_repeat_count(10);
//! pattern.apply_preset(Preset::Blink);
//! assert_eq!(pattern.pulse_duration_ms, 500);
//! assert_eq!(Color::Green as u8, 0);
//! ```

pub mod error;
pub mod module;
pub mod preset;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use preset::load_preset_pattern;
pub use types::{Color, MAX_INTENSITY, PATTERN_BYTES, Pattern, Preset};
