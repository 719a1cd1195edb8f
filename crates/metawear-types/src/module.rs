//! Module and register identifiers for the MetaWear command protocol.
//!
//! Every command frame starts with a module id followed by a register id
//! within that module.

// --- Module ids ---

/// Mechanical switch module.
pub const MODULE_SWITCH: u8 = 0x01;

/// LED module.
pub const MODULE_LED: u8 = 0x02;

/// Accelerometer module.
pub const MODULE_ACCELEROMETER: u8 = 0x03;

/// Settings (advertising and connection parameters) module.
pub const MODULE_SETTINGS: u8 = 0x11;

/// Gyroscope module.
pub const MODULE_GYRO: u8 = 0x13;

// --- LED registers ---

/// Play state register.
/// Format: `[MODULE_LED, LED_PLAY, state]`
/// state: 0x00 = pause, 0x01 = play, 0x02 = autoplay
pub const LED_PLAY: u8 = 0x01;

/// Stop register.
/// Format: `[MODULE_LED, LED_STOP, clear]`
/// clear: 0x00 = keep patterns, 0x01 = clear all patterns
pub const LED_STOP: u8 = 0x02;

/// Pattern configuration register.
/// Format: `[MODULE_LED, LED_CONFIG, color, type, pattern(13)]`
pub const LED_CONFIG: u8 = 0x03;

/// Pattern type byte written after the color. The firmware only
/// defines the pulse type.
pub const LED_PATTERN_TYPE_PULSE: u8 = 0x02;
