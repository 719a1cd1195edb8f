//! Built-in pattern table.
//!
//! | Preset | High | Low | Rise | High time | Fall | Period |
//! |--------|------|-----|------|-----------|------|--------|
//! | Blink  | 31   | 0   | 0    | 50 ms     | 0    | 500 ms |
//! | Solid  | 31   | 31  | 0    | 500 ms    | 0    | 1000 ms |
//! | Pulse  | 31   | 0   | 725 ms | 500 ms  | 725 ms | 2000 ms |
//!
//! Repeat counts are never part of a preset; callers supply them.

use crate::error::ParseResult;
use crate::types::{Pattern, Preset};

const BLINK: Pattern = Pattern {
    high_intensity: 31,
    low_intensity: 0,
    rise_time_ms: 0,
    high_time_ms: 50,
    fall_time_ms: 0,
    pulse_duration_ms: 500,
    delay_time_ms: 0,
    repeat_count: 0,
};

const SOLID: Pattern = Pattern {
    high_intensity: 31,
    low_intensity: 31,
    rise_time_ms: 0,
    high_time_ms: 500,
    fall_time_ms: 0,
    pulse_duration_ms: 1000,
    delay_time_ms: 0,
    repeat_count: 0,
};

const PULSE: Pattern = Pattern {
    high_intensity: 31,
    low_intensity: 0,
    rise_time_ms: 725,
    high_time_ms: 500,
    fall_time_ms: 725,
    pulse_duration_ms: 2000,
    delay_time_ms: 0,
    repeat_count: 0,
};

/// Preset templates indexed by `Preset as usize`.
static PRESET_TABLE: [Pattern; 3] = [BLINK, SOLID, PULSE];

impl Preset {
    /// The preset's template, with a repeat count of 0.
    #[must_use]
    pub fn template(self) -> Pattern {
        PRESET_TABLE[self as usize]
    }

    /// The preset's template with `repeat_count` overlaid.
    ///
    /// # Examples
    ///
    /// ```
    /// use metawear_types::Preset;
    ///
    /// let pattern = Preset::Blink.pattern(10);
    /// assert_eq!(pattern.high_time_ms, 50);
    /// assert_eq!(pattern.repeat_count, 10);
    /// ```
    #[must_use]
    pub fn pattern(self, repeat_count: u8) -> Pattern {
        Pattern {
            repeat_count,
            ..self.template()
        }
    }
}

impl Pattern {
    /// Overwrite every field except `repeat_count` with the preset's values.
    pub fn apply_preset(&mut self, preset: Preset) {
        *self = preset.pattern(self.repeat_count);
    }
}

/// Resolve a raw preset identifier into a pattern.
///
/// `repeat_count` always replaces whatever the caller had before; the
/// returned pattern is built from scratch.
///
/// # Errors
///
/// Returns [`ParseError::UnknownPreset`](crate::ParseError::UnknownPreset)
/// if `preset_id` is not a known preset.
pub fn load_preset_pattern(preset_id: u8, repeat_count: u8) -> ParseResult<Pattern> {
    let preset = Preset::try_from(preset_id)?;
    Ok(preset.pattern(repeat_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn test_blink_values() {
        let p = Preset::Blink.template();
        assert_eq!(p.high_intensity, 0x1f);
        assert_eq!(p.low_intensity, 0);
        assert_eq!(p.rise_time_ms, 0);
        assert_eq!(p.high_time_ms, 0x32);
        assert_eq!(p.fall_time_ms, 0);
        assert_eq!(p.pulse_duration_ms, 0x1f4);
    }

    #[test]
    fn test_solid_values() {
        let p = Preset::Solid.template();
        assert_eq!(p.high_intensity, 31);
        assert_eq!(p.low_intensity, 31);
        assert_eq!(p.rise_time_ms, 0);
        assert_eq!(p.high_time_ms, 0x1f4);
        assert_eq!(p.fall_time_ms, 0);
        assert_eq!(p.pulse_duration_ms, 0x3e8);
    }

    #[test]
    fn test_pulse_values() {
        let p = Preset::Pulse.template();
        assert_eq!(p.high_intensity, 31);
        assert_eq!(p.low_intensity, 0);
        assert_eq!(p.rise_time_ms, 0x2d5);
        assert_eq!(p.high_time_ms, 0x1f4);
        assert_eq!(p.fall_time_ms, 0x2d5);
        assert_eq!(p.pulse_duration_ms, 0x7d0);
    }

    #[test]
    fn test_templates_have_no_repeat_or_delay() {
        for preset in Preset::ALL {
            let p = preset.template();
            assert_eq!(p.repeat_count, 0, "{preset}");
            assert_eq!(p.delay_time_ms, 0, "{preset}");
        }
    }

    #[test]
    fn test_load_preset_pattern_sets_repeat_count() {
        let p = load_preset_pattern(Preset::Pulse as u8, 40).unwrap();
        assert_eq!(p.repeat_count, 40);
        assert_eq!(p.rise_time_ms, 725);
    }

    #[test]
    fn test_load_preset_pattern_unknown_id() {
        assert_eq!(
            load_preset_pattern(3, 1),
            Err(ParseError::UnknownPreset(3))
        );
        assert_eq!(
            load_preset_pattern(0xff, 1),
            Err(ParseError::UnknownPreset(0xff))
        );
    }

    #[test]
    fn test_apply_preset_keeps_repeat_count() {
        let mut p = Pattern::with_repeat_count(20);
        p.high_time_ms = 1234;
        p.delay_time_ms = 99;

        p.apply_preset(Preset::Solid);

        assert_eq!(p.repeat_count, 20);
        assert_eq!(p.high_time_ms, 500);
        assert_eq!(p.delay_time_ms, 0);
    }

    #[test]
    fn test_apply_preset_twice_replaces_previous_preset() {
        let mut p = Pattern::with_repeat_count(5);
        p.apply_preset(Preset::Pulse);
        p.apply_preset(Preset::Blink);
        assert_eq!(p, Preset::Blink.pattern(5));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn fixed_fields_independent_of_repeat_count(id in 0u8..3, a in any::<u8>(), b in any::<u8>()) {
                let pa = load_preset_pattern(id, a).unwrap();
                let pb = load_preset_pattern(id, b).unwrap();
                prop_assert_eq!(Pattern { repeat_count: 0, ..pa }, Pattern { repeat_count: 0, ..pb });
            }

            #[test]
            fn unknown_ids_rejected(id in 3u8..=255, repeat in any::<u8>()) {
                prop_assert_eq!(load_preset_pattern(id, repeat), Err(ParseError::UnknownPreset(id)));
            }
        }
    }
}
