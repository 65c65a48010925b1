//! Mod settings model.
//!
//! [`ModConfig`] is the in-memory settings object the rest of the mod reads
//! and edits. Every field is a [`Setting`]: a current value paired with the
//! fixed default it starts from, plus optional inclusive bounds for ordered
//! types. The on-disk key names and layout live in the codec (`parser`
//! module), not here.

/// Default for [`ModConfig::enabled`].
pub const DEFAULT_ENABLED: bool = false;

/// Default for [`ModConfig::conversion_rate`].
pub const DEFAULT_CONVERSION_RATE: f64 = 0.5;

/// Inclusive range for [`ModConfig::conversion_rate`].
pub const CONVERSION_RATE_BOUNDS: (f64, f64) = (0.0, 1.0);

/// A single settable value with a fixed default and optional bounds.
///
/// `set` clamps to the bounds, so a bounded setting's current value is
/// always within `[minimum, maximum]`, no matter where the write came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting<T> {
    default: T,
    value: T,
    min: Option<T>,
    max: Option<T>,
}

impl<T: Copy + PartialOrd> Setting<T> {
    /// Creates an unbounded setting resting at its default.
    pub fn new(default: T) -> Self {
        Self {
            default,
            value: default,
            min: None,
            max: None,
        }
    }

    /// Creates a setting whose value is kept within `[min, max]` inclusive.
    pub fn bounded(default: T, min: T, max: T) -> Self {
        Self {
            default,
            value: default,
            min: Some(min),
            max: Some(max),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.value
    }

    /// Sets the current value, clamped to the bounds if there are any.
    pub fn set(&mut self, value: T) {
        self.value = self.clamped(value);
    }

    /// The fixed default. Never changes after construction.
    pub fn default_value(&self) -> T {
        self.default
    }

    /// Lower bound, if the setting is bounded.
    pub fn minimum(&self) -> Option<T> {
        self.min
    }

    /// Upper bound, if the setting is bounded.
    pub fn maximum(&self) -> Option<T> {
        self.max
    }

    fn clamped(&self, value: T) -> T {
        let value = match self.min {
            Some(min) if value < min => min,
            _ => value,
        };
        match self.max {
            Some(max) if value > max => max,
            _ => value,
        }
    }
}

/// Root settings for the mod.
///
/// The field set is fixed at compile time; a document on disk can change the
/// current values but never add or remove fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ModConfig {
    /// Master switch: whether the mod converts anything at all.
    pub enabled: Setting<bool>,
    /// Fraction of eligible items converted per pass, in `[0, 1]`.
    pub conversion_rate: Setting<f64>,
}

impl Default for ModConfig {
    fn default() -> Self {
        Self {
            enabled: Setting::new(DEFAULT_ENABLED),
            conversion_rate: Setting::bounded(
                DEFAULT_CONVERSION_RATE,
                CONVERSION_RATE_BOUNDS.0,
                CONVERSION_RATE_BOUNDS.1,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = ModConfig::default();

        assert!(!config.enabled.get());
        assert_eq!(config.enabled.default_value(), DEFAULT_ENABLED);
        assert_eq!(config.enabled.minimum(), None);
        assert_eq!(config.enabled.maximum(), None);

        assert_eq!(config.conversion_rate.get(), DEFAULT_CONVERSION_RATE);
        assert_eq!(config.conversion_rate.minimum(), Some(0.0));
        assert_eq!(config.conversion_rate.maximum(), Some(1.0));
    }

    #[test]
    fn set_within_bounds_is_exact() {
        let mut rate = Setting::bounded(0.5, 0.0, 1.0);
        rate.set(0.8);
        assert_eq!(rate.get(), 0.8);
    }

    #[test]
    fn set_clamps_above_maximum() {
        let mut rate = Setting::bounded(0.5, 0.0, 1.0);
        rate.set(1.5);
        assert_eq!(rate.get(), 1.0);
    }

    #[test]
    fn set_clamps_below_minimum() {
        let mut rate = Setting::bounded(0.5, 0.0, 1.0);
        rate.set(-0.25);
        assert_eq!(rate.get(), 0.0);
    }

    #[test]
    fn unbounded_setting_takes_any_value() {
        let mut enabled = Setting::new(false);
        enabled.set(true);
        assert!(enabled.get());
        enabled.set(false);
        assert!(!enabled.get());
    }

    #[test]
    fn default_survives_sets() {
        let mut rate = Setting::bounded(0.5, 0.0, 1.0);
        rate.set(0.9);
        assert_eq!(rate.default_value(), 0.5);
    }
}
