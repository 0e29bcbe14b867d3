//! Match configuration types.
//!
//! A `MatchConfig` is supplied once when the controller is created and
//! again consulted on reset. It covers the options surface: starting life,
//! whether the chess clock is enabled at boot, and the color theme handed
//! through to the presentation layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::player::DEFAULT_STARTING_LIFE;

/// Nominal cadence at which the external scheduler should call
/// `MatchController::tick`. The engine accepts any `Duration` per tick,
/// so a caller measuring true inter-tick wall time is equally valid.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Color theme handed through to the presentation layer.
///
/// The engine stores and reports the theme but attaches no behavior to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorTheme {
    /// Light backgrounds, dark text.
    #[default]
    Light,
    /// Dark backgrounds, light text.
    Dark,
}

/// Complete match configuration.
///
/// ## Defaults
///
/// - `starting_life`: 40
/// - `clock_enabled`: false (life-counter-only mode; the clock is opted
///   into via options)
/// - `color_theme`: Light
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Life total each seat starts with.
    pub starting_life: i64,

    /// Whether the turn/priority/timer subsystem is live at boot.
    pub clock_enabled: bool,

    /// Initial color theme.
    pub color_theme: ColorTheme,
}

impl MatchConfig {
    /// Create a configuration with the default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            starting_life: DEFAULT_STARTING_LIFE,
            clock_enabled: false,
            color_theme: ColorTheme::Light,
        }
    }

    /// Set the starting life total.
    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    /// Enable or disable the chess clock at boot.
    #[must_use]
    pub fn with_clock_enabled(mut self, enabled: bool) -> Self {
        self.clock_enabled = enabled;
        self
    }

    /// Set the initial color theme.
    #[must_use]
    pub fn with_color_theme(mut self, theme: ColorTheme) -> Self {
        self.color_theme = theme;
        self
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MatchConfig::new();

        assert_eq!(config.starting_life, 40);
        assert!(!config.clock_enabled);
        assert_eq!(config.color_theme, ColorTheme::Light);
    }

    #[test]
    fn test_config_builder() {
        let config = MatchConfig::new()
            .with_starting_life(30)
            .with_clock_enabled(true)
            .with_color_theme(ColorTheme::Dark);

        assert_eq!(config.starting_life, 30);
        assert!(config.clock_enabled);
        assert_eq!(config.color_theme, ColorTheme::Dark);
    }

    #[test]
    fn test_tick_interval() {
        assert_eq!(TICK_INTERVAL, Duration::from_millis(100));
    }

    #[test]
    fn test_config_serialization() {
        let config = MatchConfig::new().with_starting_life(25);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
