//! Immutable runtime configuration.
//!
//! Values start from compiled-in defaults and may be overridden through
//! `MEMMATCH_*` environment variables, with `__` separating nested keys
//! (for example `MEMMATCH_TIMING__TICK_RATE_HZ=30`). The difficulty presets
//! are fixed and cannot be overridden.

use std::{path::PathBuf, time::Duration};

use config::{Config, Environment};
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    layout::{
        self, button_column_bottom, GAME_OVER_FIRST_BUTTON_ROW, HUD_ROWS, MENU_FIRST_BUTTON_ROW,
    },
    models::Difficulty,
};

/// Prefix of the environment variables read by [`AppConfig::load`].
pub const ENV_PREFIX: &str = "MEMMATCH";

/// Highest accepted tick rate.
pub const MAX_TICK_RATE_HZ: u32 = 1000;

/// Canvas and widget geometry, in terminal cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the virtual canvas the scene is laid out on.
    pub canvas_width: u16,
    /// Height of the virtual canvas.
    pub canvas_height: u16,
    /// Width of a single card.
    pub card_width: u16,
    /// Height of a single card.
    pub card_height: u16,
    /// Gap between neighbouring cards.
    pub card_margin: u16,
    /// Width of menu buttons.
    pub button_width: u16,
    /// Height of menu buttons.
    pub button_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 80,
            canvas_height: 24,
            card_width: 12,
            card_height: 4,
            card_margin: 1,
            button_width: 20,
            button_height: 3,
        }
    }
}

/// Loop pacing and gameplay delays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Ticks per second of the update/render loop.
    pub tick_rate_hz: u32,
    /// Flip animation progress added per tick (progress runs from 0 to 100).
    pub flip_step: u8,
    /// How long a revealed pair stays visible before it resolves.
    pub mismatch_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: 60,
            flip_step: 8,
            mismatch_delay_ms: 1000,
        }
    }
}

impl TimingConfig {
    /// Time between two ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }

    /// Delay before a revealed pair resolves.
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }
}

/// Log file location and verbosity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Directory holding `memmatch.log`, relative to the working directory unless absolute.
    pub directory: PathBuf,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            filter: "info".to_string(),
        }
    }
}

/// Top-level configuration handed to the game at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Geometry.
    pub layout: LayoutConfig,
    /// Pacing.
    pub timing: TimingConfig,
    /// Logging.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load defaults overlaid with `MEMMATCH_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_environment(Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(environment)
            .build()?;
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the game cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_TICK_RATE_HZ).contains(&self.timing.tick_rate_hz) {
            return Err(invalid(
                "timing.tick_rate_hz",
                format!("must be between 1 and {MAX_TICK_RATE_HZ}"),
            ));
        }
        if self.timing.flip_step == 0 {
            return Err(invalid("timing.flip_step", "must be at least 1"));
        }

        let layout = &self.layout;
        if layout.card_width == 0 || layout.card_height == 0 {
            return Err(invalid("layout.card_width", "cards need a non-zero size"));
        }
        if layout.button_width == 0 || layout.button_height == 0 {
            return Err(invalid("layout.button_width", "buttons need a non-zero size"));
        }
        if layout.button_width > layout.canvas_width {
            return Err(invalid(
                "layout.canvas_width",
                format!("buttons are {} columns wide", layout.button_width),
            ));
        }

        for difficulty in Difficulty::ALL {
            let (width, height) = layout::grid_size(difficulty.preset(), layout);
            if width > u32::from(layout.canvas_width) {
                return Err(invalid(
                    "layout.canvas_width",
                    format!("{difficulty} grid needs {width} columns"),
                ));
            }
            let needed = height.saturating_add(u32::from(HUD_ROWS) * 2);
            if needed > u32::from(layout.canvas_height) {
                return Err(invalid(
                    "layout.canvas_height",
                    format!("{difficulty} grid needs {needed} rows including the HUD"),
                ));
            }
        }

        let buttons_bottom = button_column_bottom(layout, MENU_FIRST_BUTTON_ROW, 3)
            .max(button_column_bottom(layout, GAME_OVER_FIRST_BUTTON_ROW, 2));
        if buttons_bottom > u32::from(layout.canvas_height) {
            return Err(invalid(
                "layout.canvas_height",
                format!("menu buttons need {buttons_bottom} rows"),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(pairs: &[(&str, &str)]) -> Environment {
        let mut map = config::Map::new();
        for (key, value) in pairs {
            map.insert(key.to_string(), value.to_string());
        }
        AppConfig::environment().source(Some(map))
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::from_environment(env_with(&[])).expect("defaults load");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.timing.mismatch_delay(), Duration::from_secs(1));
        assert_eq!(config.timing.tick_interval(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn environment_overrides_nested_keys() {
        let config = AppConfig::from_environment(env_with(&[
            ("MEMMATCH_TIMING__TICK_RATE_HZ", "30"),
            ("MEMMATCH_LOGGING__FILTER", "debug"),
        ]))
        .expect("overrides load");
        assert_eq!(config.timing.tick_rate_hz, 30);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.layout, LayoutConfig::default());
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let err = AppConfig::from_environment(env_with(&[("MEMMATCH_TIMING__TICK_RATE_HZ", "0")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "timing.tick_rate_hz",
                ..
            }
        ));
    }

    #[test]
    fn tick_rate_must_leave_a_nonzero_interval() {
        let mut config = AppConfig::default();
        config.timing.tick_rate_hz = u32::MAX;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "timing.tick_rate_hz",
                ..
            })
        ));

        config.timing.tick_rate_hz = MAX_TICK_RATE_HZ;
        assert!(config.validate().is_ok());
        assert!(!config.timing.tick_interval().is_zero());
    }

    #[test]
    fn huge_card_sizes_are_rejected_not_overflowed() {
        let err = AppConfig::from_environment(env_with(&[("MEMMATCH_LAYOUT__CARD_WIDTH", "65535")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "layout.canvas_width",
                ..
            }
        ));

        let mut config = AppConfig::default();
        config.layout.card_height = u16::MAX;
        config.layout.card_margin = u16::MAX;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { .. })
        ));

        let mut config = AppConfig::default();
        config.layout.button_height = u16::MAX;
        config.layout.canvas_height = u16::MAX;
        config.layout.canvas_width = u16::MAX;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "layout.canvas_height",
                ..
            })
        ));
    }

    #[test]
    fn undersized_canvas_is_rejected() {
        let mut config = AppConfig::default();
        config.layout.canvas_height = 12;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "layout.canvas_height",
                ..
            })
        ));

        let mut config = AppConfig::default();
        config.layout.card_width = 20;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "layout.canvas_width",
                ..
            })
        ));
    }
}
