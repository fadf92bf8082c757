//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CALC_ERROR_CLEAR_MS=2000                                           │
//! │     CALC_ORIENTATION=landscape                                         │
//! │     CALC_SHOW_HISTORY=true                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $CALC_CONFIG, or                                                   │
//! │     ~/.config/calc/calc.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.calc.calc/calc.toml (macOS)      │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! error_clear_ms = 1500
//! display_width = 24
//! orientation = "portrait"
//! show_history = false
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

use calc_core::{AccumulatorConfig, ValidationError, MAX_ERROR_CLEAR_MS};
use directories::ProjectDirs;

use super::panel::{Orientation, Panel};
use crate::error::ConfigResult;

/// Narrowest display the terminal renderer accepts.
pub const MIN_DISPLAY_WIDTH: usize = 8;

/// Widest display the terminal renderer accepts.
pub const MAX_DISPLAY_WIDTH: usize = 120;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigState {
    /// Milliseconds an error stays on screen before the automatic clear.
    pub error_clear_ms: u64,

    /// Inner width of the display box, in characters.
    pub display_width: usize,

    /// Keypad layout at startup.
    pub orientation: Orientation,

    /// Whether the history panel starts open.
    pub show_history: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Error clear: 1.5 s
    /// - Display width: 24
    /// - Portrait, history hidden
    fn default() -> Self {
        ConfigState {
            error_clear_ms: 1500,
            display_width: 24,
            orientation: Orientation::Portrait,
            show_history: false,
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$CALC_CONFIG`, or the platform path)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os("CALC_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Applies `CALC_*` overrides read through `lookup`.
    ///
    /// ## Environment Variables
    /// - `CALC_ERROR_CLEAR_MS`: error clear delay in milliseconds
    /// - `CALC_DISPLAY_WIDTH`: display width in characters
    /// - `CALC_ORIENTATION`: `portrait` or `landscape`
    /// - `CALC_SHOW_HISTORY`: `true` or `false`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ms) = lookup("CALC_ERROR_CLEAR_MS") {
            self.error_clear_ms = parse_field("CALC_ERROR_CLEAR_MS", &ms)?;
        }

        if let Some(width) = lookup("CALC_DISPLAY_WIDTH") {
            self.display_width = parse_field("CALC_DISPLAY_WIDTH", &width)?;
        }

        if let Some(orientation) = lookup("CALC_ORIENTATION") {
            self.orientation = orientation.parse()?;
        }

        if let Some(show) = lookup("CALC_SHOW_HISTORY") {
            self.show_history = parse_field("CALC_SHOW_HISTORY", &show)?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.error_clear_ms > MAX_ERROR_CLEAR_MS {
            return Err(ValidationError::OutOfRange {
                field: "error_clear_ms".to_string(),
                min: 0,
                max: MAX_ERROR_CLEAR_MS,
            });
        }

        if !(MIN_DISPLAY_WIDTH..=MAX_DISPLAY_WIDTH).contains(&self.display_width) {
            return Err(ValidationError::OutOfRange {
                field: "display_width".to_string(),
                min: MIN_DISPLAY_WIDTH as u64,
                max: MAX_DISPLAY_WIDTH as u64,
            });
        }

        Ok(())
    }

    /// Returns the platform config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "calc", "calc").map(|dirs| dirs.config_dir().join("calc.toml"))
    }

    /// Settings handed to the calculator core.
    pub fn accumulator_config(&self) -> AccumulatorConfig {
        AccumulatorConfig {
            error_clear_delay: Duration::from_millis(self.error_clear_ms),
        }
    }

    /// Panel toggles at startup.
    pub fn initial_panel(&self) -> Panel {
        Panel {
            history_visible: self.show_history,
            orientation: self.orientation,
        }
    }
}

fn parse_field<T>(field: &str, value: &str) -> Result<T, ValidationError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ConfigState::default();
        config.validate().unwrap();
        assert_eq!(
            config.accumulator_config().error_clear_delay,
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ConfigState::default();
        config
            .apply_overrides(lookup(&[
                ("CALC_ERROR_CLEAR_MS", "250"),
                ("CALC_ORIENTATION", "landscape"),
                ("CALC_SHOW_HISTORY", "true"),
            ]))
            .unwrap();

        assert_eq!(config.error_clear_ms, 250);
        assert_eq!(config.display_width, 24);
        assert_eq!(
            config.initial_panel(),
            Panel {
                history_visible: true,
                orientation: Orientation::Landscape
            }
        );
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let mut config = ConfigState::default();
        let err = config
            .apply_overrides(lookup(&[("CALC_ERROR_CLEAR_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn test_validation_bounds() {
        let config = ConfigState {
            error_clear_ms: MAX_ERROR_CLEAR_MS + 1,
            ..ConfigState::default()
        };
        assert!(config.validate().is_err());

        let config = ConfigState {
            display_width: 4,
            ..ConfigState::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file_fills_missing_fields() {
        let path = std::env::temp_dir().join(format!("calc-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "error_clear_ms = 500\norientation = \"landscape\"\n").unwrap();

        let mut config: ConfigState =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        config.apply_overrides(|_| None).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.error_clear_ms, 500);
        assert_eq!(config.orientation, Orientation::Landscape);
        assert_eq!(config.display_width, 24);
        assert!(!config.show_history);
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = std::env::temp_dir().join(format!("calc-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "display_width = \"wide\"\n").unwrap();

        let result = ConfigState::load(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(crate::error::ConfigError::Parse(_))));
    }
}
