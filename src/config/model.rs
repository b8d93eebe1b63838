//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::calc::ops::AngleUnit;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Keypad layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcMode {
    #[default]
    Basic,
    Scientific,
}

impl CalcMode {
    pub fn toggled(self) -> Self {
        match self {
            CalcMode::Basic => CalcMode::Scientific,
            CalcMode::Scientific => CalcMode::Basic,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CalcMode::Basic => "basic",
            CalcMode::Scientific => "scientific",
        }
    }
}

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Amber,
}

impl ThemeKind {
    pub fn next(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Amber,
            ThemeKind::Amber => ThemeKind::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
            ThemeKind::Amber => "amber",
        }
    }
}

/// UI appearance and startup settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeKind,
    #[serde(default)]
    pub start_mode: CalcMode,
    #[serde(default = "default_true")]
    pub show_history: bool,
    #[serde(default)]
    pub angle_unit: AngleUnit,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default(),
            start_mode: CalcMode::default(),
            show_history: true,
            angle_unit: AngleUnit::default(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs always
/// go to a file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path; `~` is expanded. Defaults to the platform data dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_timestamp_format() -> String {
    "%H:%M:%S".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.ui.show_history);
        assert_eq!(config.ui.timestamp_format, "%H:%M:%S");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_document() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "amber"
            start_mode = "scientific"
            angle_unit = "degrees"

            [logging]
            enabled = true
            file = "/tmp/crabcalc.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.theme, ThemeKind::Amber);
        assert_eq!(config.ui.start_mode, CalcMode::Scientific);
        assert_eq!(config.ui.angle_unit, AngleUnit::Degrees);
        assert!(config.ui.show_history);
        assert!(config.logging.enabled);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/crabcalc.log")));
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[ui]\ntheme = \"neon\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = AppConfig::default();
        config.ui.theme = ThemeKind::Light;
        config.ui.show_history = false;
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_cycles() {
        assert_eq!(ThemeKind::Amber.next(), ThemeKind::Dark);
        assert_eq!(CalcMode::Basic.toggled(), CalcMode::Scientific);
    }
}
