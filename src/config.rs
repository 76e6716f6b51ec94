//! Configuration module for the arithmetic workbench.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file (`mathkit.toml`)
//! - Environment variable overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `MATHKIT_` and use double
//! underscores to separate nested levels:
//! - `MATHKIT_DISPLAY__COLOR=false` sets `display.color`
//! - `MATHKIT_MENU__PROMPT="pick: "` sets `menu.prompt`
//! - `MATHKIT_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory when no `--config` path is
/// given.
pub const CONFIG_FILE: &str = "mathkit.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Terminal output settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Interactive menu settings
    #[serde(default)]
    pub menu: MenuConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DisplayConfig {
    /// Colorize the menu and tables. Colors are also suppressed when
    /// `NO_COLOR` is set or stdout is not a terminal.
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MenuConfig {
    /// Prompt shown when asking for a menu selection
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Redraw the full menu before every selection
    #[serde(default = "default_true")]
    pub banner_every_round: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Default level filter: error, warn, info, debug, or trace
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-module overrides, e.g. `menu = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}
fn default_prompt() -> String {
    "Select an operation: ".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            display: DisplayConfig::default(),
            menu: MenuConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner_every_round: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from `mathkit.toml` in the current directory, layered
    /// over defaults and under environment overrides. A missing file is
    /// fine; defaults apply.
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load settings with an explicit configuration file path.
    pub fn load_from(path: &Path) -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("MATHKIT_").split("__"))
            .extract()
    }

    /// Write these settings as pretty TOML.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    /// Create `mathkit.toml` in the current directory with default
    /// settings. Refuses to overwrite an existing file unless `force`.
    pub fn init_config_file(force: bool) -> anyhow::Result<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE);
        if path.exists() && !force {
            anyhow::bail!(
                "configuration file already exists at: {} (use --force to overwrite)",
                path.display()
            );
        }
        Settings::default().save(&path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert_eq!(settings.version, 1);
        assert!(settings.display.color);
        assert!(settings.menu.banner_every_round);
        assert_eq!(settings.menu.prompt, "Select an operation: ");
        assert_eq!(settings.logging.default, "warn");
        assert!(settings.logging.modules.is_empty());
    }

    #[test]
    fn settings_survive_a_toml_round_trip() {
        let mut settings = Settings::default();
        settings.display.color = false;
        settings.menu.prompt = "op? ".to_string();
        settings
            .logging
            .modules
            .insert("menu".to_string(), "debug".to_string());

        let text = toml::to_string_pretty(&settings).unwrap();
        let reparsed: Settings = toml::from_str(&text).unwrap();
        assert!(!reparsed.display.color);
        assert_eq!(reparsed.menu.prompt, "op? ");
        assert_eq!(reparsed.logging.modules["menu"], "debug");
    }
}
