//! Persisted user preferences.
//!
//! Only two things survive a restart: the interface language and the display
//! mode. Everything else (onboarding progress, screen, drafts) is session
//! state and intentionally resets.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use flows::i18n::Language;

/// Visual density of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Full feature surface, regular text sizes.
    Standard,
    /// Larger text, fewer widgets per screen.
    Simplified,
}

impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::Standard
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub display_mode: DisplayMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            display_mode: DisplayMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from disk, creating the default file if absent.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            log::info!("📁 Loading config from: {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            log::info!(
                "✅ Config loaded: language={}, mode={:?}",
                config.language.code(),
                config.display_mode
            );
            Ok(config)
        } else {
            log::info!("📝 Creating default config");
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;
        log::info!("💾 Config saved to: {}", config_path.display());
        Ok(())
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        let mut path = Self::data_dir()?;
        path.push("config.toml");
        Ok(path)
    }

    fn data_dir() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        let mut path = home;
        path.push(".glassbank");
        Ok(path)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Home directory not found")]
    NoHomeDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.display_mode, DisplayMode::Standard);
    }

    #[test]
    fn test_serialization_round_trip() {
        let config = Config {
            language: Language::Pl,
            display_mode: DisplayMode::Simplified,
        };
        let toml = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&toml).unwrap();
        assert_eq!(deserialized.language, Language::Pl);
        assert_eq!(deserialized.display_mode, DisplayMode::Simplified);
    }

    #[test]
    fn test_language_codes_in_toml() {
        let config = Config {
            language: Language::Zh,
            ..Config::default()
        };
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("language = \"zh\""));
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.display_mode, DisplayMode::Standard);
    }
}
