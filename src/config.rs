// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub startup: StartupConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupConfig {
    /// Tab to open on launch. Unknown identifiers fall back to overview.
    #[serde(default = "default_tab")]
    pub tab: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Show the key-insights panel on the overview tab
    #[serde(default = "default_true_config")]
    pub show_insights: bool,

    /// Show the data-sources panel on the overview tab
    #[serde(default = "default_true_config")]
    pub show_integrations: bool,
}

fn default_tab() -> String {
    "overview".to_string()
}

fn default_true_config() -> bool {
    true
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self { tab: default_tab() }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_insights: true,
            show_integrations: true,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("lifedash")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("lifedash")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).with_context(|| {
                format!("Failed to read config file: {}", config_path.display())
            })?;

            let config: Config = toml::from_str(&contents).with_context(|| {
                format!("Failed to parse config file: {}", config_path.display())
            })?;

            Ok(config)
        } else {
            let config = Config::default();

            // Try to save the default config, but don't fail if we can't
            if let Err(e) = config.save() {
                eprintln!("Warning: Could not create default config file: {}", e);
                eprintln!(
                    "Using built-in defaults. Run 'lifedash init-config' to create a config file."
                );
            }

            Ok(config)
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.startup.tab, "overview");
        assert_eq!(config.display.show_insights, true);
        assert_eq!(config.display.show_integrations, true);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();

        let deserialized: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.startup.tab, config.startup.tab);
        assert_eq!(
            deserialized.display.show_insights,
            config.display.show_insights
        );
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[startup]\ntab = \"skills\"\n").unwrap();
        assert_eq!(config.startup.tab, "skills");
        assert_eq!(config.display.show_insights, true);
    }
}
