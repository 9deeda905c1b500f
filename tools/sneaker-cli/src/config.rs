//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["sneakers.toml", ".sneakers.toml", "sneakers.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config text; the format follows the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// How the storefront is laid out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Viewport width in pixels; 768 and above is desktop layout.
    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
        }
    }
}

fn default_viewport_width() -> u32 {
    1280
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Default filter directive (e.g. "warn", "sneaker_storefront=debug").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Generate the default config file contents.
pub fn generate_default_config() -> String {
    r#"# Sneakers storefront configuration

[display]
# Viewport width in pixels. 768 and above uses the desktop dropdown cart,
# narrower widths use the full-screen mobile cart.
viewport_width = 1280

[log]
# Filter directive; SNEAKERS_LOG overrides it.
level = "warn"
# "human" or "json"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = CliConfig::parse("sneakers.toml", &generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = CliConfig::parse("sneakers.toml", "[display]\nviewport_width = 375\n").unwrap();
        assert_eq!(config.display.viewport_width, 375);
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.log.format, LogFormat::Human);
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse(
            "sneakers.json",
            r#"{"log": {"level": "debug", "format": "json"}}"#,
        )
        .unwrap();
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.display.viewport_width, 1280);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let err = CliConfig::parse("broken.toml", "display = 3").unwrap_err();
        assert!(format!("{:#}", err).contains("broken.toml"));
    }
}
