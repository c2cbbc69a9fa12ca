//! Configuration management for devterm.
//!
//! Loads `config.toml` with optional CLI override via `--config`.
//!
//! # Architecture
//!
//! 1. The entry point resolves a config path: CLI override > a `config.toml`
//!    next to the working directory
//! 2. [`Config::load_with_overrides`] reads that path, or falls back to the
//!    defaults embedded at build time
//! 3. The [`Config`] is passed to [`Terminal::new`](crate::Terminal::new)
//!
//! # Testing
//!
//! Tests use [`Config::load`] with explicit paths to temporary directories.

use crate::{Panel, Theme};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Global configuration, loaded from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Color theme at startup.
    pub theme: Theme,

    /// Sidebar panel shown at startup.
    pub panel: Panel,

    /// Device channel settings.
    pub device: DeviceConfig,
}

/// Settings for the hardware device channel.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    /// Vendor ids offered to the device chooser; empty means any device.
    pub vendor_ids: Vec<u16>,
}

impl Config {
    /// Read and deserialize a TOML config file from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load configuration with priority: CLI override > discovered path > defaults.
    pub fn load_with_overrides(
        cli_override: Option<&Path>,
        discovered_path: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = cli_override {
            return Self::load(path);
        }
        if let Some(path) = discovered_path {
            return Self::load(path);
        }
        Self::load_embedded()
    }

    fn load_embedded() -> Result<Self> {
        let source = include_str!("../../config.toml");
        toml::from_str(source).context("Failed to parse embedded config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_empty_config_as_defaults() {
        let tmp_dir = tempdir().expect("tempdir");
        let config_path = tmp_dir.path().join("config.toml");
        std::fs::write(&config_path, "").expect("write");

        let config = Config::load(&config_path).expect("loads");
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.panel, Panel::Explorer);
        assert!(config.device.vendor_ids.is_empty());
    }

    #[test]
    fn loads_theme_panel_and_device_filters() {
        let tmp_dir = tempdir().expect("tempdir");
        let config_path = tmp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "theme = \"light\"\npanel = \"assistant\"\n\n[device]\nvendor_ids = [0x2e8a]\n",
        )
        .expect("write");

        let config = Config::load(&config_path).expect("loads");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.panel, Panel::Assistant);
        assert_eq!(config.device.vendor_ids, [0x2e8a]);
    }

    #[test]
    fn errors_on_invalid_toml() {
        let tmp_dir = tempdir().expect("tempdir");
        let config_path = tmp_dir.path().join("config.toml");
        std::fs::write(&config_path, "invalid toml {{{{").expect("write");

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn errors_on_unknown_fields() {
        let tmp_dir = tempdir().expect("tempdir");
        let config_path = tmp_dir.path().join("config.toml");
        std::fs::write(&config_path, "font_size = 14\n").expect("write");

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn cli_override_wins() {
        let tmp_dir = tempdir().expect("tempdir");
        let cli_path = tmp_dir.path().join("cli.toml");
        let discovered_path = tmp_dir.path().join("discovered.toml");
        std::fs::write(&cli_path, "theme = \"light\"\n").expect("write");
        std::fs::write(&discovered_path, "theme = \"dark\"\n").expect("write");

        let config = Config::load_with_overrides(Some(&cli_path), Some(&discovered_path))
            .expect("loads");
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn falls_back_to_embedded_defaults() {
        let config = Config::load_with_overrides(None, None).expect("embedded defaults parse");
        assert_eq!(config.theme, Theme::Dark);
    }
}
