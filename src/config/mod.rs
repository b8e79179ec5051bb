use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::Format;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub output: OutputConfig,
}

/// Seed values shown before the user picks anything, kept in the config
/// file instead of as ambient globals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub base_color: String,
    /// Surface the light ramp is previewed against.
    pub background_light: String,
    /// Blend background for the dark ramp.
    pub background_dark: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Format,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            base_color: "#b32aa9".to_string(),
            background_light: "#fff".to_string(),
            background_dark: "#111".to_string(),
        }
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "tonal", "tonal").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = Config::default();
        save(&cfg, Some(&path))?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_parseable_colors() {
        let cfg = Config::default();
        assert!(crate::color::parse(&cfg.defaults.base_color).is_ok());
        assert!(crate::color::parse(&cfg.defaults.background_light).is_ok());
        assert!(crate::color::parse(&cfg.defaults.background_dark).is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = Config::default();
        let raw = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&raw).unwrap();
        assert_eq!(back.defaults.base_color, cfg.defaults.base_color);
        assert_eq!(back.output.format, cfg.output.format);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let back: Config = toml::from_str("[defaults]\nbase_color = \"#1890ff\"\n").unwrap();
        assert_eq!(back.defaults.base_color, "#1890ff");
        assert_eq!(back.defaults.background_dark, "#111");
        assert_eq!(back.output.format, Format::Lines);
    }
}
