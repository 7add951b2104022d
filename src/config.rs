use anyhow::{Context, Result};
use calmon_core::Color;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Palette color preselected for new events
    #[serde(default)]
    pub default_color: Color,
}

/// Get the config directory path (~/.config/calmon)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("calmon");
    Ok(config_dir)
}

/// Get the config file path (~/.config/calmon/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load config from ~/.config/calmon/config.toml, writing a commented
/// template on first run.
pub fn load_or_init() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        create_default_config(&path)?;
        return Ok(Config::default());
    }

    load_from(&path)
}

fn load_from(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
    }

    let template = "\
# calmon configuration

# Palette color preselected for new events
# (blue, green, yellow, red, magenta, cyan):
# default_color = \"blue\"
";

    std::fs::write(path, template)
        .with_context(|| format!("Failed to write config file at {}", path.display()))?;

    Ok(())
}
