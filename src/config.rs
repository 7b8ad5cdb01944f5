use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Column budget for the list and its dialogs
    #[serde(default = "default_list_width")]
    pub list_width: u16,
    /// Viewport height assumed until the terminal reports its size
    #[serde(default = "default_list_height")]
    pub list_height: u16,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_list_width() -> u16 {
    30
}

fn default_list_height() -> u16 {
    60
}

fn default_title() -> String {
    "File Manager".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_width: default_list_width(),
            list_height: default_list_height(),
            title: default_title(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists
    ///
    /// An explicit `cli_path` must exist; the implicit locations are optional.
    pub fn load(cli_path: Option<String>) -> Result<Self> {
        match get_config_path(cli_path)? {
            Some(path) => {
                debug!("Loading config from: {:?}", path);
                let config_str = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_yaml(&config_str)
                    .with_context(|| format!("Failed to parse config file {}", path.display()))
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_yaml(config_str: &str) -> Result<Self> {
        // An empty file deserializes to null; treat it as all defaults
        if config_str.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(config_str)?)
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/filetui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("filetui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
