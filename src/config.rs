use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

fn default_picture_dir() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
            home.join("Pictures")
        })
        .join("NatGeoPics")
}

fn default_free_space_minimum() -> u8 {
    25
}

fn default_base_url() -> String {
    "http://photography.nationalgeographic.com/photography/photo-of-the-day".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// Directory the downloaded photos are stored in
    #[serde(default = "default_picture_dir")]
    pub picture_dir: PathBuf,
    /// Percentage of free space required on the picture directory for the
    /// photo to be downloaded
    #[serde(default = "default_free_space_minimum")]
    pub free_space_minimum: u8,
    /// Page listing the day's photo
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picture_dir: default_picture_dir(),
            free_space_minimum: default_free_space_minimum(),
            base_url: default_base_url(),
        }
    }
}

impl Config {
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Unable to determine user config directory")?
            .join("potd");
        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let cfg_path = Self::config_file_path()?;
        if !cfg_path.exists() {
            return Ok(Self::default());
        }

        let s = fs::read_to_string(&cfg_path)
            .with_context(|| format!("reading config {}", cfg_path.display()))?;
        toml::from_str(&s).context("parsing config toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_configuration() {
        let config = Config::default();
        assert_eq!(config.free_space_minimum, 25);
        assert!(config.picture_dir.ends_with("NatGeoPics"));
        assert!(config.base_url.contains("photo-of-the-day"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("free_space_minimum = 40").unwrap();
        assert_eq!(config.free_space_minimum, 40);
        assert!(config.picture_dir.ends_with("NatGeoPics"));
    }
}
