//! TOML configuration for locating the data files on disk.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_COUNTIES_FILE: &str = "fylker.json";
pub const DEFAULT_MUNICIPALITIES_FILE: &str = "kommuner.json";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub dir: PathBuf,
    #[serde(default = "default_counties_file")]
    pub counties_file: String,
    #[serde(default = "default_municipalities_file")]
    pub municipalities_file: String,
}

fn default_counties_file() -> String {
    DEFAULT_COUNTIES_FILE.to_string()
}

fn default_municipalities_file() -> String {
    DEFAULT_MUNICIPALITIES_FILE.to_string()
}

impl DataConfig {
    pub fn counties_path(&self) -> PathBuf {
        self.dir.join(&self.counties_file)
    }

    pub fn municipalities_path(&self) -> PathBuf {
        self.dir.join(&self.municipalities_file)
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_file_names() {
        let config: Config = toml::from_str("[data]\ndir = \"/srv/norgeo\"\n").unwrap();
        assert_eq!(config.data.counties_file, "fylker.json");
        assert_eq!(config.data.municipalities_file, "kommuner.json");
        assert_eq!(
            config.data.municipalities_path(),
            PathBuf::from("/srv/norgeo/kommuner.json")
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("norgeo.toml");
        fs::write(
            &path,
            "[data]\ndir = \"data\"\ncounties_file = \"counties.json\"\n",
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.data.counties_path(), PathBuf::from("data/counties.json"));
        assert_eq!(config.data.municipalities_file, "kommuner.json");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
