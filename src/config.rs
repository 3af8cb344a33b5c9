use crate::error::{GardenError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".garden.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GardenConfig {
    #[serde(default)]
    pub garden: GardenSettings,

    #[serde(default)]
    pub weather: WeatherSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenSettings {
    /// Data directory, relative to the project root.
    #[serde(default = "default_path")]
    pub path: String,

    /// Key under which the whole collection is stored.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: usize,

    /// Photos larger than this are kept in memory only.
    #[serde(default = "default_max_photo_bytes")]
    pub max_photo_bytes: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

fn default_path() -> String {
    ".garden".to_string()
}

fn default_storage_key() -> String {
    "gardenPlants".to_string()
}

fn default_quota_bytes() -> usize {
    5_000_000
}

fn default_max_photo_bytes() -> usize {
    50_000
}

impl Default for GardenSettings {
    fn default() -> Self {
        Self {
            path: default_path(),
            storage_key: default_storage_key(),
            quota_bytes: default_quota_bytes(),
            max_photo_bytes: default_max_photo_bytes(),
            log_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSettings {
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_location() -> String {
    "auto".to_string()
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            location: default_location(),
        }
    }
}

impl GardenConfig {
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: GardenConfig = toml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| GardenError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(GardenError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.garden.path)
    }

    pub fn log_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.garden
            .log_file
            .as_ref()
            .map(|file| project_root.join(file))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: GardenConfig = toml::from_str("[garden]\nquota_bytes = 1000\n").unwrap();
        assert_eq!(config.garden.quota_bytes, 1000);
        assert_eq!(config.garden.storage_key, "gardenPlants");
        assert_eq!(config.garden.max_photo_bytes, 50_000);
        assert_eq!(config.weather.location, "auto");
    }

    #[test]
    fn test_save_and_load_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        let config = GardenConfig::default();
        config.save(&temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();

        let nested = temp_dir.path().join("beds").join("north");
        std::fs::create_dir_all(&nested).unwrap();

        let (loaded, root) = GardenConfig::load(&nested).unwrap();
        assert_eq!(root, temp_dir.path());
        assert_eq!(loaded.garden.path, ".garden");
        assert_eq!(loaded.data_path(&root), temp_dir.path().join(".garden"));
    }

    #[test]
    fn test_missing_config_is_not_initialized() {
        let temp_dir = TempDir::new().unwrap();
        let err = GardenConfig::find_config_file(temp_dir.path()).unwrap_err();
        assert!(matches!(err, GardenError::NotInitialized));
    }
}
