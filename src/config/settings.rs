use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}
fn default_dhikr_url() -> String {
    "https://sufi.org.uk/live-dzp".to_string()
}
fn default_masjid_name() -> String {
    "Masjid as-Salaam".to_string()
}
fn default_hijri_offset() -> i32 {
    0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Masjid content server serving the timetable, version marker and posters.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_dhikr_url")]
    pub dhikr_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            dhikr_url: default_dhikr_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_masjid_name")]
    pub masjid_name: String,
    /// Days to add/subtract from the Hijri date for local moon sighting.
    /// 0 = default (Saudi), -1 = one day behind, +1 = one day ahead
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            masjid_name: default_masjid_name(),
            hijri_offset: default_hijri_offset(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PostersConfig {
    /// Also probe for photos.jpg during the Thursday-night/Friday window.
    #[serde(default)]
    pub include_photos: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MakroohConfig {
    /// Warn during the fourteen minutes leading up to maghrib as well.
    #[serde(default)]
    pub maghrib_window: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub posters: PostersConfig,
    #[serde(default)]
    pub makrooh: MakroohConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "mihrab").context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }
}
