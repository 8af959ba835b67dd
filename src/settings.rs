//! Durable user settings.
//!
//! Only one value outlives a run: the last vertex scale given explicitly on
//! the command line. It is stored as `settings.yaml` in the per-user config
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The name of the settings file.
pub const SETTINGS_FILENAME: &str = "settings.yaml";

/// Key-value store for values remembered between invocations.
pub trait SettingsStore {
    /// Last explicitly requested vertex scale, if one was ever saved.
    fn last_vertex_scale(&self) -> Option<f32>;

    /// Remember `scale` and persist it immediately.
    fn set_last_vertex_scale(&mut self, scale: f32) -> Result<()>;
}

/// On-disk settings document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub last_vertex_scale: Option<f32>,
}

impl Settings {
    /// Parse settings from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::Settings {
            message: format!("Invalid settings: {}", e),
            help: Some(format!("Fix or delete {}", SETTINGS_FILENAME)),
        })
    }
}

/// Settings persisted as YAML at a fixed path.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
    settings: Settings,
}

impl FileSettings {
    /// Open the settings file in the per-user config directory.
    pub fn open_default() -> Result<Self> {
        let dir = ProjectDirs::from("", "", "Tiled2Unity")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(Error::NoDataDir)?;
        Self::open(dir.join(SETTINGS_FILENAME))
    }

    /// Load settings from `path`; a missing file yields defaults.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let settings = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| Error::Io {
                path: path.clone(),
                message: format!("Failed to read settings: {}", e),
            })?;
            Settings::parse(&content)?
        } else {
            Settings::default()
        };

        Ok(Self { path, settings })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| Error::Io {
                path: dir.to_path_buf(),
                message: format!("Failed to create settings directory: {}", e),
            })?;
        }

        let content = serde_yaml::to_string(&self.settings).map_err(|e| Error::Settings {
            message: format!("Failed to serialize settings: {}", e),
            help: None,
        })?;

        fs::write(&self.path, content).map_err(|e| Error::Io {
            path: self.path.clone(),
            message: format!("Failed to write settings: {}", e),
        })
    }
}

impl SettingsStore for FileSettings {
    fn last_vertex_scale(&self) -> Option<f32> {
        self.settings.last_vertex_scale
    }

    fn set_last_vertex_scale(&mut self, scale: f32) -> Result<()> {
        self.settings.last_vertex_scale = Some(scale);
        self.save()
    }
}

/// Settings held in memory only, for hosts without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    settings: Settings,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_vertex_scale(scale: f32) -> Self {
        Self {
            settings: Settings {
                last_vertex_scale: Some(scale),
            },
        }
    }
}

impl SettingsStore for MemorySettings {
    fn last_vertex_scale(&self) -> Option<f32> {
        self.settings.last_vertex_scale
    }

    fn set_last_vertex_scale(&mut self, scale: f32) -> Result<()> {
        self.settings.last_vertex_scale = Some(scale);
        Ok(())
    }
}
