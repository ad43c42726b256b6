use crate::errors::{HistogramError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Image library
    pub library_dir: PathBuf,
    pub last_image: Option<String>,

    // Appearance
    pub theme: Theme,
    pub show_preview: bool,
    /// Longest edge of the preview texture; the histogram always uses every pixel
    pub max_preview_size: u32,

    // Chart
    pub chart_height: f32,
    /// Fraction of each bin left empty between bar groups
    pub bar_gap: f32,

    // Diagnostics
    pub debug_logging: bool,

    // Window state
    pub window_size: (f32, f32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library_dir: PathBuf::from("static").join("imagenet_subset"),
            last_image: None,

            theme: Theme::Dark,
            show_preview: true,
            max_preview_size: 2048,

            chart_height: 320.0,
            bar_gap: 0.2,

            debug_logging: false,

            window_size: (1200.0, 860.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "histoview", "Histoview")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Loads the saved settings, falling back to defaults when there are none or they
    /// can't be parsed.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::read_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings at {:?}: {:#}", path, e);
                Self::default()
            }
        }
    }

    pub fn read_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn save(&self) {
        let result = Self::config_path()
            .ok_or_else(|| HistogramError::SettingsError {
                message: "no config directory for this platform".to_string(),
            })
            .and_then(|path| self.write_to(&path));

        if let Err(e) = result {
            e.log();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            library_dir: PathBuf::from("/srv/images"),
            last_image: Some("n01443537_goldfish.JPEG".to_string()),
            theme: Theme::Light,
            bar_gap: 0.5,
            ..Settings::default()
        };
        settings.write_to(&path).unwrap();

        assert_eq!(Settings::read_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "theme": "Light" }"#).unwrap();

        let settings = Settings::read_from(&path).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.chart_height, Settings::default().chart_height);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(Settings::read_from(&path).is_err());
    }
}
