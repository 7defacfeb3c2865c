//! Application configuration
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/neuroscan/config.yaml
//!
//! Every section defaults, so a missing or partial file is fine; a
//! malformed file logs a warning and falls back to defaults.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated pipeline timing
    pub simulation: SimulationConfig,
    /// Viewer defaults
    pub display: DisplayConfig,
    /// Identity shown in the dashboard header
    pub profile: ProfileConfig,
    /// Directory offered by the report export dialog
    pub export_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Export directory, defaulting to ~/Documents/neuroscan-reports
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| {
            dirs::document_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("neuroscan-reports")
        })
    }
}

/// Timing for the simulated upload/processing pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Interval between progress ticks, in milliseconds
    pub tick_interval_ms: u64,
    /// Upload percent per tick
    pub upload_step: u8,
    /// Processing percent per tick
    pub processing_step: u8,
    /// Delay between processing hitting 100 and the result appearing
    pub finalize_delay_ms: u64,
    /// Delay for the login/access-request submit spinners
    pub submit_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            upload_step: crate::session::UPLOAD_STEP,
            processing_step: crate::session::PROCESSING_STEP,
            finalize_delay_ms: 500,
            submit_delay_ms: crate::auth::SUBMIT_DELAY_MS,
        }
    }
}

/// Viewer defaults applied when the dashboard opens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Zoom percentage (clamped to 50-200 on use)
    pub default_zoom: u16,
    /// Contrast percentage (clamped to 0-200 on use)
    pub default_contrast: u16,
    /// Brightness percentage (clamped to 0-200 on use)
    pub default_brightness: u16,
    /// Start with the annotation overlay on
    pub show_annotations: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_zoom: 100,
            default_contrast: 50,
            default_brightness: 50,
            show_annotations: true,
        }
    }
}

/// Identity shown in the dashboard header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub clinician_name: String,
    pub institution: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            clinician_name: "Dr. Sarah Chen".to_string(),
            institution: "NeuroScan Research".to_string(),
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/neuroscan/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("neuroscan")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return T::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<T>(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                T::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            T::default()
        }
    }
}

/// Save configuration to a YAML file, creating parent directories
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;
    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_nonexistent_returns_default() {
        let config: AppConfig = load_config(Path::new("/nonexistent/path/config.yaml"));
        assert_eq!(config.simulation.tick_interval_ms, 100);
        assert_eq!(config.simulation.upload_step, 5);
        assert_eq!(config.simulation.processing_step, 2);
        assert_eq!(config.simulation.finalize_delay_ms, 500);
        assert_eq!(config.display.default_zoom, 100);
        assert_eq!(config.profile.clinician_name, "Dr. Sarah Chen");
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = AppConfig::default();
        config.simulation.tick_interval_ms = 50;
        config.display.default_contrast = 80;
        config.profile.clinician_name = "Dr. Test".to_string();

        save_config(&config, &path).unwrap();
        let loaded: AppConfig = load_config(&path);

        assert_eq!(loaded.simulation.tick_interval_ms, 50);
        assert_eq!(loaded.display.default_contrast, 80);
        assert_eq!(loaded.profile.clinician_name, "Dr. Test");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "simulation:\n  tick_interval_ms: 25\n").unwrap();

        let loaded: AppConfig = load_config(&path);
        assert_eq!(loaded.simulation.tick_interval_ms, 25);
        // Unspecified fields take their defaults
        assert_eq!(loaded.simulation.upload_step, 5);
        assert_eq!(loaded.display.default_brightness, 50);
    }
}
