// ABOUTME: Configuration for the stepup binary
// Loaded from TOML under the platform config dir; every field has a default

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::components::stepper::{StepperBuilder, DEFAULT_ANIMATION, DEFAULT_COLLAPSED_FRACTION};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepupConfig {
    /// Page the stepper opens on
    #[serde(default)]
    pub initial_index: usize,

    /// Share of the screen height each collapsed band takes
    #[serde(default = "default_collapsed_fraction")]
    pub collapsed_height_fraction: f32,

    /// Transition length in milliseconds, 0 disables animation
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,

    /// Extra rows unreached pages are pushed below the screen
    #[serde(default)]
    pub bottom_inset: u16,

    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_collapsed_fraction() -> f32 {
    DEFAULT_COLLAPSED_FRACTION
}

fn default_animation_ms() -> u64 {
    DEFAULT_ANIMATION.as_millis() as u64
}

fn default_log_level() -> String {
    "stepup=info".to_string()
}

impl Default for StepupConfig {
    fn default() -> Self {
        Self {
            initial_index: 0,
            collapsed_height_fraction: default_collapsed_fraction(),
            animation_ms: default_animation_ms(),
            bottom_inset: 0,
            log_level: default_log_level(),
        }
    }
}

impl StepupConfig {
    /// Default config file location
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("stepup").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = self.to_toml()?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }

    /// Carry these settings onto a stepper under construction
    pub fn apply(&self, builder: StepperBuilder) -> StepperBuilder {
        builder
            .initial_index(self.initial_index)
            .collapsed_fraction(self.collapsed_height_fraction)
            .animation(self.animation())
            .bottom_inset(self.bottom_inset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{onboarding_pages, StepperComponent};
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;
    use std::time::Instant;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StepupConfig::default();
        assert_eq!(config.initial_index, 0);
        assert!((config.collapsed_height_fraction - 0.1).abs() < f32::EPSILON);
        assert_eq!(config.animation_ms, 350);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = StepupConfig::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, StepupConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "initial_index = 2\nanimation_ms = 0\n").unwrap();

        let config = StepupConfig::load_from(&path).unwrap();

        assert_eq!(config.initial_index, 2);
        assert_eq!(config.animation(), Duration::ZERO);
        assert_eq!(config.log_level, "stepup=info");
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = StepupConfig {
            collapsed_height_fraction: 0.25,
            bottom_inset: 2,
            ..StepupConfig::default()
        };

        config.save_to(&path).unwrap();

        assert_eq!(StepupConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_apply_carries_fraction_and_inset() {
        let config = StepupConfig {
            initial_index: 1,
            collapsed_height_fraction: 0.2,
            bottom_inset: 2,
            ..StepupConfig::default()
        };

        let stepper = config
            .apply(StepperComponent::builder(onboarding_pages()))
            .build()
            .unwrap();

        assert_eq!(stepper.active_index(), 1);
        assert_eq!(stepper.collapsed_fraction(), 0.2);
        // 20 rows: offsets 0, 4, 8, ... and parked pages sit 2 rows below the bottom edge
        let tops = stepper.page_tops(Rect::new(0, 0, 10, 20), Instant::now());
        let expected = [0.0, 4.0, 22.0, 22.0, 22.0];
        assert_eq!(tops.len(), expected.len());
        for (top, want) in tops.iter().zip(expected) {
            assert!((top - want).abs() < 1e-3, "expected {expected:?}, got {tops:?}");
        }
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "initial_index = \"first\"").unwrap();

        let err = StepupConfig::load_from(&path).unwrap_err();

        assert!(err.to_string().contains("config.toml"));
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }
}
