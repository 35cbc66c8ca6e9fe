//! Settings file and platform paths

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::control::sampler::DEFAULT_SAMPLE_INTERVAL;
use crate::control::service::DEFAULT_RESET_DELAY;
use crate::control::session::{SessionState, DEFAULT_COORDINATE, DEFAULT_CREDITS};

/// Get the default settings file
/// - macOS: ~/Library/Application Support/mouse-control/settings.json
/// - Linux: ~/.config/mouse-control/settings.json
/// - Windows: %APPDATA%/mouse-control/settings.json
pub fn settings_path() -> Result<PathBuf> {
    let config = dirs::config_dir().context("Could not determine config directory")?;
    Ok(config.join("mouse-control").join("settings.json"))
}

/// Session defaults, every key optional in the file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Credits a new session starts with
    pub starting_credits: u32,

    /// Initial X field
    pub default_x: String,

    /// Initial Y field
    pub default_y: String,

    /// How long the "moving" cue stays up after a move
    pub reset_delay_ms: u64,

    /// Cursor sampling cadence
    pub sample_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_credits: DEFAULT_CREDITS,
            default_x: DEFAULT_COORDINATE.to_string(),
            default_y: DEFAULT_COORDINATE.to_string(),
            reset_delay_ms: DEFAULT_RESET_DELAY.as_millis() as u64,
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL.as_millis() as u64,
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from [`settings_path`] when `None`
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => settings_path()?,
        };

        if !path.exists() {
            log::debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
        let settings: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings: {}", path.display()))?;

        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    /// Sampling interval, never zero
    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms.max(1))
    }

    /// Fresh session state, with an optional credit override
    pub fn session(&self, credits: Option<u32>) -> SessionState {
        SessionState::new(
            credits.unwrap_or(self.starting_credits),
            self.default_x.clone(),
            self.default_y.clone(),
        )
    }
}
