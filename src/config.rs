use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::camera::DEFAULT_CAMERA_SPEED;
use crate::cli::Cli;
use crate::cube::{CubeSettings, KeyBindings, PivotMode};

/// Simulator configuration, loaded from JSON. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds per animated quarter turn
    pub rotation_duration: f32,
    /// Layer membership tolerance
    pub tolerance: f32,
    pub pivot: PivotMode,
    pub camera_speed: f32,
    pub bindings: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        let cube = CubeSettings::default();
        Self {
            rotation_duration: cube.rotation_duration,
            tolerance: cube.tolerance,
            pivot: cube.pivot,
            camera_speed: DEFAULT_CAMERA_SPEED,
            bindings: KeyBindings::default(),
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json).context("invalid configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("in {}", path.display()))
    }

    /// Defaults, overlaid with the file named on the command line, overlaid
    /// with individual command-line flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(duration) = cli.duration {
            config.rotation_duration = duration;
        }
        if let Some(pivot) = cli.pivot {
            config.pivot = pivot;
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.rotation_duration.is_finite() && self.rotation_duration >= 0.0,
            "rotation_duration must be a non-negative number of seconds, got {}",
            self.rotation_duration
        );
        anyhow::ensure!(
            self.tolerance > 0.0 && self.tolerance < 0.5,
            "tolerance must be in (0, 0.5), got {}",
            self.tolerance
        );
        Ok(())
    }

    pub fn cube_settings(&self) -> CubeSettings {
        CubeSettings {
            rotation_duration: self.rotation_duration,
            tolerance: self.tolerance,
            pivot: self.pivot,
        }
    }
}
