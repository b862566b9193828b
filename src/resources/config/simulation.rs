use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{physics::PhysicsConfig, render::WindowConfig};
use crate::components::ConfigError;

const CONFIG_DIR: &str = "simflight";
const CONFIG_FILE: &str = "config.yaml";

/// Top level simulator settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub physics: PhysicsConfig,
    pub window: WindowConfig,
    /// Extra aircraft specs merged over the built-in catalog.
    pub aircraft_file: Option<PathBuf>,
}

impl SimConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// `<config dir>/simflight/config.yaml` for the current user.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Picks the configuration to run with.
    ///
    /// An explicit path must load. Otherwise the per-user file is used when it
    /// exists and the defaults when it does not.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!("Loading configuration from {}", path.display());
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                info!("Loading configuration from {}", path.display());
                Self::load(path)
            }
            _ => {
                warn!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.physics.fixed_hz.is_finite() && self.physics.fixed_hz > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "physics.fixed_hz must be positive, got {}",
                self.physics.fixed_hz
            )));
        }
        if self.physics.sea_level_density <= 0.0 {
            return Err(ConfigError::ValidationError(
                "physics.sea_level_density must be positive".to_string(),
            ));
        }
        if let Some(max_dt) = self.physics.max_frame_dt {
            if max_dt <= 0.0 {
                return Err(ConfigError::ValidationError(
                    "physics.max_frame_dt must be positive when set".to_string(),
                ));
            }
        }
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::ValidationError(
                "window size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
