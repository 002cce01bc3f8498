//! Runtime configuration loaded from TOML, with defaults from `constants`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::game_constants::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, SEED};
use crate::constants::orientation_constants::{
    DRAG_SENSITIVITY_RAD_PER_PX, HOME_PITCH_DEG, HOME_YAW_DEG,
};
use crate::constants::rice_constants::RICE_TARGET;
use crate::environment::BrightnessCurve;
use crate::orientation::Orientation;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable values that are placeholders for real puzzle content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub home_pitch_deg: f32,
    pub home_yaw_deg: f32,
    pub drag_sensitivity: f32,
    pub brightness: BrightnessCurve,
    pub rice_target: i64,
    /// Seed for the constellation's starting values.
    pub seed: u64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            home_pitch_deg: HOME_PITCH_DEG,
            home_yaw_deg: HOME_YAW_DEG,
            drag_sensitivity: DRAG_SENSITIVITY_RAD_PER_PX,
            brightness: BrightnessCurve::default(),
            rice_target: RICE_TARGET,
            seed: SEED,
        }
    }
}

impl PuzzleConfig {
    pub fn home_orientation(&self) -> Orientation {
        Orientation::from_degrees(self.home_pitch_deg, self.home_yaw_deg)
    }

    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: PuzzleConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.brightness.is_strictly_positive() {
            return Err(ConfigError::Invalid(format!(
                "brightness must stay positive over the day (base {}, amplitude {})",
                self.brightness.base, self.brightness.amplitude
            )));
        }
        if !(self.drag_sensitivity.is_finite() && self.drag_sensitivity > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "drag_sensitivity must be positive, got {}",
                self.drag_sensitivity
            )));
        }
        if !(self.home_pitch_deg.is_finite() && self.home_yaw_deg.is_finite()) {
            return Err(ConfigError::Invalid("home orientation must be finite".into()));
        }
        Ok(())
    }

    /// Reads `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Path from the environment variable, or the default file name.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }
}
