//! # Demo Settings
//!
//! Tunables for the demo viewer, stored as JSON.
//!
//! Missing fields fall back to the defaults in [`crate::config`], so a
//! settings file only needs the values it changes.

use crate::config;
use crate::{IteriaError, IteriaResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for the demo viewer.
///
/// # Examples
///
/// ```
/// use iteria::DemoSettings;
///
/// let settings: DemoSettings = serde_json::from_str(r#"{ "cone_degrees": 45.0 }"#).unwrap();
/// assert_eq!(settings.cone_degrees, 45.0);
/// assert_eq!(settings.sharpness, iteria::config::DEFAULT_SHARPNESS);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Random seed for cone sampling and target placement
    pub seed: u64,
    /// Full opening angle of the sampled cone, in degrees
    pub cone_degrees: f32,
    /// Number of directions drawn inside the cone each frame
    pub cone_samples: usize,
    /// Maximum turret turn rate, in degrees per second
    pub turn_rate_degrees: f32,
    /// Speed factor for the follow camera
    pub follow_speed: f32,
    /// Sharpness factor for the follow camera, in (0, 1)
    pub sharpness: f32,
    /// Seconds between target moves
    pub retarget_seconds: f32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            seed: config::DEFAULT_SEED,
            cone_degrees: config::DEFAULT_CONE_DEGREES,
            cone_samples: config::DEFAULT_CONE_SAMPLES,
            turn_rate_degrees: config::DEFAULT_TURN_RATE_DEGREES,
            follow_speed: config::DEFAULT_FOLLOW_SPEED,
            sharpness: config::DEFAULT_SHARPNESS,
            retarget_seconds: config::DEFAULT_RETARGET_SECONDS,
        }
    }
}

impl DemoSettings {
    /// Reads and validates settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> IteriaResult<Self> {
        let path = path.as_ref();
        log::trace!("loading settings from {}", path.display());

        let text = fs::read_to_string(path)?;
        let settings: DemoSettings = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Writes settings as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> IteriaResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Checks that every value is usable by the demo.
    pub fn validate(&self) -> IteriaResult<()> {
        if !(0.0..=180.0).contains(&self.cone_degrees) {
            return Err(IteriaError::InvalidSettings(format!(
                "cone_degrees must be within 0..=180, got {}",
                self.cone_degrees
            )));
        }

        if self.cone_samples == 0 || self.cone_samples > config::MAX_CONE_SAMPLES {
            return Err(IteriaError::InvalidSettings(format!(
                "cone_samples must be within 1..={}, got {}",
                config::MAX_CONE_SAMPLES,
                self.cone_samples
            )));
        }

        if self.turn_rate_degrees <= 0.0 || self.follow_speed <= 0.0 {
            return Err(IteriaError::InvalidSettings(
                "turn_rate_degrees and follow_speed must be positive".to_string(),
            ));
        }

        if self.sharpness <= 0.0 || self.sharpness >= 1.0 {
            return Err(IteriaError::InvalidSettings(format!(
                "sharpness must be strictly between 0 and 1, got {}",
                self.sharpness
            )));
        }

        if self.retarget_seconds <= 0.0 {
            return Err(IteriaError::InvalidSettings(
                "retarget_seconds must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
