//! Configuration types for the simulation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Simulation configuration parameters.
///
/// `creatures` and `food` are target population sizes. The engine keeps
/// them in sync with its lists whenever a population is edited, so that
/// food can later be topped back up to the configured count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Width of the world (continuous units)
    pub width: f64,
    /// Height of the world (continuous units)
    pub height: f64,
    /// Random seed for reproducibility
    pub seed: u64,
    /// Base step length per tick for a creature that has not eaten
    pub speed: f64,
    /// Target number of creatures
    pub creatures: usize,
    /// Target number of food pellets
    pub food: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 20.0,
            seed: 7,
            speed: 0.8,
            creatures: 50,
            food: 250,
        }
    }
}

impl SimulationConfig {
    /// Check the configuration before a simulation is built from it
    pub fn validate(&self) -> Result<()> {
        if self.creatures < 1 {
            return Err(Error::Validation("creatures must be at least 1".to_string()));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(Error::Validation(format!(
                "width must be a positive finite number, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(Error::Validation(format!(
                "height must be a positive finite number, got {}",
                self.height
            )));
        }
        if !(self.speed.is_finite() && self.speed >= 0.0) {
            return Err(Error::Validation(format!(
                "speed must be a non-negative finite number, got {}",
                self.speed
            )));
        }
        Ok(())
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), ?config, "Loaded simulation config");
        Ok(config)
    }
}
