//! Configuration for a box-model coalescence run.

use std::path::Path;

use serde::{Deserialize, Serialize};
use units::{Time, Volume};

use crate::cases::Case;
use crate::collisions::Golovin;
use crate::constants::GOLOVIN_B;
use crate::error::SuperdropletError;

/// Top-level simulation configuration.
///
/// Loaded from JSON at runtime. Missing fields fall back to the defaults,
/// so `{}` is a valid configuration. Times are in seconds and volumes in
/// cubic meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Name of the initial-condition case (see [`Case::NAMES`])
    pub case: String,

    /// Number of superdroplets sampled from the case distribution
    pub n_superdroplets: usize,

    /// Collision timestep
    pub timestep: Time,

    /// Volume of the well-mixed cell
    pub cell_volume: Volume,

    /// Golovin kernel coefficient (s⁻¹)
    pub golovin_b: f64,

    /// Seed for the ChaCha random stream
    pub seed: u64,

    /// Simulated time; defaults to the case's `t_end`
    pub duration: Option<Time>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            case: "shima_golo".to_string(),
            n_superdroplets: 1 << 17,
            timestep: Time::from_seconds(1.0),
            cell_volume: Volume::from_cubic_meters(1.0),
            golovin_b: GOLOVIN_B,
            seed: 42,
            duration: None,
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SuperdropletError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SuperdropletError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reject values no run can start from.
    pub fn validate(&self) -> Result<(), SuperdropletError> {
        if self.n_superdroplets < 2 {
            return Err(SuperdropletError::InvalidConfig(format!(
                "n_superdroplets must be at least 2, got {}",
                self.n_superdroplets
            )));
        }
        let dt = self.timestep.to_seconds();
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SuperdropletError::InvalidConfig(format!(
                "timestep must be positive and finite, got {dt} s"
            )));
        }
        let dv = self.cell_volume.to_cubic_meters();
        if !(dv.is_finite() && dv > 0.0) {
            return Err(SuperdropletError::InvalidConfig(format!(
                "cell_volume must be positive and finite, got {dv} m³"
            )));
        }
        if self.golovin_b.is_nan() || self.golovin_b < 0.0 {
            return Err(SuperdropletError::InvalidConfig(format!(
                "golovin_b must be non-negative, got {}",
                self.golovin_b
            )));
        }
        Ok(())
    }

    /// The initial-condition case this run uses.
    pub fn case(&self) -> Result<Case, SuperdropletError> {
        Case::named(&self.case)
    }

    pub fn kernel(&self) -> Golovin {
        Golovin::new(self.golovin_b)
    }

    /// Simulated time, falling back to the case's own run length.
    pub fn duration(&self, case: &Case) -> Time {
        self.duration.unwrap_or(case.t_end)
    }
}
