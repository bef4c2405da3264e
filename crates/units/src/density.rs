use std::ops::Mul;

use crate::mass::Mass;
use crate::volume::Volume;

const KG_PER_M3_TO_G_PER_CM3: f64 = 1e-3;

/// Volume density in kg/m³
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Density(pub f64);

impl Density {
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value)
    }

    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value / KG_PER_M3_TO_G_PER_CM3)
    }

    pub fn to_kg_per_m3(&self) -> f64 {
        self.0
    }

    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0 * KG_PER_M3_TO_G_PER_CM3
    }
}

impl Mul<Volume> for Density {
    type Output = Mass;

    fn mul(self, rhs: Volume) -> Mass {
        Mass::from_kg(self.0 * rhs.to_cubic_meters())
    }
}
