use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Sub};

use crate::length::Length;

pub const M3_TO_CM3: f64 = 1e6;
pub const M3_TO_LITERS: f64 = 1e3;

/// A volume quantity with cubic meters as the base unit.
///
/// Used both for individual drop volumes and for the control volume a
/// droplet population is mixed in.
///
/// # Examples
///
/// ```rust
/// use units::{Length, Volume};
///
/// let cell = Volume::from_cubic_meters(1.0);
/// assert_eq!(cell.to_liters(), 1000.0);
///
/// let drop = Volume::of_sphere(Length::from_microns(10.0));
/// assert!(drop.to_cubic_meters() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Volume(f64); // Base unit: m³

impl Volume {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_cubic_meters(value: f64) -> Self {
        Self(value)
    }

    pub fn from_cm3(value: f64) -> Self {
        Self(value / M3_TO_CM3)
    }

    pub fn from_liters(value: f64) -> Self {
        Self(value / M3_TO_LITERS)
    }

    /// Volume of a sphere: V = (4/3) π r³
    pub fn of_sphere(radius: Length) -> Self {
        Self((4.0 / 3.0) * PI * radius.powi(3))
    }

    pub fn to_cubic_meters(&self) -> f64 {
        self.0
    }

    pub fn to_cm3(&self) -> f64 {
        self.0 * M3_TO_CM3
    }

    pub fn to_liters(&self) -> f64 {
        self.0 * M3_TO_LITERS
    }

    /// Radius of the sphere with this volume.
    pub fn equivalent_radius(&self) -> Length {
        Length::from_meters((self.0 / ((4.0 / 3.0) * PI)).cbrt())
    }
}

impl Add for Volume {
    type Output = Volume;

    fn add(self, rhs: Volume) -> Volume {
        Volume(self.0 + rhs.0)
    }
}

impl Sub for Volume {
    type Output = Volume;

    fn sub(self, rhs: Volume) -> Volume {
        Volume(self.0 - rhs.0)
    }
}

impl Mul<f64> for Volume {
    type Output = Volume;

    fn mul(self, rhs: f64) -> Volume {
        Volume(self.0 * rhs)
    }
}

impl Mul<Volume> for f64 {
    type Output = Volume;

    fn mul(self, rhs: Volume) -> Volume {
        rhs * self
    }
}

impl Div<f64> for Volume {
    type Output = Volume;

    fn div(self, rhs: f64) -> Volume {
        Volume(self.0 / rhs)
    }
}

impl Div for Volume {
    type Output = f64;

    fn div(self, rhs: Volume) -> f64 {
        self.0 / rhs.0
    }
}
