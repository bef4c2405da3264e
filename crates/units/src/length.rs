use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const M_TO_CM: f64 = 100.0;
pub const M_TO_MM: f64 = 1e3;
pub const M_TO_MICRONS: f64 = 1e6;

/// A physical length quantity using f64 precision.
///
/// The `Length` struct represents length values with meters as the base unit.
/// Cloud droplet radii are usually quoted in microns, so both are first-class.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let cloud_drop = Length::from_microns(10.0);
/// let drizzle = Length::from_mm(0.1);
///
/// assert!(drizzle > cloud_drop);
/// let in_meters = cloud_drop.to_meters();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: m

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in meters.
    pub fn from_meters(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value / M_TO_CM)
    }

    /// Creates a new `Length` from a value in millimeters.
    pub fn from_mm(value: f64) -> Self {
        Self(value / M_TO_MM)
    }

    /// Creates a new `Length` from a value in microns.
    pub fn from_microns(value: f64) -> Self {
        Self(value / M_TO_MICRONS)
    }

    /// Returns the length in meters.
    pub fn to_meters(&self) -> f64 {
        self.0
    }

    /// Converts the length to centimeters.
    pub fn to_cm(&self) -> f64 {
        self.0 * M_TO_CM
    }

    /// Converts the length to millimeters.
    pub fn to_mm(&self) -> f64 {
        self.0 * M_TO_MM
    }

    /// Converts the length to microns.
    pub fn to_microns(&self) -> f64 {
        self.0 * M_TO_MICRONS
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Square root
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}
