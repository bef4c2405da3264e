use std::ops::{Add, Div, Mul, Sub};

pub const M_PER_S_TO_CM_PER_S: f64 = 100.0;

/// A velocity with meters per second as the base unit.
///
/// # Examples
/// ```
/// use units::Velocity;
///
/// let fall_speed = Velocity::from_cm_per_sec(1.2);
/// assert!((fall_speed.to_meters_per_sec() - 0.012).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Velocity(f64); // Base unit: m/s

impl Velocity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_cm_per_sec(value: f64) -> Self {
        Self(value / M_PER_S_TO_CM_PER_S)
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_cm_per_sec(&self) -> f64 {
        self.0 * M_PER_S_TO_CM_PER_S
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
