//! Superdroplet state.
//!
//! A [`Droplet`] stands in for `multiplicity` identical real droplets that
//! share a cubed radius, a dissolved solute mass and a liquid density.
//!
//! # Immutability
//!
//! Fields are private and there are no setters. Coalescence produces new
//! values that replace a population slot wholesale, so every update reads as
//! "old state in, new state out".

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use units::{Density, Length, Mass, Velocity, Volume};

use crate::constants::{RHO_WATER, SPHERE_FACTOR};

/// Upper radius of the Stokes fall-speed regime (m)
const STOKES_LIMIT: f64 = 40e-6;

/// Upper radius of the linear fall-speed regime (m)
const LINEAR_LIMIT: f64 = 0.6e-3;

/// Stokes regime coefficient, v = k1 r² (m⁻¹ s⁻¹)
const K1: f64 = 1.19e8;

/// Linear regime coefficient, v = k2 r (s⁻¹)
const K2: f64 = 8.0e3;

/// Large-drop regime coefficient, v = k3 √r (m^½ s⁻¹)
const K3: f64 = 2.01e2;

/// A weighted representative of a population of identical real droplets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Droplet {
    /// Number of real droplets represented
    multiplicity: u64,

    /// Cube of the droplet radius (m³)
    rcubed: f64,

    /// Dissolved solute mass per real droplet (kg)
    solute: f64,

    /// Liquid density (kg/m³)
    density: f64,
}

impl Droplet {
    /// Create a droplet of liquid water.
    ///
    /// # Arguments
    /// * `multiplicity` - Number of real droplets represented
    /// * `rcubed` - Cube of the radius in m³
    /// * `solute` - Dissolved mass per real droplet
    ///
    /// # Panics
    /// If `multiplicity` is zero, or if `rcubed` or `solute` is negative or
    /// not finite.
    ///
    /// # Example
    /// ```
    /// use superdroplet::Droplet;
    /// use units::Mass;
    ///
    /// let drop = Droplet::new(1_000, 1e-15, Mass::zero());
    /// assert_eq!(drop.multiplicity(), 1_000);
    /// assert!((drop.radius().to_microns() - 10.0).abs() < 1e-9);
    /// ```
    pub fn new(multiplicity: u64, rcubed: f64, solute: Mass) -> Self {
        assert!(multiplicity >= 1, "multiplicity must be at least 1");
        assert!(
            rcubed.is_finite() && rcubed >= 0.0,
            "cubed radius must be finite and non-negative, got {rcubed}"
        );
        assert!(
            solute.to_kg().is_finite() && solute.to_kg() >= 0.0,
            "solute mass must be finite and non-negative, got {} kg",
            solute.to_kg()
        );

        Self {
            multiplicity,
            rcubed,
            solute: solute.to_kg(),
            density: RHO_WATER,
        }
    }

    /// Create a droplet from its radius rather than the cubed radius.
    pub fn from_radius(multiplicity: u64, radius: Length, solute: Mass) -> Self {
        Self::new(multiplicity, radius.powi(3), solute)
    }

    /// Same droplet with a different liquid density.
    pub fn with_density(self, density: Density) -> Self {
        Self {
            density: density.to_kg_per_m3(),
            ..self
        }
    }

    /// Replacement state that keeps this droplet's density.
    pub(crate) fn replaced(&self, multiplicity: u64, rcubed: f64, solute: f64) -> Self {
        self.replaced_with_density(multiplicity, rcubed, solute, self.density)
    }

    /// Replacement state with a new liquid density (kg/m³).
    ///
    /// Skips the checks in [`Droplet::new`]: coalescence may legitimately
    /// leave a zero-multiplicity entry behind.
    pub(crate) fn replaced_with_density(
        &self,
        multiplicity: u64,
        rcubed: f64,
        solute: f64,
        density: f64,
    ) -> Self {
        Self {
            multiplicity,
            rcubed,
            solute,
            density,
        }
    }

    /// Number of real droplets represented.
    pub fn multiplicity(&self) -> u64 {
        self.multiplicity
    }

    /// Cube of the radius (m³). This is the quantity coalescence adds up.
    pub fn rcubed(&self) -> f64 {
        self.rcubed
    }

    /// Dissolved solute mass per real droplet.
    pub fn solute(&self) -> Mass {
        Mass::from_kg(self.solute)
    }

    pub fn density(&self) -> Density {
        Density::from_kg_per_m3(self.density)
    }

    pub fn radius(&self) -> Length {
        Length::from_meters(self.rcubed.cbrt())
    }

    /// Liquid volume of one real droplet: V = (4/3) π r³
    pub fn volume(&self) -> Volume {
        Volume::from_cubic_meters(SPHERE_FACTOR * self.rcubed)
    }

    /// Mass of one real droplet: liquid plus dissolved solute.
    pub fn mass(&self) -> Mass {
        self.density() * self.volume() + self.solute()
    }

    /// Mass of all the real droplets this representative stands for.
    pub fn total_mass(&self) -> Mass {
        self.mass() * self.multiplicity as f64
    }

    /// Terminal fall speed in still air.
    ///
    /// Piecewise approximation from Rogers & Yau (1989):
    /// - r < 40 µm: Stokes drag, v = k1 r²
    /// - 40 µm ≤ r < 0.6 mm: v = k2 r
    /// - r ≥ 0.6 mm: v = k3 √r
    pub fn terminal_velocity(&self) -> Velocity {
        let r = self.radius().to_meters();

        let v = if r < STOKES_LIMIT {
            K1 * r * r
        } else if r < LINEAR_LIMIT {
            K2 * r
        } else {
            K3 * r.sqrt()
        };

        Velocity::from_meters_per_sec(v)
    }

    /// True once a degenerate split has left no real droplets behind.
    pub fn is_exhausted(&self) -> bool {
        self.multiplicity == 0
    }

    /// Total order used to decide which pair member donates.
    ///
    /// Compares multiplicity first, then cubed radius, then solute mass.
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.multiplicity
            .cmp(&other.multiplicity)
            .then_with(|| self.rcubed.total_cmp(&other.rcubed))
            .then_with(|| self.solute.total_cmp(&other.solute))
    }
}
