//! Collision kernels.
//!
//! A kernel K(a, b) is the rate coefficient (m³/s) for one real droplet of
//! `a` colliding with one real droplet of `b`. Kernels are strategies: the
//! collision step is generic over [`CollisionKernel`], so alternative
//! physics plugs in without touching the pairing loop.

use crate::constants::{GOLOVIN_B, PI};
use crate::droplet::Droplet;

/// A collision-rate kernel for a pair of droplets.
///
/// Implementations must be pure and return a non-negative value that
/// depends only on the physical state of each droplet, not on argument
/// order.
///
/// # Examples
///
/// ```
/// use superdroplet::{CollisionKernel, Droplet, Golovin};
/// use units::Mass;
///
/// let a = Droplet::new(1, 1e-15, Mass::zero());
/// let b = Droplet::new(1, 8e-15, Mass::zero());
///
/// let golovin = Golovin::default();
/// assert_eq!(golovin.kernel(&a, &b), golovin.kernel(&b, &a));
/// ```
pub trait CollisionKernel: Send + Sync {
    /// Kernel value for the ordered pair (a, b).
    fn kernel(&self, a: &Droplet, b: &Droplet) -> f64;
}

/// The Golovin (sum-of-volumes) kernel.
///
/// ```text
/// K(a, b) = B × (r_a³ + r_b³) × 4π/3
/// ```
///
/// Linear in the volume sum, which makes the Smoluchowski equation
/// analytically solvable for an exponential initial distribution.
///
/// # References
/// - Golovin (1963) - Solution of the coagulation equation
/// - Shima et al. (2009) - The super-droplet method
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Golovin {
    b: f64,
}

impl Golovin {
    /// Golovin kernel with coefficient `b` (s⁻¹).
    pub fn new(b: f64) -> Self {
        assert!(b >= 0.0, "Golovin coefficient must be non-negative");
        Self { b }
    }

    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Default for Golovin {
    fn default() -> Self {
        Self::new(GOLOVIN_B)
    }
}

impl CollisionKernel for Golovin {
    fn kernel(&self, a: &Droplet, b: &Droplet) -> f64 {
        // The stored cubed radius is already the r³ term
        self.b * (a.rcubed() + b.rcubed()) * 4.0 * PI / 3.0
    }
}
