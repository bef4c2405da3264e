//! Pair collision probabilities.
//!
//! Only ⌊N/2⌋ disjoint pairs are examined per step, out of N(N−1)/2 possible
//! pairs. Each sampled pair's probability is scaled up so the expected
//! number of collisions matches the full population.
//!
//! ```text
//! p = scaling × max(ξ_a, ξ_b) × (Δt / ΔV) × K(a, b)
//! scaling = (N (N − 1) / 2) / ⌊N / 2⌋
//! ```

use units::{Time, Volume};

use crate::collisions::CollisionKernel;
use crate::droplet::Droplet;

/// Unbiased pair-sampling factor for a population of `n_part` droplets.
///
/// # Panics
/// If `n_part < 2`; there is no pair to sample.
pub fn pair_scaling(n_part: usize) -> f64 {
    assert!(n_part >= 2, "pair scaling needs at least two droplets");

    let n = n_part as f64;
    (n * (n - 1.0) / 2.0) / (n_part / 2) as f64
}

/// Per-step inputs shared by every pair.
///
/// Built once per step so the scaling factor reflects the live population
/// size at the start of the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityParams {
    /// Collision timestep
    pub timestep: Time,
    /// Control volume the population is mixed in
    pub cell_volume: Volume,
    /// Pair-sampling factor from [`pair_scaling`]
    pub scaling: f64,
}

impl ProbabilityParams {
    pub fn new(n_part: usize, timestep: Time, cell_volume: Volume) -> Self {
        Self {
            timestep,
            cell_volume,
            scaling: pair_scaling(n_part),
        }
    }
}

/// Collision probability for one candidate pair.
///
/// The result is not clamped; values above 1 mean several real collisions
/// are expected per representative within the timestep.
pub fn collision_probability<K: CollisionKernel + ?Sized>(
    a: &Droplet,
    b: &Droplet,
    kernel: &K,
    params: &ProbabilityParams,
) -> f64 {
    let max_xi = a.multiplicity().max(b.multiplicity()) as f64;
    let t_over_v = params.timestep.to_seconds() / params.cell_volume.to_cubic_meters();

    params.scaling * max_xi * t_over_v * kernel.kernel(a, b)
}

/// Stochastically round a probability into a collision multiplicity γ.
///
/// The fractional part of `probability` is compared against the uniform
/// variate `phi`. A pair collides only when `frac(p) >= phi`, in which case
/// γ = ⌊p⌋ + 1. Otherwise the pair is left alone and `None` is returned.
///
/// # Examples
/// ```
/// use superdroplet::collisions::collision_multiplicity;
///
/// assert_eq!(collision_multiplicity(1.3, 0.2), Some(2));
/// assert_eq!(collision_multiplicity(1.3, 0.5), None);
/// ```
pub fn collision_multiplicity(probability: f64, phi: f64) -> Option<u64> {
    let whole = probability.floor();

    if probability - whole >= phi {
        Some((whole as u64).saturating_add(1))
    } else {
        None
    }
}
