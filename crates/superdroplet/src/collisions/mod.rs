//! Stochastic collision and coalescence of superdroplets
//!
//! This module provides the pieces of one Monte Carlo collision step:
//! kernels, pair probabilities, multiplicity-splitting coalescence, and the
//! pairing loop that ties them together.

pub mod coalescence;
pub mod kernel;
pub mod probability;
pub mod random;
pub mod step;

#[cfg(test)]
mod probability_test;
#[cfg(test)]
mod step_test;

pub use coalescence::coalesce;
pub use kernel::{CollisionKernel, Golovin};
pub use probability::{
    ProbabilityParams, collision_multiplicity, collision_probability, pair_scaling,
};
pub use random::RandomSource;
pub use step::{StepDiagnostics, collision_step, validate_population};
