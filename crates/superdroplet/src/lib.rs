//! Monte Carlo superdroplet coalescence.
//!
//! Each [`Droplet`] is a weighted representative standing in for many
//! identical real cloud droplets. One call to [`collision_step`] pairs the
//! representatives at random, turns a collision kernel into per-pair
//! probabilities, and merges the pairs that collide while conserving the
//! liquid water they carry.
//!
//! # Physics
//!
//! For a pair (j, k) in a cell of volume ΔV over a timestep Δt:
//!
//! ```text
//! p = [N(N−1)/2 / ⌊N/2⌋] × max(ξ_j, ξ_k) × (Δt / ΔV) × K(j, k)
//! ```
//!
//! The fractional part of `p` is compared against one uniform variate; on a
//! hit, `⌊p⌋ + 1` real collisions are resolved by the multiplicity-splitting
//! rule of Shima et al. (2009).
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaChaRng;
//! use superdroplet::{Case, Golovin, collision_step, exponential_population, remove_exhausted};
//! use units::{Time, Volume};
//!
//! let case = Case::named("shima_golo").unwrap();
//! let volume = Volume::from_cubic_meters(1.0);
//! let mut rng = ChaChaRng::seed_from_u64(42);
//! let mut droplets = exponential_population(&case, 256, volume, &mut rng).unwrap();
//!
//! for _ in 0..10 {
//!     collision_step(&mut droplets, Time::from_seconds(1.0), volume, &Golovin::default(), &mut rng)
//!         .unwrap();
//!     remove_exhausted(&mut droplets);
//! }
//! ```
//!
//! # References
//! - Shima et al. (2009) - The super-droplet method for the numerical
//!   simulation of clouds and precipitation

pub mod cases;
pub mod collisions;
pub mod config;
pub mod constants;
pub mod droplet;
pub mod error;
pub mod population;


pub use cases::Case;
pub use collisions::{CollisionKernel, Golovin, RandomSource, StepDiagnostics, collision_step};
pub use config::SimulationConfig;
pub use droplet::Droplet;
pub use error::SuperdropletError;
pub use population::{
    exponential_population, mass_weighted_radius, remove_exhausted, total_multiplicity,
    total_water_mass,
};
