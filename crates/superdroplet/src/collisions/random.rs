//! Randomness consumed by the collision step.

use rand::Rng;
use rand::seq::SliceRandom;
use rand_chacha::ChaChaRng;

use crate::droplet::Droplet;

/// Permutation and uniform-variate services for one collision step.
///
/// The step shuffles once, then draws exactly one variate per candidate
/// pair in pair-index order. Replaying the same source therefore replays
/// the same step.
pub trait RandomSource {
    /// Uniformly permute the population in place.
    fn shuffle(&mut self, droplets: &mut [Droplet]);

    /// One independent sample from U[0, 1).
    fn uniform(&mut self) -> f64;
}

impl RandomSource for ChaChaRng {
    fn shuffle(&mut self, droplets: &mut [Droplet]) {
        droplets.shuffle(self);
    }

    fn uniform(&mut self) -> f64 {
        self.random::<f64>()
    }
}
