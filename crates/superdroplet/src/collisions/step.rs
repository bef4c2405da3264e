//! One Monte Carlo collision step over a well-mixed cell.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, trace, warn};
use units::{Time, Volume};

use crate::collisions::{
    CollisionKernel, ProbabilityParams, RandomSource, coalesce, collision_multiplicity,
    collision_probability,
};
use crate::droplet::Droplet;
use crate::error::SuperdropletError;

/// What happened during one collision step.
///
/// Purely observational: nothing in the algorithm reads these back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepDiagnostics {
    /// Candidate pairs examined (⌊N/2⌋)
    pub pairs: usize,
    /// Pairs that coalesced
    pub collisions: usize,
    /// Smallest pair probability seen
    pub min_probability: f64,
    /// Largest pair probability seen
    pub max_probability: f64,
    /// Pairs whose probability exceeded 1
    ///
    /// A non-zero count means the timestep is long relative to the
    /// collision rate.
    pub big_probabilities: usize,
    /// Coalescences that left a zero-multiplicity representative behind
    pub degenerate_splits: usize,
}

impl StepDiagnostics {
    fn new(pairs: usize) -> Self {
        Self {
            pairs,
            collisions: 0,
            min_probability: f64::INFINITY,
            max_probability: 0.0,
            big_probabilities: 0,
            degenerate_splits: 0,
        }
    }

    fn record_probability(&mut self, probability: f64) {
        self.min_probability = self.min_probability.min(probability);
        self.max_probability = self.max_probability.max(probability);
        if probability > 1.0 {
            self.big_probabilities += 1;
        }
    }
}

/// Check the preconditions of [`collision_step`].
pub fn validate_population(
    droplets: &[Droplet],
    timestep: Time,
    cell_volume: Volume,
) -> Result<(), SuperdropletError> {
    if droplets.len() < 2 {
        return Err(SuperdropletError::invalid_population(format!(
            "need at least 2 droplets, got {}",
            droplets.len()
        )));
    }

    let dt = timestep.to_seconds();
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SuperdropletError::invalid_population(format!(
            "timestep must be positive, got {dt} s"
        )));
    }

    let dv = cell_volume.to_cubic_meters();
    if !(dv.is_finite() && dv > 0.0) {
        return Err(SuperdropletError::invalid_population(format!(
            "cell volume must be positive, got {dv} m³"
        )));
    }

    if let Some(idx) = droplets.iter().position(Droplet::is_exhausted) {
        return Err(SuperdropletError::invalid_population(format!(
            "droplet {idx} has zero multiplicity"
        )));
    }

    Ok(())
}

/// Advance a droplet population through one collision timestep.
///
/// 1. Shuffle the population.
/// 2. Pair slot `i` with slot `i + N/2` for `i < N/2` (an odd droplet out
///    sits this step out).
/// 3. For each pair, in index order, draw φ, evaluate the kernel and the
///    scaled probability, and coalesce if `frac(p) >= φ`.
///
/// Colliding slots are overwritten with the two new states; the population
/// length never changes. The higher-ranked member of a pair always takes
/// the donor role.
///
/// # Errors
/// [`SuperdropletError::InvalidPopulation`] if there are fewer than two
/// droplets, any multiplicity is zero, or `timestep`/`cell_volume` are not
/// positive. The population is untouched in that case.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use superdroplet::{Droplet, Golovin, collision_step};
/// use units::{Mass, Time, Volume};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let mut droplets: Vec<Droplet> = (1..=8)
///     .map(|i| Droplet::new(1_000, i as f64 * 1e-15, Mass::zero()))
///     .collect();
///
/// let diagnostics = collision_step(
///     &mut droplets,
///     Time::from_seconds(1.0),
///     Volume::from_cubic_meters(1e6),
///     &Golovin::default(),
///     &mut rng,
/// )
/// .unwrap();
///
/// assert_eq!(diagnostics.pairs, 4);
/// assert_eq!(droplets.len(), 8);
/// ```
pub fn collision_step<K, R>(
    droplets: &mut [Droplet],
    timestep: Time,
    cell_volume: Volume,
    kernel: &K,
    rng: &mut R,
) -> Result<StepDiagnostics, SuperdropletError>
where
    K: CollisionKernel + ?Sized,
    R: RandomSource + ?Sized,
{
    validate_population(droplets, timestep, cell_volume)?;

    let n_part = droplets.len();
    let half = n_part / 2;

    rng.shuffle(droplets);

    let params = ProbabilityParams::new(n_part, timestep, cell_volume);
    let mut diagnostics = StepDiagnostics::new(half);

    let (front, back) = droplets.split_at_mut(half);

    for (i, (a, b)) in front.iter_mut().zip(back.iter_mut()).enumerate() {
        let phi = rng.uniform();
        let probability = collision_probability(a, b, kernel, &params);
        diagnostics.record_probability(probability);

        let Some(gamma) = collision_multiplicity(probability, phi) else {
            continue;
        };

        if a.cmp_rank(b) == Ordering::Less {
            let (new_j, new_k) = coalesce(b, a, gamma);
            *b = new_j;
            *a = new_k;
        } else {
            let (new_j, new_k) = coalesce(a, b, gamma);
            *a = new_j;
            *b = new_k;
        }

        if a.is_exhausted() || b.is_exhausted() {
            diagnostics.degenerate_splits += 1;
        }
        diagnostics.collisions += 1;

        trace!(
            pair = i,
            probability,
            gamma,
            multiplicity_a = a.multiplicity(),
            multiplicity_b = b.multiplicity(),
            "coalesced"
        );
    }

    debug!(
        pairs = diagnostics.pairs,
        collisions = diagnostics.collisions,
        min_probability = diagnostics.min_probability,
        max_probability = diagnostics.max_probability,
        big_probabilities = diagnostics.big_probabilities,
        "collision step complete"
    );

    if diagnostics.big_probabilities > 0 {
        warn!(
            count = diagnostics.big_probabilities,
            max_probability = diagnostics.max_probability,
            "pair probabilities exceeded 1; consider a shorter timestep"
        );
    }

    if diagnostics.degenerate_splits > 0 {
        warn!(
            count = diagnostics.degenerate_splits,
            "coalescence left zero-multiplicity droplets; prune before the next step"
        );
    }

    Ok(diagnostics)
}
