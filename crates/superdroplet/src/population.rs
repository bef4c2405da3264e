//! Helpers for the driver that owns a droplet population across steps.
//!
//! The collision step never changes the number of representatives. Sampling
//! the initial population, dropping exhausted entries between steps, and
//! bookkeeping totals all happen here, on the driver's side of that
//! boundary.

use rand::Rng;
use rand_chacha::ChaChaRng;
use tracing::debug;
use units::{Length, Mass, Volume};

use crate::cases::Case;
use crate::constants::SPHERE_FACTOR;
use crate::droplet::Droplet;
use crate::error::SuperdropletError;

/// Sample `n_sd` superdroplets from a case's exponential distribution.
///
/// Drop volumes are drawn from `x = −X₀ ln(1 − u)`. Every superdroplet gets
/// the same multiplicity, `round(n_0 ΔV / n_sd)` (at least 1), so the
/// population represents the case's number density inside `cell_volume`.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use superdroplet::{Case, exponential_population};
/// use units::Volume;
///
/// let case = Case::named("shima_golo").unwrap();
/// let mut rng = ChaChaRng::seed_from_u64(42);
///
/// let droplets =
///     exponential_population(&case, 1024, Volume::from_cubic_meters(1.0), &mut rng).unwrap();
/// assert_eq!(droplets.len(), 1024);
/// assert_eq!(droplets[0].multiplicity(), 8192);
/// ```
pub fn exponential_population(
    case: &Case,
    n_sd: usize,
    cell_volume: Volume,
    rng: &mut ChaChaRng,
) -> Result<Vec<Droplet>, SuperdropletError> {
    if n_sd < 2 {
        return Err(SuperdropletError::invalid_population(format!(
            "need at least 2 superdroplets, got {n_sd}"
        )));
    }

    let real_droplets = case.n_0 * cell_volume.to_cubic_meters();
    let multiplicity = (real_droplets / n_sd as f64).round().max(1.0) as u64;
    let x_0 = case.x_0.to_cubic_meters();

    let droplets: Vec<Droplet> = (0..n_sd)
        .map(|_| {
            let u: f64 = rng.random();
            let x = -x_0 * (1.0 - u).ln();
            Droplet::new(multiplicity, x / SPHERE_FACTOR, Mass::zero())
        })
        .collect();

    debug!(
        case = case.name,
        n_sd,
        multiplicity,
        "sampled exponential population"
    );

    Ok(droplets)
}

/// Drop zero-multiplicity entries left behind by degenerate splits.
///
/// Returns the number of entries removed.
pub fn remove_exhausted(droplets: &mut Vec<Droplet>) -> usize {
    let before = droplets.len();
    droplets.retain(|d| !d.is_exhausted());
    before - droplets.len()
}

/// Total mass of real droplets represented by the population.
pub fn total_water_mass(droplets: &[Droplet]) -> Mass {
    droplets.iter().map(Droplet::total_mass).sum()
}

/// Total number of real droplets represented by the population.
pub fn total_multiplicity(droplets: &[Droplet]) -> u64 {
    droplets.iter().map(Droplet::multiplicity).sum()
}

/// Mass-weighted mean radius, Σ ξ m r / Σ ξ m.
///
/// Tracks where the liquid water sits as coalescence moves it into larger
/// drops. Zero for an empty or massless population.
pub fn mass_weighted_radius(droplets: &[Droplet]) -> Length {
    let (weighted, total) = droplets.iter().fold((0.0, 0.0), |(w, t), d| {
        let m = d.total_mass().to_kg();
        (w + m * d.radius().to_meters(), t + m)
    });

    if total > 0.0 {
        Length::from_meters(weighted / total)
    } else {
        Length::zero()
    }
}
