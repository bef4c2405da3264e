//! Multiplicity-splitting coalescence of two superdroplets.
//!
//! When a pair collides with multiplicity γ, each of the ξ_k real droplets
//! of `k` absorbs γ̃ real droplets of `j`:
//!
//! ```text
//! γ̃      = min(γ, ⌊ξ_j / ξ_k⌋)
//! excess = ξ_j − γ̃ ξ_k
//! ```
//!
//! If `j` has droplets left over (`excess > 0`) it keeps them unchanged and
//! `k` grows in place. Otherwise `j` is used up and the merged droplets of
//! `k` are split across both slots so the number of representatives stays
//! constant.
//!
//! Merged droplets take the volume-weighted density
//! `(γ̃ ρ_j r_j³ + ρ_k r_k³) / r'³`, so both branches conserve the total
//! mass of the pair: `ξ_j m_j + ξ_k m_k` before equals the sum over the two
//! results after.
//!
//! # References
//! - Shima et al. (2009) - The super-droplet method, Section 5.1.3

use crate::droplet::Droplet;

/// Coalesce `sd_j` into `sd_k` with collision multiplicity `gamma`.
///
/// `sd_j` takes the donor role and should rank at or above `sd_k` (see
/// [`Droplet::cmp_rank`]). Returns the new `(j, k)` states.
///
/// When `j` is exhausted and `ξ_k = 1`, the split leaves the `k` result with
/// zero multiplicity. The caller is expected to prune such entries before
/// the next step.
///
/// # Panics
/// If `sd_k` has zero multiplicity.
///
/// # Examples
/// ```
/// use superdroplet::collisions::coalesce;
/// use superdroplet::Droplet;
/// use units::Mass;
///
/// let j = Droplet::new(100, 1e-15, Mass::zero());
/// let k = Droplet::new(10, 8e-15, Mass::zero());
///
/// // γ is capped at ⌊100 / 10⌋ = 10, which uses up all of j
/// let (new_j, new_k) = coalesce(&j, &k, 50);
/// assert_eq!(new_j.multiplicity() + new_k.multiplicity(), 10);
/// assert_eq!(new_j.rcubed(), new_k.rcubed());
/// ```
pub fn coalesce(sd_j: &Droplet, sd_k: &Droplet, gamma: u64) -> (Droplet, Droplet) {
    let xi_j = sd_j.multiplicity();
    let xi_k = sd_k.multiplicity();

    assert!(xi_k > 0, "coalescence target must have a non-zero multiplicity");

    let gamma_tilde = gamma.min(xi_j / xi_k);
    // γ̃ ≤ ⌊ξ_j / ξ_k⌋, so this never underflows
    let excess = xi_j - gamma_tilde * xi_k;
    let g = gamma_tilde as f64;

    let rcubed_merged = g * sd_j.rcubed() + sd_k.rcubed();
    let solute_merged = g * sd_j.solute().to_kg() + sd_k.solute().to_kg();
    let density_merged = merged_density(sd_j, sd_k, g, rcubed_merged);

    if excess > 0 {
        let new_j = sd_j.replaced(excess, sd_j.rcubed(), sd_j.solute().to_kg());
        let new_k =
            sd_k.replaced_with_density(xi_k, rcubed_merged, solute_merged, density_merged);

        (new_j, new_k)
    } else {
        let half_k = xi_k / 2;
        let other_half = xi_k - half_k;

        // The larger half lands in the j slot
        let new_j =
            sd_k.replaced_with_density(other_half, rcubed_merged, solute_merged, density_merged);
        let new_k =
            sd_k.replaced_with_density(half_k, rcubed_merged, solute_merged, density_merged);

        (new_j, new_k)
    }
}

/// Liquid density of `k` after absorbing `g` droplets of `j` (kg/m³).
fn merged_density(sd_j: &Droplet, sd_k: &Droplet, g: f64, rcubed_merged: f64) -> f64 {
    let rho_j = sd_j.density().to_kg_per_m3();
    let rho_k = sd_k.density().to_kg_per_m3();

    // Nothing to mix: keep k's density bit for bit
    if g == 0.0 || rho_j == rho_k || rcubed_merged == 0.0 {
        return rho_k;
    }

    (g * rho_j * sd_j.rcubed() + rho_k * sd_k.rcubed()) / rcubed_merged
}
