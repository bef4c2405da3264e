//! Tests for pair probabilities and the collision-count draw.

use approx::assert_relative_eq;
use units::{Mass, Time, Volume};

use crate::collisions::{
    CollisionKernel, Golovin, ProbabilityParams, collision_multiplicity, collision_probability,
    pair_scaling,
};
use crate::droplet::Droplet;

/// Kernel with a fixed value, for pinning probabilities exactly.
struct ConstantKernel(f64);

impl CollisionKernel for ConstantKernel {
    fn kernel(&self, _a: &Droplet, _b: &Droplet) -> f64 {
        self.0
    }
}

fn unit_droplet(multiplicity: u64) -> Droplet {
    Droplet::new(multiplicity, 1e-15, Mass::zero())
}

// =============================================================================
// Scaling
// =============================================================================

#[test]
fn test_scaling_for_one_thousand_droplets() {
    assert_eq!(pair_scaling(1000), 999.0);
}

#[test]
fn test_scaling_for_a_single_pair_is_one() {
    assert_eq!(pair_scaling(2), 1.0);
}

#[test]
fn test_scaling_uses_floor_of_half_for_odd_populations() {
    // 5 droplets: 10 possible pairs, 2 sampled
    assert_eq!(pair_scaling(5), 5.0);
}

#[test]
#[should_panic(expected = "at least two droplets")]
fn test_scaling_rejects_single_droplet() {
    pair_scaling(1);
}

// =============================================================================
// Probability
// =============================================================================

#[test]
fn test_probability_uses_larger_multiplicity() {
    let params = ProbabilityParams::new(2, Time::from_seconds(1.0), Volume::from_cubic_meters(1.0));
    let kernel = ConstantKernel(0.5);

    let p = collision_probability(&unit_droplet(3), &unit_droplet(8), &kernel, &params);

    assert_relative_eq!(p, 8.0 * 0.5);
}

#[test]
fn test_probability_is_linear_in_timestep_and_inverse_in_volume() {
    let kernel = Golovin::default();
    let a = unit_droplet(100);
    let b = unit_droplet(10);

    let base = ProbabilityParams::new(100, Time::from_seconds(1.0), Volume::from_cubic_meters(1.0));
    let longer = ProbabilityParams::new(100, Time::from_seconds(2.0), Volume::from_cubic_meters(1.0));
    let bigger = ProbabilityParams::new(100, Time::from_seconds(1.0), Volume::from_cubic_meters(4.0));

    let p = collision_probability(&a, &b, &kernel, &base);
    assert_relative_eq!(
        collision_probability(&a, &b, &kernel, &longer),
        2.0 * p,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        collision_probability(&a, &b, &kernel, &bigger),
        p / 4.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_probability_includes_pair_scaling() {
    let kernel = ConstantKernel(1e-3);
    let params = ProbabilityParams::new(1000, Time::from_seconds(1.0), Volume::from_cubic_meters(1.0));

    let p = collision_probability(&unit_droplet(1), &unit_droplet(1), &kernel, &params);

    assert_relative_eq!(p, 999.0 * 1e-3, max_relative = 1e-12);
}

// =============================================================================
// Collision-count draw
// =============================================================================

#[test]
fn test_probability_of_one_point_three_collides_for_small_phi() {
    let params = ProbabilityParams::new(2, Time::from_seconds(1.0), Volume::from_cubic_meters(1.0));
    let p = collision_probability(
        &unit_droplet(1),
        &unit_droplet(1),
        &ConstantKernel(1.3),
        &params,
    );

    assert_eq!(p, 1.3);
    assert_eq!(collision_multiplicity(p, 0.2), Some(2));
    assert_eq!(collision_multiplicity(p, 0.5), None);
}

#[test]
fn test_small_probability_collides_once() {
    assert_eq!(collision_multiplicity(0.25, 0.1), Some(1));
    assert_eq!(collision_multiplicity(0.25, 0.9), None);
}

#[test]
fn test_fraction_equal_to_phi_collides() {
    assert_eq!(collision_multiplicity(2.5, 0.5), Some(3));
}

#[test]
fn test_integral_probability_only_collides_on_zero_phi() {
    // The fractional part is zero, so only φ = 0 passes the comparison
    assert_eq!(collision_multiplicity(3.0, 0.0), Some(4));
    assert_eq!(collision_multiplicity(3.0, 0.01), None);
}

#[test]
fn test_huge_probability_saturates() {
    assert_eq!(collision_multiplicity(1e30, 0.0), Some(u64::MAX));
}
