//! Tests for the collision step pairing loop.

use std::collections::VecDeque;

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::{Mass, Time, Volume};

use crate::collisions::{CollisionKernel, Golovin, RandomSource, collision_step};
use crate::droplet::Droplet;
use crate::error::SuperdropletError;

/// Random source that keeps the order and replays scripted variates.
struct Scripted {
    variates: VecDeque<f64>,
}

impl Scripted {
    fn new(variates: &[f64]) -> Self {
        Self {
            variates: variates.iter().copied().collect(),
        }
    }
}

impl RandomSource for Scripted {
    fn shuffle(&mut self, _droplets: &mut [Droplet]) {}

    fn uniform(&mut self) -> f64 {
        self.variates.pop_front().expect("ran out of scripted variates")
    }
}

struct ConstantKernel(f64);

impl CollisionKernel for ConstantKernel {
    fn kernel(&self, _a: &Droplet, _b: &Droplet) -> f64 {
        self.0
    }
}

fn unit_step() -> (Time, Volume) {
    (Time::from_seconds(1.0), Volume::from_cubic_meters(1.0))
}

fn total_mass(droplets: &[Droplet]) -> f64 {
    droplets.iter().map(|d| d.total_mass().to_kg()).sum()
}

// =============================================================================
// Probability-driven decisions
// =============================================================================

#[test]
fn test_small_phi_triggers_collision_with_gamma_two() {
    let (dt, dv) = unit_step();
    let mut droplets = vec![
        Droplet::new(4, 1e-15, Mass::zero()),
        Droplet::new(1, 2e-15, Mass::zero()),
    ];
    // scaling = 1, max ξ = 4, so p = 4 × 0.325 = 1.3
    let kernel = ConstantKernel(0.325);

    let diagnostics =
        collision_step(&mut droplets, dt, dv, &kernel, &mut Scripted::new(&[0.2])).unwrap();

    assert_eq!(diagnostics.collisions, 1);
    assert_relative_eq!(diagnostics.max_probability, 1.3, max_relative = 1e-12);
    assert_eq!(diagnostics.big_probabilities, 1);

    // γ = 2 absorptions per k droplet: ξ_j 4 → 2, k grows by two j volumes
    assert_eq!(droplets[0].multiplicity(), 2);
    assert_eq!(droplets[1].multiplicity(), 1);
    assert_relative_eq!(droplets[1].rcubed(), 4e-15, max_relative = 1e-12);
}

#[test]
fn test_large_phi_leaves_pair_untouched() {
    let (dt, dv) = unit_step();
    let original = vec![
        Droplet::new(4, 1e-15, Mass::zero()),
        Droplet::new(1, 2e-15, Mass::zero()),
    ];
    let mut droplets = original.clone();

    let diagnostics = collision_step(
        &mut droplets,
        dt,
        dv,
        &ConstantKernel(0.325),
        &mut Scripted::new(&[0.5]),
    )
    .unwrap();

    assert_eq!(diagnostics.collisions, 0);
    assert_eq!(droplets, original);
}

#[test]
fn test_larger_rank_takes_donor_role_regardless_of_slot() {
    let (dt, dv) = unit_step();
    // Donor sits in the second slot
    let mut droplets = vec![
        Droplet::new(10, 8e-15, Mass::zero()),
        Droplet::new(100, 1e-15, Mass::zero()),
    ];

    collision_step(
        &mut droplets,
        dt,
        dv,
        &ConstantKernel(0.5),
        &mut Scripted::new(&[0.0]),
    )
    .unwrap();

    // p = 100 × 0.5 = 50 → γ = 51, capped at 10, donor exhausted.
    // The donor slot (index 1) receives the larger half.
    assert_eq!(droplets[1].multiplicity(), 5);
    assert_eq!(droplets[0].multiplicity(), 5);
    assert_relative_eq!(droplets[0].rcubed(), 1.8e-14, max_relative = 1e-12);
    assert_eq!(droplets[0].rcubed(), droplets[1].rcubed());
}

#[test]
fn test_pairs_use_half_offset_and_draw_in_order() {
    let (dt, dv) = unit_step();
    let mut droplets: Vec<Droplet> = (0..4)
        .map(|i| Droplet::new(2, (i + 1) as f64 * 1e-15, Mass::zero()))
        .collect();

    // scaling(4) = 3, ξ = 2, K = 0.05 → p = 0.3 per pair.
    // Pair 0 (slots 0, 2) collides; pair 1 (slots 1, 3) does not.
    let diagnostics = collision_step(
        &mut droplets,
        dt,
        dv,
        &ConstantKernel(0.05),
        &mut Scripted::new(&[0.1, 0.9]),
    )
    .unwrap();

    assert_eq!(diagnostics.pairs, 2);
    assert_eq!(diagnostics.collisions, 1);
    assert_eq!(diagnostics.big_probabilities, 0);

    // Slot 2 outranks slot 0 (same ξ, larger r³), so it donates
    assert_eq!(droplets[0].multiplicity(), 1);
    assert_eq!(droplets[2].multiplicity(), 1);
    assert_relative_eq!(droplets[0].rcubed(), 4e-15, max_relative = 1e-12);

    assert_eq!(droplets[1].multiplicity(), 2);
    assert_eq!(droplets[3].multiplicity(), 2);
    assert_relative_eq!(droplets[1].rcubed(), 2e-15);
}

#[test]
fn test_odd_population_leaves_last_slot_alone() {
    let (dt, dv) = unit_step();
    let mut droplets: Vec<Droplet> = (0..5)
        .map(|_| Droplet::new(4, 1e-15, Mass::zero()))
        .collect();

    let diagnostics = collision_step(
        &mut droplets,
        dt,
        dv,
        &ConstantKernel(1.0),
        &mut Scripted::new(&[0.0, 0.0]),
    )
    .unwrap();

    assert_eq!(diagnostics.pairs, 2);
    assert_eq!(diagnostics.collisions, 2);
    assert_eq!(droplets[4], Droplet::new(4, 1e-15, Mass::zero()));
}

#[test]
fn test_degenerate_split_is_reported() {
    let (dt, dv) = unit_step();
    let mut droplets = vec![
        Droplet::new(1, 1e-15, Mass::zero()),
        Droplet::new(1, 1e-15, Mass::zero()),
    ];

    let diagnostics = collision_step(
        &mut droplets,
        dt,
        dv,
        &ConstantKernel(0.5),
        &mut Scripted::new(&[0.0]),
    )
    .unwrap();

    assert_eq!(diagnostics.degenerate_splits, 1);
    assert_eq!(droplets.iter().filter(|d| d.is_exhausted()).count(), 1);
}

// =============================================================================
// Preconditions
// =============================================================================

#[test]
fn test_single_droplet_is_rejected() {
    let (dt, dv) = unit_step();
    let mut droplets = vec![Droplet::new(1, 1e-15, Mass::zero())];

    let result = collision_step(
        &mut droplets,
        dt,
        dv,
        &Golovin::default(),
        &mut Scripted::new(&[]),
    );

    assert!(matches!(
        result,
        Err(SuperdropletError::InvalidPopulation { .. })
    ));
}

#[test]
fn test_zero_multiplicity_is_rejected_before_shuffling() {
    let (dt, dv) = unit_step();
    let original = vec![
        Droplet::new(3, 1e-15, Mass::zero()),
        Droplet::new(1, 1e-15, Mass::zero()).replaced(0, 1e-15, 0.0),
        Droplet::new(2, 1e-15, Mass::zero()),
    ];
    let mut droplets = original.clone();
    let mut rng = ChaChaRng::seed_from_u64(1);

    let result = collision_step(&mut droplets, dt, dv, &Golovin::default(), &mut rng);

    assert!(matches!(
        result,
        Err(SuperdropletError::InvalidPopulation { .. })
    ));
    assert_eq!(droplets, original);
}

#[test]
fn test_non_positive_timestep_or_volume_is_rejected() {
    let mut droplets = vec![
        Droplet::new(3, 1e-15, Mass::zero()),
        Droplet::new(2, 1e-15, Mass::zero()),
    ];
    let golovin = Golovin::default();
    let mut rng = ChaChaRng::seed_from_u64(1);

    let zero_dt = collision_step(
        &mut droplets,
        Time::zero(),
        Volume::from_cubic_meters(1.0),
        &golovin,
        &mut rng,
    );
    let zero_dv = collision_step(
        &mut droplets,
        Time::from_seconds(1.0),
        Volume::zero(),
        &golovin,
        &mut rng,
    );

    assert!(zero_dt.is_err());
    assert!(zero_dv.is_err());
}

// =============================================================================
// Seeded behaviour
// =============================================================================

fn seeded_population() -> Vec<Droplet> {
    (0..64)
        .map(|i| Droplet::new(1_000 + i, (1.0 + i as f64) * 1e-15, Mass::from_kg(1e-19)))
        .collect()
}

#[test]
fn test_step_conserves_mass_and_length() {
    let mut droplets = seeded_population();
    let initial_mass = total_mass(&droplets);
    let mut rng = ChaChaRng::seed_from_u64(7);

    for _ in 0..20 {
        collision_step(
            &mut droplets,
            Time::from_seconds(1.0),
            Volume::from_cubic_meters(1e3),
            &Golovin::default(),
            &mut rng,
        )
        .unwrap();
    }

    assert_eq!(droplets.len(), 64);
    assert_relative_eq!(total_mass(&droplets), initial_mass, max_relative = 1e-10);
}

#[test]
fn test_same_seed_reproduces_step() {
    let run = |seed| {
        let mut droplets = seeded_population();
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let diagnostics = collision_step(
            &mut droplets,
            Time::from_seconds(1.0),
            Volume::from_cubic_meters(1e3),
            &Golovin::default(),
            &mut rng,
        )
        .unwrap();
        (droplets, diagnostics)
    };

    assert_eq!(run(11), run(11));
}
