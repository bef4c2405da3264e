//! Box-model coalescence run
//!
//! Samples an exponential droplet population for a named case, then steps
//! it forward with the Golovin kernel, pruning exhausted superdroplets and
//! reporting water mass and drop growth at each output interval.
//!
//! Run with: cargo run --package superdroplet --example golovin_box -- [config.json] [--verbose]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use units::Time;

use superdroplet::{
    SimulationConfig, collision_step, exponential_population, mass_weighted_radius,
    remove_exhausted, total_multiplicity, total_water_mass,
};

#[derive(Parser)]
#[command(about = "Superdroplet coalescence in a well-mixed box")]
struct Cli {
    /// JSON configuration file; defaults are used when omitted
    config: Option<PathBuf>,

    /// Log every collision step
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &cli.config {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };
    let case = config.case()?;
    let kernel = config.kernel();
    let duration = config.duration(&case);
    let mut rng = ChaChaRng::seed_from_u64(config.seed);

    let mut droplets =
        exponential_population(&case, config.n_superdroplets, config.cell_volume, &mut rng)?;
    let initial_mass = total_water_mass(&droplets);

    info!(
        case = case.name,
        n_superdroplets = droplets.len(),
        real_droplets = total_multiplicity(&droplets),
        water_g = initial_mass.to_grams(),
        "initial population"
    );

    let mut t = Time::zero();
    let mut next_output = case.plot_dt;
    let mut collisions = 0;
    let mut pruned = 0;

    while t < duration && droplets.len() >= 2 {
        let diagnostics = collision_step(
            &mut droplets,
            config.timestep,
            config.cell_volume,
            &kernel,
            &mut rng,
        )?;
        collisions += diagnostics.collisions;
        pruned += remove_exhausted(&mut droplets);
        t = t + config.timestep;

        if t >= next_output {
            let mass = total_water_mass(&droplets);
            info!(
                minutes = t.to_minutes(),
                n_superdroplets = droplets.len(),
                real_droplets = total_multiplicity(&droplets),
                radius_um = mass_weighted_radius(&droplets).to_microns(),
                mass_drift = (mass - initial_mass) / initial_mass,
                collisions,
                pruned,
                "snapshot"
            );
            next_output = next_output + case.plot_dt;
        }
    }

    info!(
        minutes = t.to_minutes(),
        collisions,
        pruned,
        "run complete"
    );

    Ok(())
}
