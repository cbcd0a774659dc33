//! Emergent behavior of colored particles
//!
//! Runs the simulation headless and reports the overlay through the log.

mod overlay;

use emergence_physics::{constants, NeighborSelection, RuleTable, Vector2};
use emergence_simulation::{BoundaryMode, IntegrationMethod, Simulation, SimulationConfig};
use overlay::OverlaySink;
use std::time::Duration;

const PARTICLE_COUNT: usize = 1500;
const TICKS: u64 = 2_000;
const METHOD: IntegrationMethod = IntegrationMethod::Leapfrog;
const BOUNDARY: BoundaryMode = BoundaryMode::Reflect;
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

fn main() {
    // Initialize logger (RUST_LOG=debug for per-tick reports)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting emergence simulation...");

    let config = SimulationConfig {
        population_size: PARTICLE_COUNT,
        domain_min: Vector2::ZERO,
        domain_max: Vector2::new(constants::DOMAIN_WIDTH, constants::DOMAIN_HEIGHT),
        time_delta: constants::TIME_DELTA,
        method: METHOD,
        boundary: BOUNDARY,
        rules: RuleTable::default(),
        neighbors: NeighborSelection::All,
        ..Default::default()
    };

    let mut simulation = match Simulation::from_config(config) {
        Ok(simulation) => simulation,
        Err(err) => {
            log::error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    log::info!("✓ Simulation initialized ({:?})", simulation.method());

    let mut overlay = OverlaySink::new(REPORT_INTERVAL);
    let report = simulation.run(TICKS, &mut overlay);

    log::info!(
        "✓ Finished {} ticks ({} force errors, {} resets)",
        report.tick,
        report.force_errors,
        report.resets
    );
}
