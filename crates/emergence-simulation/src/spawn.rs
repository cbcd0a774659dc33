//! Initial populations

use crate::config::SimulationConfig;
use emergence_physics::{Particle, Species, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generator for the configured seed, or an OS-seeded one
pub fn spawn_rng(config: &SimulationConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// `config.population_size` particles uniformly spread over the domain with
/// random species and velocities in `±spawn_speed`.
///
/// Expects a validated config.
pub fn spawn_population<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Vec<Particle> {
    let (min, max) = (config.domain_min, config.domain_max);
    let speed = config.spawn_speed;

    (0..config.population_size)
        .map(|_| {
            let position = Vector2::new(
                rng.random_range(min.x..max.x),
                rng.random_range(min.y..max.y),
            );
            let velocity = Vector2::new(
                rng.random_range(-speed..=speed),
                rng.random_range(-speed..=speed),
            );
            let species = Species::ALL[rng.random_range(0..Species::COUNT)];
            Particle::with_velocity(position, velocity, species).with_radius(config.radius)
        })
        .collect()
}
