use emergence_physics::PhysicsError;
use thiserror::Error;

/// Rejected startup configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("domain is empty: min {min:?} is not below max {max:?}")]
    EmptyDomain { min: [f64; 2], max: [f64; 2] },

    #[error("spawn velocity range must be finite and non-negative, got {0}")]
    SpawnVelocity(f64),

    #[error("particle {index} has radius {radius}, expected a finite positive value")]
    ParticleRadius { index: usize, radius: f64 },

    #[error(transparent)]
    Rules(#[from] PhysicsError),
}
