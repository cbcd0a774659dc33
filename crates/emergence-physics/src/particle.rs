//! Particle species and per-particle state

use crate::constants::DEFAULT_RADIUS;
use crate::vector::Vector2;

/// Interaction species of a particle.
///
/// Selects the row (and column) of the rule table. The default palette maps
/// them to red, green, blue and magenta.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
}

impl Species {
    pub const COUNT: usize = 4;
    pub const ALL: [Species; Species::COUNT] = [Species::A, Species::B, Species::C, Species::D];

    /// Row/column index in the rule table
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A point particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    /// Total force from the current tick
    pub force: Vector2,
    /// Total force from the tick before, read by the leapfrog integrator
    pub previous_force: Vector2,
    species: Species,
    radius: f64,
}

impl Particle {
    /// Create a particle at rest with the default radius
    pub fn new(position: Vector2, species: Species) -> Self {
        Self::with_velocity(position, Vector2::ZERO, species)
    }

    pub fn with_velocity(position: Vector2, velocity: Vector2, species: Species) -> Self {
        Self {
            position,
            velocity,
            force: Vector2::ZERO,
            previous_force: Vector2::ZERO,
            species,
            radius: DEFAULT_RADIUS,
        }
    }

    /// Replace the radius. Only meaningful before the particle joins a simulation.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[inline]
    pub fn species(&self) -> Species {
        self.species
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Name of the first non-finite quantity, if any
    pub fn non_finite_quantity(&self) -> Option<&'static str> {
        if !self.position.is_finite() {
            Some("position")
        } else if !self.velocity.is_finite() {
            Some("velocity")
        } else if !self.force.is_finite() {
            Some("force")
        } else if !self.previous_force.is_finite() {
            Some("previous force")
        } else {
            None
        }
    }
}
