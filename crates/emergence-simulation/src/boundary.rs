//! Domain edges and the velocity limit

use emergence_physics::{Particle, Vector2};

/// What happens to a particle that leaves the domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryMode {
    /// Clamp just inside the crossed edge and negate that velocity axis
    #[default]
    Reflect,
    /// Teleport just inside the opposite edge, velocity unchanged
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPolicy {
    pub mode: BoundaryMode,
    pub min: Vector2,
    pub max: Vector2,
    /// Inset from the edge a corrected position lands at
    pub epsilon: f64,
    pub max_velocity: f64,
}

impl BoundaryPolicy {
    /// Correct the position per axis, then saturate the velocity
    pub fn enforce(&self, particle: &mut Particle) {
        for axis in 0..2 {
            let position = particle.position[axis];
            let (min, max) = (self.min[axis], self.max[axis]);

            match self.mode {
                BoundaryMode::Reflect => {
                    if position < min {
                        particle.position[axis] = min + self.epsilon;
                        particle.velocity[axis] = -particle.velocity[axis];
                    } else if position > max {
                        particle.position[axis] = max - self.epsilon;
                        particle.velocity[axis] = -particle.velocity[axis];
                    }
                }
                BoundaryMode::Wrap => {
                    if position < min {
                        particle.position[axis] = max - self.epsilon;
                    } else if position > max {
                        particle.position[axis] = min + self.epsilon;
                    }
                }
            }
        }

        self.clamp_velocity(&mut particle.velocity);
    }

    /// Hard per-axis saturation to `±max_velocity`
    #[inline]
    pub fn clamp_velocity(&self, velocity: &mut Vector2) {
        *velocity = velocity.clamp(
            Vector2::splat(-self.max_velocity),
            Vector2::splat(self.max_velocity),
        );
    }

    pub fn center(&self) -> Vector2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, position: Vector2) -> bool {
        position.cmpge(self.min).all() && position.cmple(self.max).all()
    }
}
