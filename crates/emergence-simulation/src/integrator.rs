//! Fixed-step integrators
//!
//! Both schemes update velocity first and position second. Velocity clamping
//! and boundary enforcement happen in between and after, driven by the
//! simulation, so an integrator only owns the update formulas.

use emergence_physics::Particle;

/// One numerical scheme for advancing a particle by `dt`
pub trait Integrator: Send + Sync {
    /// Velocity update from `force` (and `previous_force` where used)
    fn advance_velocity(&self, particle: &mut Particle, dt: f64);

    /// Position update from the already advanced velocity
    fn advance_position(&self, particle: &mut Particle, dt: f64);
}

/// Explicit Euler
///
/// v += F dt
/// x += v dt
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Integrator for Euler {
    #[inline]
    fn advance_velocity(&self, particle: &mut Particle, dt: f64) {
        particle.velocity += particle.force * dt;
    }

    #[inline]
    fn advance_position(&self, particle: &mut Particle, dt: f64) {
        particle.position += particle.velocity * dt;
    }
}

/// Leapfrog (velocity-Verlet form with a single force evaluation per tick)
///
/// v += 0.5 (F_prev + F) dt
/// x += v dt + 0.5 F dt²
///
/// On the first tick `F_prev` is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Leapfrog;

impl Integrator for Leapfrog {
    #[inline]
    fn advance_velocity(&self, particle: &mut Particle, dt: f64) {
        particle.velocity += 0.5 * (particle.previous_force + particle.force) * dt;
    }

    #[inline]
    fn advance_position(&self, particle: &mut Particle, dt: f64) {
        particle.position += particle.velocity * dt + 0.5 * particle.force * dt * dt;
    }
}

/// Integrator selected for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegrationMethod {
    Euler,
    #[default]
    Leapfrog,
}

impl IntegrationMethod {
    pub fn integrator(self) -> &'static dyn Integrator {
        match self {
            IntegrationMethod::Euler => &Euler,
            IntegrationMethod::Leapfrog => &Leapfrog,
        }
    }
}
