//! CPU particle simulation
//!
//! One tick runs three phases in order, never overlapping:
//! 1. every particle's force is computed from the positions at the start of
//!    the tick and written to a separate buffer,
//! 2. forces are committed and each particle's velocity then position is
//!    advanced by the integrator,
//! 3. the boundary policy corrects positions and saturates velocities.
//!
//! Particle order never changes the result.

use crate::boundary::BoundaryPolicy;
use crate::config::SimulationConfig;
use crate::error::ConfigError;
use crate::integrator::{IntegrationMethod, Integrator};
use crate::snapshot::{FrameSink, FrameSnapshot};
use crate::spawn::{spawn_population, spawn_rng};
use emergence_physics::{ForceField, Particle, Vector2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Number of the tick just completed (first tick is 1)
    pub tick: u64,
    /// Particles whose force could not be computed and were given zero force
    pub force_errors: usize,
    /// Particles reset after reaching a non-finite state
    pub resets: usize,
}

pub struct Simulation {
    config: SimulationConfig,
    particles: Vec<Particle>,
    // Back buffer for the force phase
    forces: Vec<Vector2>,
    field: ForceField,
    boundary: BoundaryPolicy,
    integrator: &'static dyn Integrator,
    tick: u64,
}

impl Simulation {
    /// Simulation over a given population.
    ///
    /// `config.population_size` is ignored; the population is taken as is,
    /// with force history cleared.
    pub fn new(
        config: SimulationConfig,
        mut particles: Vec<Particle>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        for (index, p) in particles.iter().enumerate() {
            let radius = p.radius();
            if !radius.is_finite() || radius <= 0.0 {
                return Err(ConfigError::ParticleRadius { index, radius });
            }
        }
        for p in &mut particles {
            p.force = Vector2::ZERO;
            p.previous_force = Vector2::ZERO;
        }

        log::info!(
            "Initializing simulation: {} particles, {:?}, {:?} boundary, dt={}",
            particles.len(),
            config.method,
            config.boundary,
            config.time_delta
        );

        Ok(Self {
            field: config.force_field(),
            boundary: config.boundary_policy(),
            integrator: config.method.integrator(),
            forces: vec![Vector2::ZERO; particles.len()],
            particles,
            config,
            tick: 0,
        })
    }

    /// Simulation over a freshly spawned random population
    pub fn from_config(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = spawn_rng(&config);
        let particles = spawn_population(&config, &mut rng);
        log::info!("✓ Spawned {} particles", particles.len());
        Self::new(config, particles)
    }

    /// Advance by one tick
    pub fn step(&mut self) -> StepReport {
        let dt = self.config.time_delta;
        self.tick += 1;

        // Phase 1: forces from the frozen snapshot
        let force_errors = evaluate_forces(&self.field, &self.particles, &mut self.forces);

        // Phase 2: commit forces, then velocity before position
        let mut resets = 0;
        let committed = self.particles.iter_mut().zip(&self.forces);
        for (index, (particle, force)) in committed.enumerate() {
            particle.previous_force = particle.force;
            particle.force = *force;
            self.integrator.advance_velocity(particle, dt);
            if !particle.velocity.is_finite() {
                log::warn!(
                    "tick {}: particle {} has non-finite velocity, resetting",
                    self.tick,
                    index
                );
                reset_particle(particle, &self.boundary);
                resets += 1;
                continue;
            }
            self.boundary.clamp_velocity(&mut particle.velocity);
            self.integrator.advance_position(particle, dt);
        }

        // Phase 3: boundary
        for (index, particle) in self.particles.iter_mut().enumerate() {
            if let Some(quantity) = particle.non_finite_quantity() {
                log::warn!(
                    "tick {}: particle {} has non-finite {}, resetting",
                    self.tick,
                    index,
                    quantity
                );
                reset_particle(particle, &self.boundary);
                resets += 1;
            }
            self.boundary.enforce(particle);
            debug_assert!(self.boundary.contains(particle.position));
        }

        let report = StepReport {
            tick: self.tick,
            force_errors,
            resets,
        };
        log::debug!("{:?}", report);
        report
    }

    /// Run `ticks` ticks, presenting every frame to `sink`
    pub fn run(&mut self, ticks: u64, sink: &mut dyn FrameSink) -> StepReport {
        let mut total = StepReport {
            tick: self.tick,
            ..Default::default()
        };
        for _ in 0..ticks {
            let report = self.step();
            total.tick = report.tick;
            total.force_errors += report.force_errors;
            total.resets += report.resets;
            sink.present(&self.snapshot());
        }
        total
    }

    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            tick: self.tick,
            domain_min: self.boundary.min,
            domain_max: self.boundary.max,
            particles: &self.particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn method(&self) -> IntegrationMethod {
        self.config.method
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

/// Fill `out[i]` with the force on particle `i`. Returns how many failed.
fn evaluate_forces(field: &ForceField, particles: &[Particle], out: &mut [Vector2]) -> usize {
    #[cfg(feature = "parallel")]
    {
        evaluate_forces_parallel(field, particles, out)
    }

    #[cfg(not(feature = "parallel"))]
    {
        evaluate_forces_serial(field, particles, out)
    }
}

fn force_or_zero(field: &ForceField, index: usize, particles: &[Particle]) -> (Vector2, usize) {
    match field.total_force(index, particles) {
        Ok(force) => (force, 0),
        Err(err) => {
            log::warn!("force on particle {} dropped: {}", index, err);
            (Vector2::ZERO, 1)
        }
    }
}

#[cfg(any(not(feature = "parallel"), test))]
fn evaluate_forces_serial(
    field: &ForceField,
    particles: &[Particle],
    out: &mut [Vector2],
) -> usize {
    out.iter_mut()
        .enumerate()
        .map(|(index, slot)| {
            let (force, failed) = force_or_zero(field, index, particles);
            *slot = force;
            failed
        })
        .sum()
}

#[cfg(feature = "parallel")]
fn evaluate_forces_parallel(
    field: &ForceField,
    particles: &[Particle],
    out: &mut [Vector2],
) -> usize {
    out.par_iter_mut()
        .enumerate()
        .map(|(index, slot)| {
            let (force, failed) = force_or_zero(field, index, particles);
            *slot = force;
            failed
        })
        .sum()
}

fn reset_particle(particle: &mut Particle, boundary: &BoundaryPolicy) {
    particle.force = Vector2::ZERO;
    particle.previous_force = Vector2::ZERO;
    particle.velocity = Vector2::ZERO;
    if !particle.position.is_finite() {
        particle.position = boundary.center();
    }
}
