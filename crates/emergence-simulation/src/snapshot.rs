//! Read-only view of the simulation handed to renderers between ticks

use bytemuck::{Pod, Zeroable};
use emergence_physics::{Particle, Vector2};

/// Packed particle for GPU upload (matches a WGSL struct of the same layout)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub force: [f32; 2],
    pub radius: f32,
    /// Species index
    pub species: u32,
}

impl From<&Particle> for ParticleVertex {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.position.as_vec2().to_array(),
            velocity: p.velocity.as_vec2().to_array(),
            force: p.force.as_vec2().to_array(),
            radius: p.radius() as f32,
            species: p.species() as u32,
        }
    }
}

/// State of one completed tick
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot<'a> {
    pub tick: u64,
    pub domain_min: Vector2,
    pub domain_max: Vector2,
    pub particles: &'a [Particle],
}

impl FrameSnapshot<'_> {
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn vertices(&self) -> Vec<ParticleVertex> {
        self.particles.iter().map(ParticleVertex::from).collect()
    }
}

/// Consumer of frames, called strictly between ticks
pub trait FrameSink {
    fn present(&mut self, frame: &FrameSnapshot<'_>);
}
