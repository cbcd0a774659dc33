//! # Emergence Simulation
//!
//! Fixed-step simulation of a particle population: force evaluation over a
//! frozen snapshot, integration, and boundary enforcement.

pub mod boundary;
pub mod config;
pub mod error;
pub mod integrator;
pub mod simulation;
pub mod snapshot;
pub mod spawn;

pub use boundary::*;
pub use config::*;
pub use error::*;
pub use integrator::*;
pub use simulation::*;
pub use snapshot::*;
pub use spawn::*;
