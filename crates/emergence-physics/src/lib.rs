//! # Emergence Physics
//!
//! Pairwise interaction rules between particle species and the force field
//! that sums them over a population.

pub mod constants;
pub mod error;
pub mod forces;
pub mod particle;
pub mod rules;
pub mod vector;

pub use constants::*;
pub use error::*;
pub use forces::*;
pub use particle::*;
pub use rules::*;
pub use vector::*;
