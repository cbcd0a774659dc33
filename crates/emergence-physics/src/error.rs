use crate::particle::Species;
use thiserror::Error;

/// Failures of a force computation or of a rule table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    #[error("particle {index} has non-finite {quantity}")]
    NonFinite { index: usize, quantity: &'static str },

    #[error("particle under evaluation has non-finite {quantity}")]
    NonFiniteSubject { quantity: &'static str },

    #[error("particle index {index} is out of range for a population of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no interaction rule for {species:?} against {other:?}")]
    MissingRule { species: Species, other: Species },

    #[error("rule for {species:?} against {other:?} is invalid: {reason}")]
    InvalidRule {
        species: Species,
        other: Species,
        reason: &'static str,
    },
}
