//! Total force on a particle from the rest of the population

use crate::constants::{DISTANCE_SCALE, EPSILON, FORCE_MULTIPLIER};
use crate::error::PhysicsError;
use crate::particle::Particle;
use crate::rules::RuleTable;
use crate::vector::{Vector2, Vector2Ext};

/// Which members of the population a particle interacts with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborSelection {
    /// Every other particle
    #[default]
    All,
    /// Only the first `n` other particles in population order
    First(usize),
}

/// Sums rule contributions over a population.
///
/// Holds no per-particle state; the same snapshot always gives the same result.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceField {
    pub rules: RuleTable,
    /// Global strength applied to every contribution
    pub multiplier: f64,
    /// Scale applied to separations before they reach a rule
    pub distance_scale: f64,
    /// Floor for separations
    pub epsilon: f64,
    pub neighbors: NeighborSelection,
}

impl Default for ForceField {
    fn default() -> Self {
        Self::new(RuleTable::default())
    }
}

impl ForceField {
    pub fn new(rules: RuleTable) -> Self {
        Self {
            rules,
            multiplier: FORCE_MULTIPLIER,
            distance_scale: DISTANCE_SCALE,
            epsilon: EPSILON,
            neighbors: NeighborSelection::All,
        }
    }

    /// Force on `population[index]` from the other particles.
    ///
    /// An empty population yields zero. Fails if any particle involved has a
    /// non-finite position or the sum itself is non-finite.
    pub fn total_force(
        &self,
        index: usize,
        population: &[Particle],
    ) -> Result<Vector2, PhysicsError> {
        if population.is_empty() {
            return Ok(Vector2::ZERO);
        }
        let particle = population.get(index).ok_or(PhysicsError::IndexOutOfRange {
            index,
            len: population.len(),
        })?;

        self.total_force_on(particle, population, Some(index))
            .map_err(|err| match err {
                PhysicsError::NonFiniteSubject { quantity } => {
                    PhysicsError::NonFinite { index, quantity }
                }
                other => other,
            })
    }

    /// Force on `particle` from `population`, skipping the entry at `skip`.
    ///
    /// `particle` need not be a member of `population`. Empty and self-only
    /// populations yield zero.
    pub fn total_force_on(
        &self,
        particle: &Particle,
        population: &[Particle],
        skip: Option<usize>,
    ) -> Result<Vector2, PhysicsError> {
        if !particle.position.is_finite() {
            return Err(PhysicsError::NonFiniteSubject {
                quantity: "position",
            });
        }

        let limit = match self.neighbors {
            NeighborSelection::All => usize::MAX,
            NeighborSelection::First(n) => n,
        };

        let mut total = Vector2::ZERO;
        for (other_index, other) in population
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != skip)
            .take(limit)
        {
            if !other.position.is_finite() {
                return Err(PhysicsError::NonFinite {
                    index: other_index,
                    quantity: "position",
                });
            }
            total += self.pair_force(particle, other);
        }

        if !total.is_finite() {
            return Err(PhysicsError::NonFiniteSubject { quantity: "force" });
        }
        Ok(total)
    }

    /// Force felt by `particle` from `other` alone
    #[inline]
    pub fn pair_force(&self, particle: &Particle, other: &Particle) -> Vector2 {
        let delta = particle.position - other.position;
        let length = delta.safe_length(self.epsilon);
        let unit = delta / length;
        let r = self.distance_scale * length;
        self.rules.contribution(
            particle.species(),
            other.species(),
            r,
            unit,
            particle.radius(),
            self.multiplier,
        )
    }
}
