//! Startup configuration for a run

use crate::boundary::{BoundaryMode, BoundaryPolicy};
use crate::error::ConfigError;
use crate::integrator::IntegrationMethod;
use emergence_physics::{constants, ForceField, NeighborSelection, RuleTable, Vector2};

/// Everything that is fixed for the lifetime of a simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Number of particles spawned by [`crate::Simulation::from_config`]
    pub population_size: usize,
    pub domain_min: Vector2,
    pub domain_max: Vector2,
    /// Seconds per tick
    pub time_delta: f64,
    pub method: IntegrationMethod,
    pub boundary: BoundaryMode,
    pub rules: RuleTable,
    /// Per-axis velocity limit
    pub max_velocity: f64,
    /// Distance floor and boundary inset
    pub epsilon: f64,
    pub multiplier: f64,
    pub distance_scale: f64,
    pub neighbors: NeighborSelection,
    /// Radius of spawned particles
    pub radius: f64,
    /// Spawned velocities are uniform in `[-spawn_speed, spawn_speed]` per axis
    pub spawn_speed: f64,
    /// Seed for spawning; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population_size: 1500,
            domain_min: Vector2::ZERO,
            domain_max: Vector2::new(constants::DOMAIN_WIDTH, constants::DOMAIN_HEIGHT),
            time_delta: constants::TIME_DELTA,
            method: IntegrationMethod::Leapfrog,
            boundary: BoundaryMode::Reflect,
            rules: RuleTable::default(),
            max_velocity: constants::MAX_VELOCITY,
            epsilon: constants::EPSILON,
            multiplier: constants::FORCE_MULTIPLIER,
            distance_scale: constants::DISTANCE_SCALE,
            neighbors: NeighborSelection::All,
            radius: constants::DEFAULT_RADIUS,
            spawn_speed: 250.0,
            seed: None,
        }
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

impl SimulationConfig {
    /// Reject anything that would make the first tick meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("time delta", self.time_delta)?;
        positive("max velocity", self.max_velocity)?;
        positive("epsilon", self.epsilon)?;
        positive("radius", self.radius)?;
        positive("distance scale", self.distance_scale)?;

        if !self.multiplier.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "multiplier",
                value: self.multiplier,
            });
        }

        let bounds_finite = self.domain_min.is_finite() && self.domain_max.is_finite();
        if !bounds_finite || !self.domain_min.cmplt(self.domain_max).all() {
            return Err(ConfigError::EmptyDomain {
                min: self.domain_min.to_array(),
                max: self.domain_max.to_array(),
            });
        }
        // The inset must leave room on both sides of every axis
        let extent = self.domain_max - self.domain_min;
        if 2.0 * self.epsilon >= extent.min_element() {
            return Err(ConfigError::NotPositive {
                name: "domain extent minus twice epsilon",
                value: extent.min_element() - 2.0 * self.epsilon,
            });
        }

        if !self.spawn_speed.is_finite() || self.spawn_speed < 0.0 {
            return Err(ConfigError::SpawnVelocity(self.spawn_speed));
        }

        self.rules.validate()?;
        Ok(())
    }

    pub fn force_field(&self) -> ForceField {
        ForceField {
            rules: self.rules.clone(),
            multiplier: self.multiplier,
            distance_scale: self.distance_scale,
            epsilon: self.epsilon,
            neighbors: self.neighbors,
        }
    }

    pub fn boundary_policy(&self) -> BoundaryPolicy {
        BoundaryPolicy {
            mode: self.boundary,
            min: self.domain_min,
            max: self.domain_max,
            epsilon: self.epsilon,
            max_velocity: self.max_velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emergence_physics::{InteractionRule, PhysicsError, Species};

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SimulationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_non_positive_time_delta() {
        for time_delta in [0.0, -0.005, f64::NAN] {
            let config = SimulationConfig {
                time_delta,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::NotPositive {
                    name: "time delta",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let config = SimulationConfig {
            radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "radius", .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_domain() {
        let config = SimulationConfig {
            domain_min: Vector2::new(0.0, 500.0),
            domain_max: Vector2::new(1000.0, 500.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyDomain { .. })));
    }

    #[test]
    fn test_rejects_invalid_rule() {
        let mut config = SimulationConfig::default();
        config.rules.set(
            Species::A,
            Species::A,
            InteractionRule::InverseSquare {
                strength: f64::INFINITY,
            },
        );
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Rules(PhysicsError::InvalidRule { .. }))
        ));
    }

    #[test]
    fn test_derived_strategies_follow_config() {
        let config = SimulationConfig {
            boundary: BoundaryMode::Wrap,
            epsilon: 1e-3,
            neighbors: NeighborSelection::First(10),
            ..Default::default()
        };
        let field = config.force_field();
        assert_eq!(field.epsilon, 1e-3);
        assert_eq!(field.neighbors, NeighborSelection::First(10));

        let boundary = config.boundary_policy();
        assert_eq!(boundary.mode, BoundaryMode::Wrap);
        assert_eq!(boundary.max, Vector2::new(1200.0, 1000.0));
    }
}
