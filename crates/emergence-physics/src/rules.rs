//! Species-pair interaction rules
//!
//! Every cell of the table answers one question: what force does a particle
//! of species `species` feel from a particle of species `other` at distance
//! `r`? The table is asymmetric; `A` against `B` need not mirror `B` against `A`.
//!
//! The unit vector handed to a rule points from the other particle towards
//! the particle being pushed, so a positive coefficient repels and a negative
//! one attracts.

use crate::error::PhysicsError;
use crate::particle::Species;
use crate::vector::{Vector2, Vector2Ext};

/// Direction of a rule's coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Repel,
    Attract,
}

impl Sign {
    #[inline]
    pub fn value(self) -> f64 {
        match self {
            Sign::Repel => 1.0,
            Sign::Attract => -1.0,
        }
    }
}

/// Force law for one ordered species pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionRule {
    /// No force at any distance
    Neutral,

    /// Two regimes split at `threshold_factor * radius`.
    ///
    /// Inside (`r <= threshold`): `inside * unit * r^inside_power`.
    /// Outside: `outside * unit * r`.
    Piecewise {
        threshold_factor: f64,
        inside_power: u32,
        inside: Sign,
        outside: Sign,
    },

    /// `sign * unit * r` at every distance
    Linear { sign: Sign },

    /// `sign * (unit.x², unit.y²)`.
    /// The squared unit vector always lies in the positive quadrant, so this
    /// pushes along +x/+y for `Repel` regardless of where the other particle is.
    SquaredUnit { sign: Sign },

    /// `unit * strength / r²`; negative strength attracts
    InverseSquare { strength: f64 },
}

impl InteractionRule {
    /// Force contribution before it is summed by the force field.
    ///
    /// `r` is the (already floored) separation, `unit` the direction from the
    /// other particle to this one, `radius` the radius of this particle.
    pub fn contribution(&self, r: f64, unit: Vector2, radius: f64, multiplier: f64) -> Vector2 {
        match *self {
            InteractionRule::Neutral => Vector2::ZERO,
            InteractionRule::Piecewise {
                threshold_factor,
                inside_power,
                inside,
                outside,
            } => {
                if r > threshold_factor * radius {
                    unit * (outside.value() * r * multiplier)
                } else {
                    unit * (inside.value() * r.powi(inside_power as i32) * multiplier)
                }
            }
            InteractionRule::Linear { sign } => unit * (sign.value() * r * multiplier),
            InteractionRule::SquaredUnit { sign } => {
                unit.element_square() * (sign.value() * multiplier)
            }
            InteractionRule::InverseSquare { strength } => unit * (strength / (r * r) * multiplier),
        }
    }

    fn validate(&self) -> Result<(), &'static str> {
        match *self {
            InteractionRule::Piecewise {
                threshold_factor,
                inside_power,
                ..
            } => {
                if !threshold_factor.is_finite() || threshold_factor < 0.0 {
                    return Err("threshold factor must be finite and non-negative");
                }
                if inside_power == 0 || inside_power > i32::MAX as u32 {
                    return Err("inside power must be at least 1");
                }
                Ok(())
            }
            InteractionRule::InverseSquare { strength } if !strength.is_finite() => {
                Err("strength must be finite")
            }
            _ => Ok(()),
        }
    }
}

/// Complete `species x species` rule matrix
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: [[InteractionRule; Species::COUNT]; Species::COUNT],
}

impl RuleTable {
    /// A table in which nothing interacts
    pub fn neutral() -> Self {
        Self {
            rules: [[InteractionRule::Neutral; Species::COUNT]; Species::COUNT],
        }
    }

    /// Build a table from `(species, other, rule)` entries.
    ///
    /// Every ordered pair must be present exactly once; later duplicates win.
    pub fn from_entries<I>(entries: I) -> Result<Self, PhysicsError>
    where
        I: IntoIterator<Item = (Species, Species, InteractionRule)>,
    {
        let mut cells: [[Option<InteractionRule>; Species::COUNT]; Species::COUNT] =
            [[None; Species::COUNT]; Species::COUNT];

        for (species, other, rule) in entries {
            cells[species.index()][other.index()] = Some(rule);
        }

        let mut table = Self::neutral();
        for species in Species::ALL {
            for other in Species::ALL {
                let rule = cells[species.index()][other.index()]
                    .ok_or(PhysicsError::MissingRule { species, other })?;
                table.rules[species.index()][other.index()] = rule;
            }
        }
        table.validate()?;
        Ok(table)
    }

    #[inline]
    pub fn rule(&self, species: Species, other: Species) -> &InteractionRule {
        &self.rules[species.index()][other.index()]
    }

    pub fn set(&mut self, species: Species, other: Species, rule: InteractionRule) {
        self.rules[species.index()][other.index()] = rule;
    }

    /// Force felt by `species` from `other`
    #[inline]
    pub fn contribution(
        &self,
        species: Species,
        other: Species,
        r: f64,
        unit: Vector2,
        radius: f64,
        multiplier: f64,
    ) -> Vector2 {
        self.rule(species, other).contribution(r, unit, radius, multiplier)
    }

    /// Check every cell's parameters
    pub fn validate(&self) -> Result<(), PhysicsError> {
        for species in Species::ALL {
            for other in Species::ALL {
                self.rule(species, other)
                    .validate()
                    .map_err(|reason| PhysicsError::InvalidRule {
                        species,
                        other,
                        reason,
                    })?;
            }
        }
        Ok(())
    }

    /// Every pair attracts with the inverse-square law of the first prototype
    pub fn inverse_square(strength: f64) -> Self {
        Self {
            rules: [[InteractionRule::InverseSquare { strength }; Species::COUNT]; Species::COUNT],
        }
    }
}

impl Default for RuleTable {
    /// The red/green/blue/magenta matrix (A/B/C/D)
    fn default() -> Self {
        use InteractionRule::*;
        use Sign::*;

        let mut table = Self::neutral();

        // A (red)
        table.set(
            Species::A,
            Species::B,
            Piecewise {
                threshold_factor: 5.0,
                inside_power: 2,
                inside: Repel,
                outside: Attract,
            },
        );
        table.set(Species::A, Species::C, SquaredUnit { sign: Repel });

        // B (green)
        table.set(
            Species::B,
            Species::D,
            Piecewise {
                threshold_factor: 10.0,
                inside_power: 3,
                inside: Attract,
                outside: Attract,
            },
        );

        // C (blue)
        table.set(
            Species::C,
            Species::B,
            Piecewise {
                threshold_factor: 5.0,
                inside_power: 3,
                inside: Repel,
                outside: Attract,
            },
        );
        table.set(Species::C, Species::D, Linear { sign: Attract });

        // D (magenta)
        table.set(
            Species::D,
            Species::B,
            Piecewise {
                threshold_factor: 10.0,
                inside_power: 3,
                inside: Repel,
                outside: Attract,
            },
        );

        table
    }
}
