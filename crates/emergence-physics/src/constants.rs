//! Default physical constants for the emergence simulation
//!
//! Units are screen pixels and seconds.

/// Floor for distances and boundary inset.
///
/// Small enough to be invisible at pixel scale, large enough to stay
/// representable next to coordinates of a few thousand in `f64`.
pub const EPSILON: f64 = 1e-7;

/// Particle radius used when none is given
pub const DEFAULT_RADIUS: f64 = 2.0;

/// Per-axis velocity limit
pub const MAX_VELOCITY: f64 = 1000.0;

/// Global strength applied to every rule contribution
pub const FORCE_MULTIPLIER: f64 = 5.0;

/// Scale applied to separations before they reach a rule.
/// The earliest variant used 0.1 here.
pub const DISTANCE_SCALE: f64 = 1.0;

/// Fixed time step (seconds)
pub const TIME_DELTA: f64 = 0.005;

/// Domain size
pub const DOMAIN_WIDTH: f64 = 1200.0;
pub const DOMAIN_HEIGHT: f64 = 1000.0;

/// Strength of the inverse-square prototype rule (negative attracts)
pub const INVERSE_SQUARE_STRENGTH: f64 = -1.0e6;
