//! Two-component vector used for positions, velocities and forces

pub use glam::DVec2 as Vector2;

/// Operations on [`Vector2`] that glam does not provide directly
pub trait Vector2Ext {
    /// Component-wise square `(x², y²)`
    fn element_square(self) -> Self;

    /// Length floored at `epsilon` so coincident points never divide by zero
    fn safe_length(self, epsilon: f64) -> f64;

    /// Direction of `self`, divided by its safe length.
    /// A zero vector stays zero.
    fn safe_unit(self, epsilon: f64) -> Self;
}

impl Vector2Ext for Vector2 {
    #[inline]
    fn element_square(self) -> Self {
        self * self
    }

    #[inline]
    fn safe_length(self, epsilon: f64) -> f64 {
        self.length().max(epsilon)
    }

    #[inline]
    fn safe_unit(self, epsilon: f64) -> Self {
        self / self.safe_length(epsilon)
    }
}
