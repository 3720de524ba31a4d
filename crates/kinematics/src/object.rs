//! # Kinematics Mapper
//!
//! A point mass under constant acceleration follows
//!
//! ```text
//! ½ g t² + v₀ t + x₀ = x
//! ```
//!
//! [`PhysicalObject`] holds the initial conditions and the position at which
//! contact is defined, and maps them onto the coefficients of
//! `a t² + b t + c = 0` with `c` measured from the collision boundary.

use crate::quadratic::QuadraticEquation;
use crate::types::Vec3;

/// Standard gravitational acceleration magnitude, m/s².
pub const EARTH_GRAVITY: f64 = 9.81;

/// Default acceleration, pointing down the vertical axis.
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, 0.0, -EARTH_GRAVITY);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalObject {
    position: Vec3,
    velocity: Vec3,
    collision_boundary: Vec3,
    gravity: Vec3,
}

impl PhysicalObject {
    /// Object under [`DEFAULT_GRAVITY`].
    pub fn new(
        position: impl Into<Vec3>,
        velocity: impl Into<Vec3>,
        collision_boundary: impl Into<Vec3>,
    ) -> Self {
        Self::with_gravity(position, velocity, collision_boundary, DEFAULT_GRAVITY)
    }

    pub fn with_gravity(
        position: impl Into<Vec3>,
        velocity: impl Into<Vec3>,
        collision_boundary: impl Into<Vec3>,
        gravity: impl Into<Vec3>,
    ) -> Self {
        Self {
            position: position.into(),
            velocity: velocity.into(),
            collision_boundary: collision_boundary.into(),
            gravity: gravity.into(),
        }
    }

    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub const fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[must_use]
    pub const fn collision_boundary(&self) -> Vec3 {
        self.collision_boundary
    }

    #[must_use]
    pub const fn gravity(&self) -> Vec3 {
        self.gravity
    }

    #[must_use]
    pub fn coefficient_a(&self) -> Vec3 {
        self.gravity * 0.5
    }

    #[must_use]
    pub const fn coefficient_b(&self) -> Vec3 {
        self.velocity
    }

    #[must_use]
    pub fn coefficient_c(&self) -> Vec3 {
        self.position - self.collision_boundary
    }

    /// One quadratic per axis, all in the same time variable.
    #[must_use]
    pub fn equation(&self) -> QuadraticEquation<Vec3> {
        QuadraticEquation::new(self.coefficient_a(), self.coefficient_b(), self.coefficient_c())
    }

    /// The vertical-axis quadratic alone, for when only fall timing matters.
    #[must_use]
    pub fn vertical_equation(&self) -> QuadraticEquation<f64> {
        QuadraticEquation::new(
            self.coefficient_a().vertical(),
            self.coefficient_b().vertical(),
            self.coefficient_c().vertical(),
        )
    }

    /// Absolute position at time `t`.
    #[must_use]
    pub fn position_at(&self, t: f64) -> Vec3 {
        self.position + self.velocity * t + self.gravity * (0.5 * t * t)
    }

    #[must_use]
    pub fn velocity_at(&self, t: f64) -> Vec3 {
        self.velocity + self.gravity * t
    }

    #[must_use]
    pub fn time_of_ground_contact(&self) -> f64 {
        self.equation().time_of_ground_contact()
    }

    /// Absolute position at the ground contact time; its vertical component
    /// matches the collision boundary's.
    #[must_use]
    pub fn contact_point(&self) -> Vec3 {
        self.position_at(self.time_of_ground_contact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_follow_equation_of_motion() {
        let obj = PhysicalObject::new([1.0, 2.0, 10.0], [3.0, 0.0, -1.0], [0.0, 0.0, 0.5]);
        assert_eq!(obj.coefficient_a(), Vec3::new(0.0, 0.0, -0.5 * EARTH_GRAVITY));
        assert_eq!(obj.coefficient_b(), Vec3::new(3.0, 0.0, -1.0));
        assert_eq!(obj.coefficient_c(), Vec3::new(1.0, 2.0, 9.5));
    }

    #[test]
    fn vertical_equation_extracts_third_component() {
        let obj = PhysicalObject::new([1.0, 2.0, 10.0], [3.0, 4.0, 5.0], [0.0, 0.0, 1.0]);
        let eq = obj.vertical_equation();
        assert_eq!(eq.coefficients(), (-0.5 * EARTH_GRAVITY, 5.0, 9.0));
    }

    #[test]
    fn position_at_matches_equation_offset_by_boundary() {
        let obj = PhysicalObject::new([0.0, 0.0, 4.0], [1.0, 0.0, 2.0], [0.0, 0.0, 1.0]);
        let t = 0.3;
        let relative = obj.equation().evaluate(t);
        let absolute = obj.position_at(t);
        assert!(((relative + obj.collision_boundary()) - absolute).z.abs() < 1e-12);
        assert!((absolute.x - 0.3).abs() < 1e-12);
    }

    #[test]
    fn velocity_reverses_at_apex() {
        let obj = PhysicalObject::new([0.0; 3], [0.0, 0.0, EARTH_GRAVITY], [0.0; 3]);
        assert!(obj.velocity_at(1.0).z.abs() < 1e-12);
    }
}
