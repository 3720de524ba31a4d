//! # Quadratic Solver
//!
//! Closed-form solution of `a t² + b t + c = 0` for the time of ground
//! contact. Coefficients are either plain `f64` (one axis) or [`Vec3`]
//! (three independent axes sharing `t`), abstracted by [`Coefficient`].
//!
//! Nothing here validates its input. A zero leading coefficient or a
//! negative discriminant produces NaN or infinity, which is propagated to
//! the caller as-is: downstream comparisons rely on these exact values.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::types::Vec3;

/// Scalar or component-wise value usable as a quadratic coefficient.
pub trait Coefficient:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Mul<f64, Output = Self>
{
    /// Square root, NaN for negative inputs.
    #[must_use]
    fn sqrt_or_nan(self) -> Self;

    /// The component along the vertical axis (the value itself for scalars).
    #[must_use]
    fn vertical(self) -> f64;
}

impl Coefficient for f64 {
    fn sqrt_or_nan(self) -> Self {
        self.sqrt()
    }

    fn vertical(self) -> f64 {
        self
    }
}

impl Coefficient for Vec3 {
    fn sqrt_or_nan(self) -> Self {
        self.sqrt()
    }

    fn vertical(self) -> f64 {
        Vec3::vertical(self)
    }
}

/// Earliest non-negative contact time from the two vertical roots.
///
/// Picks `r2` when `r1` is negative and `r1` otherwise. Only meaningful for
/// downward gravity, where `r1` is the later root and at most one of the two
/// is non-negative for a start above the boundary. A NaN `r1` is kept, and
/// when both roots are negative the (negative) `r2` is returned.
#[must_use]
pub fn ground_contact_root(r1: f64, r2: f64) -> f64 {
    if r1 < 0.0 {
        r2
    } else {
        r1
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadraticEquation<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T: Coefficient> QuadraticEquation<T> {
    #[must_use]
    pub const fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub const fn coefficients(&self) -> (T, T, T) {
        (self.a, self.b, self.c)
    }

    /// `b² − 4ac`, component-wise for vectors.
    #[must_use]
    pub fn discriminant(&self) -> T {
        self.b * self.b - self.a * self.c * 4.0_f64
    }

    /// `((−b − √D) / 2a, (−b + √D) / 2a)`.
    #[must_use]
    pub fn roots(&self) -> (T, T) {
        let root = self.discriminant().sqrt_or_nan();
        let denom = self.a * 2.0_f64;
        ((-self.b - root) / denom, (-self.b + root) / denom)
    }

    #[must_use]
    pub fn time_of_ground_contact(&self) -> f64 {
        let (r1, r2) = self.roots();
        let t = ground_contact_root(r1.vertical(), r2.vertical());
        if !t.is_finite() {
            tracing::debug!(
                a = self.a.vertical(),
                b = self.b.vertical(),
                c = self.c.vertical(),
                "no finite ground contact time"
            );
        }
        t
    }

    /// `a t² + b t + c`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> T {
        self.a * (t * t) + self.b * t + self.c
    }

    /// The equation evaluated at [`Self::time_of_ground_contact`]. The
    /// result is relative to the collision boundary, so its vertical
    /// component is zero when a contact exists.
    #[must_use]
    pub fn position_at_ground_contact(&self) -> T {
        self.evaluate(self.time_of_ground_contact())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: f64 = 9.81;

    fn dropped_from(height: f64) -> QuadraticEquation<f64> {
        QuadraticEquation::new(-0.5 * G, 0.0, height)
    }

    #[test]
    fn discriminant_of_dropped_body() {
        let eq = dropped_from(10.0);
        assert!((eq.discriminant() - 2.0 * G * 10.0).abs() < 1e-12);
    }

    #[test]
    fn downward_gravity_orders_roots_descending() {
        let (r1, r2) = dropped_from(10.0).roots();
        assert!(r1 > 0.0);
        assert!((r1 + r2).abs() < 1e-12);
        assert!(r1 >= r2);
    }

    #[test]
    fn positive_leading_coefficient_orders_roots_ascending() {
        // (t - 1)(t - 3)
        let (r1, r2) = QuadraticEquation::new(1.0, -4.0, 3.0).roots();
        assert!((r1 - 1.0).abs() < 1e-12);
        assert!((r2 - 3.0).abs() < 1e-12);
    }

    #[test]
    fn policy_prefers_first_root_unless_negative() {
        assert_eq!(ground_contact_root(1.5, -1.5), 1.5);
        assert_eq!(ground_contact_root(-0.5, 2.0), 2.0);
        assert_eq!(ground_contact_root(0.0, 4.0), 0.0);
        assert_eq!(ground_contact_root(-1.0, -2.0), -2.0);
        assert!(ground_contact_root(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn negative_discriminant_yields_nan() {
        // Body below the boundary with no upward speed never reaches it.
        let eq = QuadraticEquation::new(-0.5 * G, 0.0, -1.0);
        assert!(eq.discriminant() < 0.0);
        let (r1, r2) = eq.roots();
        assert!(r1.is_nan() && r2.is_nan());
        assert!(eq.time_of_ground_contact().is_nan());
        assert!(eq.position_at_ground_contact().is_nan());
    }

    #[test]
    fn zero_leading_coefficient_is_not_finite() {
        let eq = QuadraticEquation::new(0.0, 0.0, 10.0);
        let (r1, r2) = eq.roots();
        assert!(!r1.is_finite());
        assert!(!r2.is_finite());
    }

    #[test]
    fn evaluate_reproduces_boundary_at_contact() {
        let eq = QuadraticEquation::new(-0.5 * G, 3.0, 2.0);
        let t = eq.time_of_ground_contact();
        assert!(t > 0.0);
        assert!(eq.position_at_ground_contact().abs() < 1e-9);
        assert!((eq.evaluate(0.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn vector_form_picks_vertical_roots() {
        let eq = QuadraticEquation::new(
            Vec3::new(0.0, 0.0, -0.5 * G),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 10.0),
        );
        let t = eq.time_of_ground_contact();
        assert!((t - (2.0 * 10.0 / G).sqrt()).abs() < 1e-9);
        let at_contact = eq.position_at_ground_contact();
        assert!((at_contact.x - 2.0 * t).abs() < 1e-9);
        assert!(at_contact.z.abs() < 1e-9);
    }
}
