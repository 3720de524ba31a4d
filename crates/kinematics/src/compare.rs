//! Checks of analytical reference values against simulated ones.

use std::fmt;

use serde::Serialize;

use crate::types::Vec3;

/// Simulated contact times are accepted within this many timesteps of the
/// analytical value.
pub const CONTACT_TOLERANCE_STEPS: f64 = 2.0;

/// `|lhs - rhs| < precision`, false whenever an argument is not finite.
#[must_use]
pub fn approx_equal(lhs: f64, rhs: f64, precision: f64) -> bool {
    if !lhs.is_finite() || !rhs.is_finite() || !precision.is_finite() {
        return false;
    }
    (lhs - rhs).abs() < precision
}

#[must_use]
pub fn contact_tolerance(timestep: f64) -> f64 {
    CONTACT_TOLERANCE_STEPS * timestep
}

impl Vec3 {
    /// Component-wise [`approx_equal`].
    #[must_use]
    pub fn approx_eq(self, other: Self, precision: f64) -> bool {
        approx_equal(self.x, other.x, precision)
            && approx_equal(self.y, other.y, precision)
            && approx_equal(self.z, other.z, precision)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Compatible,
    Incompatible,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Compatible => f.write_str("compatible"),
            Verdict::Incompatible => f.write_str("not compatible"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactCheck {
    pub name: String,
    pub analytical: f64,
    pub simulated: f64,
    pub tolerance: f64,
}

impl ContactCheck {
    pub fn new(name: impl Into<String>, analytical: f64, simulated: f64, timestep: f64) -> Self {
        Self {
            name: name.into(),
            analytical,
            simulated,
            tolerance: contact_tolerance(timestep),
        }
    }

    /// `analytical - simulated`.
    #[must_use]
    pub fn difference(&self) -> f64 {
        self.analytical - self.simulated
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if approx_equal(self.analytical, self.simulated, self.tolerance) {
            Verdict::Compatible
        } else {
            Verdict::Incompatible
        }
    }
}

/// Final positions are accepted within this distance on every axis.
pub const POSITION_TOLERANCE: f64 = 0.2;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PositionCheck {
    pub name: String,
    pub analytical: Vec3,
    pub simulated: Vec3,
    pub tolerance: f64,
}

impl PositionCheck {
    pub fn new(name: impl Into<String>, analytical: Vec3, simulated: Vec3) -> Self {
        Self {
            name: name.into(),
            analytical,
            simulated,
            tolerance: POSITION_TOLERANCE,
        }
    }

    /// `analytical - simulated`, per axis.
    #[must_use]
    pub fn difference(&self) -> Vec3 {
        self.analytical - self.simulated
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.analytical.approx_eq(self.simulated, self.tolerance) {
            Verdict::Compatible
        } else {
            Verdict::Incompatible
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_equal_rejects_non_finite() {
        assert!(approx_equal(1.0, 1.05, 0.1));
        assert!(!approx_equal(1.0, 1.2, 0.1));
        assert!(!approx_equal(f64::NAN, f64::NAN, 1.0));
        assert!(!approx_equal(1.0, f64::INFINITY, 1.0));
        assert!(!approx_equal(1.0, 1.0, f64::NAN));
    }

    #[test]
    fn difference_equal_to_precision_is_rejected() {
        assert!(!approx_equal(1.0, 1.5, 0.5));
        assert!(!approx_equal(0.0, 0.0, 0.0));
        assert!(approx_equal(1.0, 1.25, 0.5));
    }

    #[test]
    fn vector_comparison_is_per_component() {
        let a = Vec3::new(534.25, 0.0, 0.0);
        assert!(a.approx_eq(Vec3::new(534.1, 0.1, -0.1), 0.2));
        assert!(!a.approx_eq(Vec3::new(534.25, 0.0, 0.3), 0.2));
    }

    #[test]
    fn contact_check_uses_two_timesteps() {
        let check = ContactCheck::new("sphere", 1.915, 1.93, 0.01);
        assert!((check.tolerance - 0.02).abs() < 1e-12);
        assert_eq!(check.verdict(), Verdict::Compatible);
        assert!((check.difference() + 0.015).abs() < 1e-12);

        let late = ContactCheck::new("sphere", 1.915, 1.95, 0.01);
        assert_eq!(late.verdict(), Verdict::Incompatible);
    }

    #[test]
    fn missing_analytical_time_is_incompatible() {
        let check = ContactCheck::new("cube", f64::NAN, 1.0, 0.01);
        assert_eq!(check.verdict(), Verdict::Incompatible);
    }

    #[test]
    fn position_check_compares_every_axis() {
        let landed = Vec3::new(534.25, 0.0, 0.1);
        let close = PositionCheck::new("sphere", landed, Vec3::new(534.1, 0.05, 0.1));
        assert_eq!(close.verdict(), Verdict::Compatible);
        assert!((close.difference().x - 0.15).abs() < 1e-9);

        let off = PositionCheck::new("sphere", landed, Vec3::new(534.25, 0.3, 0.1));
        assert_eq!(off.verdict(), Verdict::Incompatible);

        let missing = PositionCheck::new("sphere", Vec3::new(f64::NAN, 0.0, 0.1), landed);
        assert_eq!(missing.verdict(), Verdict::Incompatible);
    }
}
