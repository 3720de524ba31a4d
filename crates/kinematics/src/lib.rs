#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Free-Fall Kinematics Oracle
//!
//! Analytical ground truth for validating a numerical physics simulation.
//!
//! A point mass under constant gravity follows `½ g t² + v₀ t + x₀ = x` on
//! every axis. This crate turns a body's initial conditions into that
//! quadratic and solves it in closed form for the moment the body first
//! reaches its collision boundary.
//!
//! ## Key Components
//!
//! -   **Kinematics mapper:** [`PhysicalObject`] in the [`object`] module
//!     derives the coefficients `(a, b, c)`, either per axis or for the
//!     vertical axis only.
//! -   **Quadratic solver:** [`QuadraticEquation`] in the [`quadratic`]
//!     module computes the discriminant, both roots, the ground contact time
//!     and the position at contact.
//! -   **Validation helpers:** [`trajectory`] samples, [`compare`] checks and
//!     [`scenario`] files describing sets of bodies.
//!
//! Degenerate inputs (no vertical acceleration, a boundary that is never
//! reached) are not errors: they yield NaN or infinity, exactly as the
//! arithmetic does.
//!
//! ## Usage
//!
//! ```rust
//! use kinematics::PhysicalObject;
//!
//! let ball = PhysicalObject::new([0.0, 0.0, 10.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
//! let t = ball.equation().time_of_ground_contact();
//! assert!((t - (2.0_f64 * 10.0 / 9.81).sqrt()).abs() < 1e-12);
//! ```

pub mod compare;
pub mod object;
pub mod quadratic;
pub mod scenario;
pub mod trajectory;
pub mod types;

pub use compare::{approx_equal, ContactCheck, PositionCheck, Verdict};
pub use object::{PhysicalObject, DEFAULT_GRAVITY, EARTH_GRAVITY};
pub use quadratic::{ground_contact_root, Coefficient, QuadraticEquation};
pub use scenario::{Body, ContactReport, Scenario, ScenarioError};
pub use trajectory::{Sample, TrajectoryError};
pub use types::{ParseVec3Error, Vec3, VERTICAL_AXIS};
