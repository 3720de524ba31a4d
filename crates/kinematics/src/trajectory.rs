//! # Reference Trajectories
//!
//! Analytic samples of a [`PhysicalObject`]'s motion at a fixed timestep,
//! laid out as plain `f64` records so a simulation can consume them directly
//! as a byte buffer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::object::PhysicalObject;
use crate::types::Vec3;

/// Upper bound on the number of samples produced by one call.
pub const MAX_SAMPLES: usize = 1_000_000;

#[derive(Error, Debug, PartialEq)]
pub enum TrajectoryError {
    #[error("timestep must be positive and finite, got {0}")]
    InvalidStep(f64),
    #[error("{requested} samples requested, at most {max} allowed", max = MAX_SAMPLES)]
    TooManySamples { requested: f64 },
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Sample {
    #[must_use]
    pub fn of(object: &PhysicalObject, time: f64) -> Self {
        Self {
            time,
            position: object.position_at(time),
            velocity: object.velocity_at(time),
        }
    }
}

fn check_step(dt: f64) -> Result<(), TrajectoryError> {
    if !dt.is_finite() || dt <= 0.0 {
        return Err(TrajectoryError::InvalidStep(dt));
    }
    Ok(())
}

/// `steps + 1` samples at `t = i * dt`, starting from the initial state.
///
/// # Errors
///
/// Fails on a non-positive or non-finite `dt`, or when `steps + 1` exceeds
/// [`MAX_SAMPLES`].
#[allow(clippy::cast_precision_loss)]
pub fn sample(object: &PhysicalObject, dt: f64, steps: usize) -> Result<Vec<Sample>, TrajectoryError> {
    check_step(dt)?;
    if steps >= MAX_SAMPLES {
        return Err(TrajectoryError::TooManySamples {
            requested: steps as f64 + 1.0,
        });
    }
    Ok((0..=steps)
        .map(|i| Sample::of(object, i as f64 * dt))
        .collect())
}

/// Samples up to the ground contact time, the last one at or before it.
///
/// Empty when there is no finite, non-negative contact time.
///
/// # Errors
///
/// Fails on a non-positive or non-finite `dt`, or when reaching the contact
/// would take more than [`MAX_SAMPLES`] samples.
#[allow(clippy::cast_precision_loss)]
pub fn sample_until_contact(object: &PhysicalObject, dt: f64) -> Result<Vec<Sample>, TrajectoryError> {
    check_step(dt)?;
    let contact = object.time_of_ground_contact();
    if !contact.is_finite() || contact < 0.0 {
        tracing::debug!(contact, dt, "nothing to sample before contact");
        return Ok(Vec::new());
    }
    let steps = (contact / dt).floor();
    if !steps.is_finite() || steps >= MAX_SAMPLES as f64 {
        return Err(TrajectoryError::TooManySamples {
            requested: steps + 1.0,
        });
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = steps as usize;
    sample(object, dt, steps)
}

/// Raw native-endian view of the samples, seven `f64` per record.
#[must_use]
pub fn as_bytes(samples: &[Sample]) -> &[u8] {
    bytemuck::cast_slice(samples)
}
