//! Linearized unicycle motion model.
//!
//! Integrates a body-frame velocity command over one fixed time step:
//!
//! ```text
//! x'     = x + cos(θ) · v · dt
//! y'     = y + sin(θ) · v · dt
//! θ'     = θ + ω · dt
//! ```
//!
//! The heading is not wrapped after integration; it accumulates across
//! steps. Sensor bearings are wrapped independently, so this does not leak
//! into measurements.

use crate::algorithms::noise::{NoNoise, Noise};
use crate::core::types::{Pose2D, Twist2D};

/// Kinematic motion model with a pluggable noise stage.
///
/// Deterministic with the default [`NoNoise`]: the same pose, command, and
/// dt always produce the same next pose. The noise stage perturbs the
/// integrated pose only when a non-identity model is plugged in.
#[derive(Debug, Clone, Default)]
pub struct MotionModel<N = NoNoise> {
    noise: N,
}

impl MotionModel {
    /// Create a deterministic motion model (identity noise).
    pub fn new() -> Self {
        Self { noise: NoNoise }
    }
}

impl<N: Noise<Pose2D>> MotionModel<N> {
    /// Create a motion model with a custom noise stage.
    pub fn with_noise(noise: N) -> Self {
        Self { noise }
    }

    /// Integrate one command over `dt` seconds.
    ///
    /// With no command the pose is returned unchanged and the noise stage
    /// is skipped entirely.
    pub fn update(&mut self, pose: &Pose2D, command: Option<&Twist2D>, dt: f32) -> Pose2D {
        let Some(cmd) = command else {
            return *pose;
        };

        let next = Pose2D::new(
            pose.x + pose.theta.cos() * cmd.linear * dt,
            pose.y + pose.theta.sin() * cmd.linear * dt,
            pose.theta + cmd.angular * dt,
        );
        self.noise.perturb(next)
    }
}
