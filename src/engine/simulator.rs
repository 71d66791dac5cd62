//! Stateful simulator combining motion and sensing.
//!
//! Holds the current pose, the fixed time step, and the landmark table.
//! Each call to [`Simulator::step`] integrates one velocity command and
//! returns the new pose together with the ordered observation list.

use crate::algorithms::noise::{NoNoise, Noise};
use crate::algorithms::{MotionModel, RangeBearingModel};
use crate::core::types::{LandmarkMap, Observation, Pose2D, Twist2D};
use crate::error::{Result, SimError};

/// Discrete-time 2D robot simulator.
///
/// Single-owner, single-threaded. The pose is replaced (not mutated in
/// place) on every step; the landmark table is immutable after
/// construction. The object is reusable indefinitely.
#[derive(Debug, Clone)]
pub struct Simulator<MN = NoNoise, SN = NoNoise> {
    pose: Pose2D,
    dt: f32,
    landmarks: LandmarkMap,
    motion: MotionModel<MN>,
    sensor: RangeBearingModel<SN>,
}

impl Simulator {
    /// Create a deterministic simulator.
    ///
    /// Fails with [`SimError::InvalidInput`] when `dt` is not positive and
    /// finite, the initial pose is non-finite, or any landmark coordinate
    /// is non-finite.
    pub fn new(initial_pose: Pose2D, dt: f32, landmarks: LandmarkMap) -> Result<Self> {
        Self::with_noise(initial_pose, dt, landmarks, NoNoise, NoNoise)
    }
}

impl<MN: Noise<Pose2D>, SN: Noise<f32>> Simulator<MN, SN> {
    /// Create a simulator with custom motion and range noise stages.
    pub fn with_noise(
        initial_pose: Pose2D,
        dt: f32,
        landmarks: LandmarkMap,
        motion_noise: MN,
        sensor_noise: SN,
    ) -> Result<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidInput(format!(
                "time step must be positive and finite, got {dt}"
            )));
        }
        if !initial_pose.is_finite() {
            return Err(SimError::InvalidInput(format!(
                "initial pose must be finite, got {initial_pose:?}"
            )));
        }
        if !landmarks.is_finite() {
            return Err(SimError::InvalidInput(
                "landmark table contains non-finite coordinates".to_string(),
            ));
        }

        Ok(Self {
            pose: initial_pose,
            dt,
            landmarks,
            motion: MotionModel::with_noise(motion_noise),
            sensor: RangeBearingModel::with_noise(sensor_noise),
        })
    }

    /// Advance one time step and sense.
    ///
    /// Integrates the command (if any), stores the resulting pose, then
    /// observes every landmark from it. Fails atomically with
    /// [`SimError::InvalidInput`] on a non-finite command: the held pose is
    /// left untouched.
    pub fn step(&mut self, command: Option<&Twist2D>) -> Result<(Pose2D, Vec<Observation>)> {
        if let Some(cmd) = command {
            if !cmd.is_finite() {
                return Err(SimError::InvalidInput(format!(
                    "command must be finite, got {cmd:?}"
                )));
            }
        }

        let new_pose = self.motion.update(&self.pose, command, self.dt);
        self.pose = new_pose;
        let observations = self.sensor.observe(&new_pose, &self.landmarks);

        log::trace!(
            "step: pose=({:.3}, {:.3}, {:.3}), {} observations",
            new_pose.x,
            new_pose.y,
            new_pose.theta,
            observations.len()
        );

        Ok((new_pose, observations))
    }

    /// Current pose.
    pub fn pose(&self) -> Pose2D {
        self.pose
    }

    /// Fixed time step in seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// The landmark table (read-only).
    pub fn landmarks(&self) -> &LandmarkMap {
        &self.landmarks
    }
}
