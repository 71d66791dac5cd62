//! Simulation run recording and export.
//!
//! A [`SimTrace`] collects the pose and observation history of a run. The
//! exports are the seam to external visualization: CSV files readable by
//! plotting scripts, or one JSON document. The core never renders anything
//! itself.
//!
//! # Output files
//!
//! - `poses.csv`: step, x, y, theta
//! - `observations.csv`: step, landmark_id, range, bearing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::{Observation, Point2D, Pose2D};
use crate::error::Result;

/// Recorded history of one simulation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimTrace {
    /// Pose after each step, in step order
    pub states: Vec<Pose2D>,
    /// Observation list returned by each step, in step order
    pub measurements: Vec<Vec<Observation>>,
}

impl SimTrace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result of one step.
    pub fn push(&mut self, pose: Pose2D, observations: Vec<Observation>) {
        self.states.push(pose);
        self.measurements.push(observations);
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The most recent pose and its observations, if any.
    pub fn latest(&self) -> Option<(&Pose2D, &[Observation])> {
        let pose = self.states.last()?;
        let observations = self.measurements.last()?;
        Some((pose, observations.as_slice()))
    }

    /// Write `poses.csv` and `observations.csv` into `dir`.
    pub fn write_csv(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;

        let mut poses = BufWriter::new(File::create(dir.join("poses.csv"))?);
        writeln!(poses, "step,x,y,theta")?;
        for (step, pose) in self.states.iter().enumerate() {
            writeln!(poses, "{},{},{},{}", step, pose.x, pose.y, pose.theta)?;
        }
        poses.flush()?;

        let mut observations = BufWriter::new(File::create(dir.join("observations.csv"))?);
        writeln!(observations, "step,landmark_id,range,bearing")?;
        for (step, list) in self.measurements.iter().enumerate() {
            for obs in list {
                writeln!(
                    observations,
                    "{},{},{},{}",
                    step, obs.id, obs.range, obs.bearing
                )?;
            }
        }
        observations.flush()?;

        log::info!("Wrote {} steps to {}", self.len(), dir.display());
        Ok(())
    }

    /// Serialize the whole trace as a JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a trace from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Reproject an observation back to the world position it was taken of.
///
/// Inverse of the sensor model, useful for drawing measurement rays:
///
/// ```text
/// x = pose.x + cos(θ + bearing) · range
/// y = pose.y + sin(θ + bearing) · range
/// ```
pub fn measurement_endpoint(pose: &Pose2D, observation: &Observation) -> Point2D {
    let angle = pose.theta + observation.bearing;
    Point2D::new(
        pose.x + angle.cos() * observation.range,
        pose.y + angle.sin() * observation.range,
    )
}
