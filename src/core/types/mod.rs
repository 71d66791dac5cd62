//! Core data types for the simulator.
//!
//! - [`Point2D`]: 2D point in meters
//! - [`Pose2D`]: Robot pose (x, y, theta) in meters and radians
//! - [`Twist2D`]: Velocity command (linear and angular)
//! - [`Landmark`] / [`LandmarkMap`]: Fixed, identified environment points
//! - [`Observation`]: Range-bearing-signature measurement

mod command;
mod landmark;
mod observation;
mod pose;

pub use command::Twist2D;
pub use landmark::{Landmark, LandmarkMap};
pub use observation::Observation;
pub use pose::{Point2D, Pose2D};
