//! Simulation algorithms.
//!
//! The two pure models of the simulator plus the noise capability they
//! share:
//!
//! - [`motion_model`]: Linearized unicycle kinematic update
//! - [`sensor_model`]: Range-bearing landmark sensing
//! - [`noise`]: Pluggable perturbation (identity by default)

pub mod motion_model;
pub mod noise;
pub mod sensor_model;

pub use motion_model::MotionModel;
pub use noise::{GaussianPoseNoise, GaussianRangeNoise, LcgRng, NoNoise, Noise, Rng};
pub use sensor_model::RangeBearingModel;
