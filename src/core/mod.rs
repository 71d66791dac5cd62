//! Core foundation layer.
//!
//! Bottom layer of the simulator with no internal dependencies. All other
//! layers depend on core.
//!
//! # Contents
//!
//! - [`types`]: Core data types (poses, commands, landmarks, observations)
//! - [`math`]: Mathematical primitives (angle wrapping)

pub mod math;
pub mod types;
