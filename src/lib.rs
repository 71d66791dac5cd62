//! YantraSim - Discrete-time 2D robot motion and sensing simulator
//!
//! Generates synthetic trajectory and landmark range-bearing measurement
//! data for localization/SLAM experimentation.
//!
//! # Architecture
//!
//! The crate is organized into 4 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      io/                            │  ← Trace export
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    engine/                          │  ← Stateful stepping
//! │                  (Simulator)                        │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                  algorithms/                        │  ← Pure models
//! │          (motion, sensing, noise)                   │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                 (types, math)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use yantra_sim::{Landmark, LandmarkMap, Pose2D, Simulator, Twist2D};
//!
//! let landmarks: LandmarkMap = [Landmark::new("a", 1.0, 1.0)].into_iter().collect();
//! let mut sim = Simulator::new(Pose2D::identity(), 1.0, landmarks).unwrap();
//!
//! let (pose, observations) = sim.step(Some(&Twist2D::new(0.4, 0.0))).unwrap();
//! assert!((pose.x - 0.4).abs() < 1e-6);
//! assert_eq!(observations.len(), 1);
//! ```
//!
//! The simulator is deterministic by default. Both models accept a
//! pluggable [`Noise`](algorithms::Noise) stage for generating corrupted
//! datasets; the default is the identity.

// Layer 1: Core foundation (no internal deps)
pub mod core;

// Layer 2: Pure simulation models (depends on core)
pub mod algorithms;

// Layer 3: Stateful engine (depends on core, algorithms)
pub mod engine;

// Layer 4: I/O infrastructure (depends on all layers)
pub mod io;

// Configuration and errors
pub mod config;
pub mod error;

// Convenience re-exports (flat namespace for common use)

// Core types
pub use core::math;
pub use core::types::{Landmark, LandmarkMap, Observation, Point2D, Pose2D, Twist2D};

// Algorithms
pub use algorithms::{
    GaussianPoseNoise, GaussianRangeNoise, LcgRng, MotionModel, NoNoise, Noise, RangeBearingModel,
};

// Engine
pub use engine::Simulator;

// I/O
pub use io::{measurement_endpoint, SimTrace};

// Configuration and errors
pub use config::Config;
pub use error::{Result, SimError};
