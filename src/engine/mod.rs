//! Simulation engine layer.
//!
//! Orchestrates the motion and sensor models behind a single stateful
//! object:
//!
//! - [`simulator`]: The [`Simulator`] stepping loop

pub mod simulator;

pub use simulator::Simulator;
