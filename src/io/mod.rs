//! I/O infrastructure.
//!
//! - [`trace`]: Run history recording and CSV/JSON export

pub mod trace;

pub use trace::{measurement_endpoint, SimTrace};
