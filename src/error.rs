//! Error types for simulator construction, stepping, and trace export.

use thiserror::Error;

/// Simulator errors
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Trace export failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Serialize(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
