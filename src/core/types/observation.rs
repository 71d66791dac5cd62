//! Range-bearing-signature observation type.

use serde::{Deserialize, Serialize};

/// A single landmark measurement: range, bearing, signature.
///
/// The range-bearing-signature model from Probabilistic Robotics (Thrun et
/// al., ch. 6.6). Range is the Euclidean distance from the robot to the
/// landmark, bearing is the angle from the robot heading to the landmark
/// wrapped to (-π, π], and the signature is the landmark id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Distance to the landmark in meters, always >= 0
    pub range: f32,
    /// Angle from robot heading to the landmark in radians, in (-π, π]
    pub bearing: f32,
    /// Identifier of the observed landmark
    pub id: String,
}

impl Observation {
    /// Create a new observation.
    pub fn new(range: f32, bearing: f32, id: impl Into<String>) -> Self {
        Self {
            range,
            bearing,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_serde_roundtrip() {
        let obs = Observation::new(1.25, -0.3, "a");
        let json = serde_json::to_string(&obs).unwrap();
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert_eq!(obs, back);
    }
}
