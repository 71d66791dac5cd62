//! Range-bearing landmark sensor model.
//!
//! Produces one range-bearing-signature observation per landmark
//! (Probabilistic Robotics, Thrun et al., ch. 6.6):
//!
//! ```text
//! range   = sqrt((lx - x)² + (ly - y)²)
//! bearing = wrap(atan2(ly - y, lx - x) - θ)
//! ```
//!
//! Observations are returned sorted ascending by range. The sort is stable,
//! so landmarks at identical range keep their insertion order in the map.

use crate::algorithms::noise::{NoNoise, Noise};
use crate::core::math::wrap_angle;
use crate::core::types::{LandmarkMap, Observation, Pose2D};

/// Range-bearing sensor with a pluggable range-noise stage.
///
/// Deterministic with the default [`NoNoise`]. Range noise, when plugged
/// in, is applied per landmark before sorting; perturbed ranges are clamped
/// at zero to keep the non-negativity contract.
#[derive(Debug, Clone, Default)]
pub struct RangeBearingModel<N = NoNoise> {
    noise: N,
}

impl RangeBearingModel {
    /// Create a deterministic sensor model (identity noise).
    pub fn new() -> Self {
        Self { noise: NoNoise }
    }
}

impl<N: Noise<f32>> RangeBearingModel<N> {
    /// Create a sensor model with a custom range-noise stage.
    pub fn with_noise(noise: N) -> Self {
        Self { noise }
    }

    /// Observe every landmark from the given pose.
    ///
    /// Returns one observation per landmark, sorted ascending by range.
    /// An empty landmark map yields an empty result.
    pub fn observe(&mut self, pose: &Pose2D, landmarks: &LandmarkMap) -> Vec<Observation> {
        let mut observations: Vec<Observation> = Vec::with_capacity(landmarks.len());

        for landmark in landmarks.iter() {
            let dx = landmark.position.x - pose.x;
            let dy = landmark.position.y - pose.y;
            let range = self.noise.perturb((dx * dx + dy * dy).sqrt()).max(0.0);
            let bearing = wrap_angle(dy.atan2(dx) - pose.theta);
            observations.push(Observation::new(range, bearing, landmark.id.clone()));
        }

        // Stable sort: equal ranges keep landmark insertion order
        observations.sort_by(|a, b| a.range.total_cmp(&b.range));
        observations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::noise::{GaussianRangeNoise, LcgRng};
    use crate::core::types::Landmark;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    fn grid_landmarks() -> LandmarkMap {
        [
            Landmark::new("a", 1.0, 1.0),
            Landmark::new("b", 2.0, 1.0),
            Landmark::new("c", 3.0, 1.0),
            Landmark::new("d", 1.0, 2.0),
            Landmark::new("e", 1.0, 2.0),
            Landmark::new("f", 1.0, 3.0),
            Landmark::new("g", 2.0, 2.0),
            Landmark::new("h", 3.0, 3.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_empty_map_yields_empty_result() {
        let mut model = RangeBearingModel::new();
        let observations = model.observe(&Pose2D::identity(), &LandmarkMap::new());
        assert!(observations.is_empty());
    }

    #[test]
    fn test_one_observation_per_landmark() {
        let mut model = RangeBearingModel::new();
        let landmarks = grid_landmarks();
        let observations = model.observe(&Pose2D::identity(), &landmarks);
        assert_eq!(observations.len(), landmarks.len());
    }

    #[test]
    fn test_single_landmark_range_and_bearing() {
        let mut model = RangeBearingModel::new();
        let landmarks: LandmarkMap = [Landmark::new("a", 1.0, 1.0)].into_iter().collect();

        let observations = model.observe(&Pose2D::identity(), &landmarks);
        assert_eq!(observations.len(), 1);
        assert_relative_eq!(observations[0].range, 2.0_f32.sqrt(), epsilon = 1e-6);
        assert_relative_eq!(observations[0].bearing, FRAC_PI_4, epsilon = 1e-6);
        assert_eq!(observations[0].id, "a");
    }

    #[test]
    fn test_bearing_is_relative_to_heading() {
        let mut model = RangeBearingModel::new();
        let landmarks: LandmarkMap = [Landmark::new("a", 1.0, 1.0)].into_iter().collect();

        // Facing the landmark directly: bearing 0
        let observations = model.observe(&Pose2D::new(0.0, 0.0, FRAC_PI_4), &landmarks);
        assert_relative_eq!(observations[0].bearing, 0.0, epsilon = 1e-6);

        // Facing +Y: landmark is π/4 clockwise
        let observations = model.observe(&Pose2D::new(0.0, 0.0, FRAC_PI_2), &landmarks);
        assert_relative_eq!(observations[0].bearing, -FRAC_PI_4, epsilon = 1e-6);
    }

    #[test]
    fn test_bearing_wrapped_for_unbounded_heading() {
        let mut model = RangeBearingModel::new();
        let landmarks = grid_landmarks();

        // Heading far outside [-π, π], as accumulated over many steps
        let pose = Pose2D::new(0.0, 0.0, 17.0);
        for obs in model.observe(&pose, &landmarks) {
            assert!(
                obs.bearing > -PI && obs.bearing <= PI,
                "Bearing out of interval: {}",
                obs.bearing
            );
        }
    }

    #[test]
    fn test_zero_range_at_coincident_landmark() {
        let mut model = RangeBearingModel::new();
        let landmarks: LandmarkMap = [Landmark::new("here", 1.0, 2.0)].into_iter().collect();

        let observations = model.observe(&Pose2D::new(1.0, 2.0, 0.3), &landmarks);
        assert_eq!(observations[0].range, 0.0);
        // atan2(0, 0) = 0, so bearing is just the wrapped negated heading
        assert_relative_eq!(observations[0].bearing, -0.3, epsilon = 1e-6);
    }

    #[test]
    fn test_observations_sorted_by_range() {
        let mut model = RangeBearingModel::new();
        let observations = model.observe(&Pose2D::identity(), &grid_landmarks());
        for pair in observations.windows(2) {
            assert!(
                pair[0].range <= pair[1].range,
                "Out of order: {} > {}",
                pair[0].range,
                pair[1].range
            );
        }
    }

    #[test]
    fn test_equal_ranges_keep_insertion_order() {
        let mut model = RangeBearingModel::new();
        // "d" and "e" share the position (1, 2): identical ranges
        let observations = model.observe(&Pose2D::identity(), &grid_landmarks());

        let d_idx = observations.iter().position(|o| o.id == "d").unwrap();
        let e_idx = observations.iter().position(|o| o.id == "e").unwrap();
        assert_eq!(observations[d_idx].range, observations[e_idx].range);
        assert!(d_idx < e_idx, "Stable sort must keep d before e");
    }

    #[test]
    fn test_range_noise_clamped_non_negative() {
        let noise = GaussianRangeNoise::new(5.0, LcgRng::new(42));
        let mut model = RangeBearingModel::with_noise(noise);
        let landmarks: LandmarkMap = [Landmark::new("a", 0.1, 0.0)].into_iter().collect();

        for _ in 0..200 {
            let observations = model.observe(&Pose2D::identity(), &landmarks);
            assert!(observations[0].range >= 0.0);
        }
    }
}
