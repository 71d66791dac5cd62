//! Pose and point types for the 2D simulator.

use serde::{Deserialize, Serialize};

/// A 2D point in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters
    pub y: f32,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared distance to another point (avoids sqrt).
    #[inline]
    pub fn distance_squared(&self, other: &Point2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// True if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Robot pose in 2D space.
///
/// Represents position (x, y) in meters and heading (theta) in radians.
///
/// Theta is deliberately NOT wrapped: the motion update integrates angular
/// velocity directly, so the heading accumulates across steps and can leave
/// [-π, π]. Sensor bearings are re-derived relative to the heading and
/// wrapped independently, so downstream measurements are unaffected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters
    pub x: f32,
    /// Y position in meters
    pub y: f32,
    /// Heading in radians, unwrapped
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose. The heading is stored as given, without wrapping.
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Identity pose at origin with zero heading.
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    /// Position component as a point.
    #[inline]
    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// True if all three components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.theta.is_finite()
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_point_distance() {
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
        assert_relative_eq!(a.distance_squared(&b), 25.0);
    }

    #[test]
    fn test_point_distance_to_self_is_zero() {
        let p = Point2D::new(1.5, -2.5);
        assert_eq!(p.distance(&p), 0.0);
    }

    #[test]
    fn test_pose_heading_not_wrapped() {
        // Headings outside [-π, π] must be preserved exactly.
        let pose = Pose2D::new(0.0, 0.0, 5.0 * PI);
        assert_relative_eq!(pose.theta, 5.0 * PI);

        let pose = Pose2D::new(0.0, 0.0, -7.3);
        assert_relative_eq!(pose.theta, -7.3);
    }

    #[test]
    fn test_pose_identity() {
        let pose = Pose2D::identity();
        assert_eq!(pose.x, 0.0);
        assert_eq!(pose.y, 0.0);
        assert_eq!(pose.theta, 0.0);
        assert_eq!(Pose2D::default(), pose);
    }

    #[test]
    fn test_pose_is_finite() {
        assert!(Pose2D::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Pose2D::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Pose2D::new(0.0, f32::INFINITY, 0.0).is_finite());
        assert!(!Pose2D::new(0.0, 0.0, f32::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_pose_serde_roundtrip() {
        let pose = Pose2D::new(1.25, -0.5, 2.0);
        let json = serde_json::to_string(&pose).unwrap();
        let back: Pose2D = serde_json::from_str(&json).unwrap();
        assert_eq!(pose, back);
    }
}
