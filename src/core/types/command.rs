//! Velocity command type.

use serde::{Deserialize, Serialize};

/// 2D body-frame velocity command: linear and angular components.
///
/// Applied by the motion model for exactly one time step. Commands are
/// transient; the simulator does not retain them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Twist2D {
    /// Linear velocity in m/s (positive = forward along the heading)
    pub linear: f32,
    /// Angular velocity in rad/s (positive = counter-clockwise)
    pub angular: f32,
}

impl Twist2D {
    /// Create a new velocity command.
    #[inline]
    pub fn new(linear: f32, angular: f32) -> Self {
        Self { linear, angular }
    }

    /// Zero command (robot holds its pose).
    #[inline]
    pub fn zero() -> Self {
        Self {
            linear: 0.0,
            angular: 0.0,
        }
    }

    /// True if both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.linear.is_finite() && self.angular.is_finite()
    }
}

impl Default for Twist2D {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_command() {
        let cmd = Twist2D::zero();
        assert_eq!(cmd.linear, 0.0);
        assert_eq!(cmd.angular, 0.0);
        assert_eq!(Twist2D::default(), cmd);
    }

    #[test]
    fn test_is_finite() {
        assert!(Twist2D::new(0.4, -1.2).is_finite());
        assert!(!Twist2D::new(f32::NAN, 0.0).is_finite());
        assert!(!Twist2D::new(0.0, f32::INFINITY).is_finite());
    }
}
