//! Mathematical primitives for 2D simulation.
//!
//! Angle wrapping for relative bearing computation.

use std::f32::consts::PI;

/// Wrap angle to (-π, π].
///
/// Used for sensor bearings, which are always reported relative to the
/// robot heading. The heading itself is never wrapped, so the input here
/// may be arbitrarily far outside one revolution; the modular reduction
/// handles that before the final boundary adjustment.
///
/// # Example
/// ```
/// use yantra_sim::core::math::wrap_angle;
/// use std::f32::consts::PI;
///
/// assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-6);
/// assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
/// ```
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let mut a = angle % (2.0 * PI);
    if a > PI {
        a -= 2.0 * PI;
    } else if a <= -PI {
        a += 2.0 * PI;
    }
    a
}
