//! # Rotation Helpers
//!
//! Angular distance between rotations and capped turning towards a target.

use crate::config::DEFAULT_SNAP_ANGLE_DEGREES;
use macroquad::math::Quat;
use std::f32::consts::PI;

/// Angle in degrees between two rotations, in `[0, 180]`.
///
/// # Examples
///
/// ```
/// use iteria::quaternion_angle;
/// use macroquad::math::Quat;
///
/// let quarter_turn = Quat::from_rotation_y(90f32.to_radians());
/// assert!((quaternion_angle(Quat::IDENTITY, quarter_turn) - 90.0).abs() < 1e-3);
/// ```
pub fn quaternion_angle(a: Quat, b: Quat) -> f32 {
    let difference = a.inverse() * b;
    let angle = 360.0 * difference.xyz().length().atan2(difference.w) / PI;

    // q and -q are the same rotation; fold onto the shorter arc.
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Turns `from` towards `to` by at most `max_degrees`.
///
/// Snaps to `to` once the remaining angle is under
/// [`DEFAULT_SNAP_ANGLE_DEGREES`](crate::config::DEFAULT_SNAP_ANGLE_DEGREES).
pub fn rotate_towards(from: Quat, to: Quat, max_degrees: f32) -> Quat {
    rotate_towards_with_snap(from, to, max_degrees, DEFAULT_SNAP_ANGLE_DEGREES)
}

/// Turns `from` towards `to` by at most `max_degrees`.
///
/// Returns `to` unchanged when the angle between them is below
/// `min_angle_before_snapping`, or when `max_degrees` covers the whole angle.
/// Otherwise slerps by `max_degrees / angle`.
pub fn rotate_towards_with_snap(
    from: Quat,
    to: Quat,
    max_degrees: f32,
    min_angle_before_snapping: f32,
) -> Quat {
    let angle = quaternion_angle(from, to);

    if angle >= min_angle_before_snapping && max_degrees < angle {
        return from.slerp(to, max_degrees / angle);
    }

    log::trace!("rotate_towards snapped: angle {angle} <= step {max_degrees}");
    to
}

#[cfg(test)]
mod tests {
    use super::*;

    fn degrees_y(degrees: f32) -> Quat {
        Quat::from_rotation_y(degrees.to_radians())
    }

    #[test]
    fn test_angle_identity() {
        assert!(quaternion_angle(Quat::IDENTITY, Quat::IDENTITY).abs() < 1e-4);
    }

    #[test]
    fn test_angle_quarter_turn() {
        let angle = quaternion_angle(Quat::IDENTITY, degrees_y(90.0));
        assert!((angle - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_angle_folds_to_short_arc() {
        let angle = quaternion_angle(Quat::IDENTITY, degrees_y(270.0));
        assert!((angle - 90.0).abs() < 1e-3, "got {angle}");

        // Negated quaternion is the same rotation.
        let angle = quaternion_angle(Quat::IDENTITY, -degrees_y(40.0));
        assert!((angle - 40.0).abs() < 1e-3, "got {angle}");
    }

    #[test]
    fn test_angle_is_symmetric() {
        let a = degrees_y(10.0);
        let b = Quat::from_rotation_x(0.7);
        assert!((quaternion_angle(a, b) - quaternion_angle(b, a)).abs() < 1e-3);
    }

    #[test]
    fn test_rotate_towards_partial_step() {
        let result = rotate_towards(Quat::IDENTITY, degrees_y(90.0), 30.0);
        assert!(quaternion_angle(result, degrees_y(30.0)) < 1e-2);
    }

    #[test]
    fn test_rotate_towards_snaps_when_step_covers_angle() {
        let target = degrees_y(90.0);
        assert_eq!(rotate_towards(Quat::IDENTITY, target, 200.0), target);
        assert_eq!(rotate_towards(Quat::IDENTITY, target, 90.5), target);
    }

    #[test]
    fn test_rotate_towards_snaps_below_threshold() {
        let target = degrees_y(0.5);
        assert_eq!(
            rotate_towards_with_snap(Quat::IDENTITY, target, 0.1, 1.0),
            target
        );
    }

    #[test]
    fn test_rotate_towards_reaches_target() {
        let target = Quat::from_rotation_x(1.2) * degrees_y(45.0);
        let mut current = Quat::IDENTITY;
        for _ in 0..20 {
            current = rotate_towards(current, target, 10.0);
        }
        assert_eq!(current, target);
    }
}
