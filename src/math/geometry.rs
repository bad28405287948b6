//! # Line and Curve Geometry
//!
//! Line/plane intersection, closest-point projection and Bezier evaluation.

use macroquad::math::Vec3;

/// Finds where a line crosses a plane.
///
/// The line direction does not need to be normalized.
///
/// # Panics
///
/// Panics if the line runs parallel to the plane (including a zero direction),
/// since there is no single intersection point.
///
/// # Examples
///
/// ```
/// use iteria::line_plane_intersection;
/// use macroquad::math::Vec3;
///
/// let hit = line_plane_intersection(Vec3::ZERO, Vec3::Y, Vec3::new(0.0, 5.0, 0.0), -Vec3::Y);
/// assert_eq!(hit, Vec3::ZERO);
/// ```
pub fn line_plane_intersection(
    plane_point: Vec3,
    plane_normal: Vec3,
    line_point: Vec3,
    line_direction: Vec3,
) -> Vec3 {
    let direction = line_direction.normalize_or_zero();
    let denominator = plane_normal.dot(direction);
    assert!(
        denominator != 0.0,
        "line direction {line_direction} is parallel to plane with normal {plane_normal}"
    );

    let t = (plane_normal.dot(plane_point) - plane_normal.dot(line_point)) / denominator;
    line_point + direction * t
}

/// Projects `point` onto the infinite line through `line_start` and `line_end`.
///
/// When the two line points coincide the direction collapses to zero and the
/// result is `line_start`.
pub fn closest_point_on_infinite_line(line_start: Vec3, line_end: Vec3, point: Vec3) -> Vec3 {
    let direction = (line_end - line_start).normalize_or_zero();
    let along = (point - line_start).dot(direction);
    line_start + direction * along
}

/// Projects `point` onto the segment from `line_start` to `line_end`.
///
/// Points beyond either end snap to that end.
///
/// # Examples
///
/// ```
/// use iteria::closest_point_on_finite_line;
/// use macroquad::math::Vec3;
///
/// let end = Vec3::new(10.0, 0.0, 0.0);
/// assert_eq!(closest_point_on_finite_line(Vec3::ZERO, end, Vec3::new(15.0, 0.0, 0.0)), end);
/// ```
pub fn closest_point_on_finite_line(line_start: Vec3, line_end: Vec3, point: Vec3) -> Vec3 {
    let offset = line_end - line_start;
    let length = offset.length();
    let direction = offset.normalize_or_zero();
    let along = (point - line_start).dot(direction).clamp(0.0, length);

    // The far end is returned as-is so callers can compare it exactly.
    if along >= length {
        return line_end;
    }
    line_start + direction * along
}

/// Evaluates a quadratic Bezier curve from `a` to `b` with one control point.
///
/// `t` is clamped to `[0, 1]`.
pub fn bezier_quadratic(a: Vec3, b: Vec3, control: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    a.lerp(control, t).lerp(control.lerp(b, t), t)
}

/// Quadratic Bezier whose control point is the midpoint of `a` and `b` moved by `offset`.
pub fn bezier_quadratic_offset(a: Vec3, b: Vec3, offset: Vec3, t: f32) -> Vec3 {
    let control = (a + b) / 2.0 + offset;
    bezier_quadratic(a, b, control, t)
}

/// Evaluates a cubic Bezier curve from `a` to `b` with two control points.
///
/// `t` is clamped to `[0, 1]`.
pub fn bezier_cubic(a: Vec3, b: Vec3, control_a: Vec3, control_b: Vec3, t: f32) -> Vec3 {
    let t = t.clamp(0.0, 1.0);
    let ab = a.lerp(control_a, t);
    let bc = control_a.lerp(control_b, t);
    let cd = control_b.lerp(b, t);
    ab.lerp(bc, t).lerp(bc.lerp(cd, t), t)
}
