//! Property tests for the geometry and interpolation helpers.

use iteria::{
    cardinal_direction, closest_point_on_finite_line, digit_count, line_plane_intersection,
    quaternion_angle, remap_clamped, rotate_towards, DeltaLerp,
};
use macroquad::math::{Quat, Vec2, Vec3};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Vec3> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0)
        .prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn rotation() -> impl Strategy<Value = Quat> {
    (-3.0f32..3.0, -3.0f32..3.0, -3.0f32..3.0)
        .prop_map(|(x, y, z)| Quat::from_euler(macroquad::math::EulerRot::YXZ, y, x, z))
}

proptest! {
    #[test]
    fn finite_line_result_stays_on_segment(start in point(), end in point(), query in point()) {
        prop_assume!(start.distance(end) > 1e-2);

        let closest = closest_point_on_finite_line(start, end, query);
        let length = start.distance(end);
        let tolerance = 1e-3 * (1.0 + length);

        // On the segment: the two partial lengths add up to the whole.
        prop_assert!((closest.distance(start) + closest.distance(end) - length).abs() < tolerance);
        // And nothing on the segment is closer to the query.
        let midpoint = (start + end) / 2.0;
        prop_assert!(closest.distance(query) <= midpoint.distance(query) + tolerance);
    }

    #[test]
    fn finite_line_beyond_end_returns_endpoint(start in point(), end in point(), extra in 0.1f32..50.0) {
        prop_assume!(start.distance(end) > 1e-2);

        let beyond = end + (end - start).normalize() * extra;
        prop_assert_eq!(closest_point_on_finite_line(start, end, beyond), end);

        let before = start - (end - start).normalize() * extra;
        prop_assert_eq!(closest_point_on_finite_line(start, end, before), start);
    }

    #[test]
    fn line_hits_plane(plane_point in point(), line_point in point(), direction in point()) {
        let normal = Vec3::Y;
        prop_assume!(direction.normalize_or_zero().dot(normal).abs() > 0.1);

        let hit = line_plane_intersection(plane_point, normal, line_point, direction);
        prop_assert!((hit.y - plane_point.y).abs() < 1e-2);
    }

    #[test]
    fn angle_is_within_half_turn(a in rotation(), b in rotation()) {
        let angle = quaternion_angle(a, b);
        prop_assert!((0.0..=180.0 + 1e-3).contains(&angle));
    }

    #[test]
    fn rotate_towards_never_exceeds_step(a in rotation(), b in rotation(), step in 0.5f32..90.0) {
        let before = quaternion_angle(a, b);
        let turned = rotate_towards(a, b, step);

        if step >= before {
            prop_assert_eq!(turned, b);
        } else {
            prop_assert!(quaternion_angle(a, turned) <= step + 0.05);
            prop_assert!(quaternion_angle(turned, b) <= before + 0.05);
        }
    }

    #[test]
    fn scalar_delta_lerp_never_overshoots(
        from in -100.0f32..100.0,
        to in -100.0f32..100.0,
        speed in 0.1f32..20.0,
        dt in 0.001f32..0.1,
    ) {
        let mut current = from;
        let mut gap = (to - current).abs();
        for _ in 0..100 {
            current = current.delta_lerp(to, speed, &dt);
            let next_gap = (to - current).abs();
            prop_assert!(next_gap <= gap);
            gap = next_gap;
        }
        prop_assert!(current >= from.min(to) && current <= from.max(to));
    }

    #[test]
    fn remap_clamped_stays_in_bounds(value in -1.0e3f32..1.0e3, low in -10.0f32..10.0, high in -10.0f32..10.0) {
        let result = remap_clamped(value, 0.0, 1.0, low, high);
        prop_assert!(result >= low.min(high) && result <= low.max(high));
    }

    #[test]
    fn digit_count_matches_formatting(n in any::<i32>()) {
        prop_assert_eq!(digit_count(n) as usize, n.to_string().len());
    }

    #[test]
    fn cardinal_direction_interior_angles(sector in 0i32..4, offset in -0.7f32..0.7) {
        let angle = sector as f32 * std::f32::consts::FRAC_PI_2 + offset;
        let direction = Vec2::new(angle.cos(), angle.sin());
        prop_assert_eq!(cardinal_direction(direction), sector);
    }
}

#[test]
fn worked_examples() {
    assert_eq!(
        closest_point_on_finite_line(
            Vec3::ZERO,
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(15.0, 0.0, 0.0)
        ),
        Vec3::new(10.0, 0.0, 0.0)
    );
    assert_eq!(
        line_plane_intersection(
            Vec3::ZERO,
            Vec3::Y,
            Vec3::new(0.0, 5.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0)
        ),
        Vec3::ZERO
    );

    let quarter = Quat::from_rotation_y(90f32.to_radians());
    let partial = rotate_towards(Quat::IDENTITY, quarter, 30.0);
    assert!(quaternion_angle(partial, Quat::from_rotation_y(30f32.to_radians())) < 1e-2);
    assert_eq!(rotate_towards(Quat::IDENTITY, quarter, 200.0), quarter);

    for (n, digits) in [(0, 1), (9, 1), (10, 2), (-5, 2), (-10, 3), (2_147_483_647, 10)] {
        assert_eq!(digit_count(n), digits);
    }

    assert_eq!(cardinal_direction(Vec2::new(1.0, 0.0)), 0);
    assert_eq!(cardinal_direction(Vec2::new(0.0, 1.0)), 1);
    assert_eq!(cardinal_direction(Vec2::new(-1.0, 0.0)), 2);
    assert_eq!(cardinal_direction(Vec2::new(0.0, -1.0)), 3);
}
