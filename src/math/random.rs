//! # Random Sampling
//!
//! Direction, circle and sign sampling on top of an injected [`rand::Rng`].

use macroquad::math::{Mat3, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Samples a unit direction inside a cone around +Z.
///
/// `degrees` is the full opening angle of the cone, so the polar angle from +Z
/// is at most `degrees / 2`. Uses spherical-cap sampling: `z` is drawn
/// uniformly from `[cos(half_angle), 1]`, which spreads directions evenly over
/// the cap. The x and y components are then multiplied by `x_scale` and
/// `y_scale`; with scales other than 1 the result is no longer unit length.
pub fn random_inside_cone<R>(rng: &mut R, degrees: f32, x_scale: f32, y_scale: f32) -> Vec3
where
    R: Rng + ?Sized,
{
    let half_angle = degrees * PI / 360.0;
    let z: f32 = rng.gen_range(half_angle.cos()..=1.0);
    let phi: f32 = rng.gen_range(0.0..TAU);
    let ring = (1.0 - z * z).max(0.0).sqrt();

    Vec3::new(ring * phi.cos() * x_scale, ring * phi.sin() * y_scale, z)
}

/// Samples inside a cone pointing along `forward`, with local +Y turned towards `up`.
pub fn random_inside_cone_towards<R>(
    rng: &mut R,
    forward: Vec3,
    up: Vec3,
    degrees: f32,
    x_scale: f32,
    y_scale: f32,
) -> Vec3
where
    R: Rng + ?Sized,
{
    let local = random_inside_cone(rng, degrees, x_scale, y_scale);
    look_basis(forward, up) * local
}

/// Rotation basis whose +Z is `forward` and whose +Y leans towards `up`.
pub(crate) fn look_basis(forward: Vec3, up: Vec3) -> Mat3 {
    let z = forward.normalize_or_zero();
    if z == Vec3::ZERO {
        log::debug!("look basis with zero forward, using identity");
        return Mat3::IDENTITY;
    }

    let mut x = up.cross(z).normalize_or_zero();
    if x == Vec3::ZERO {
        // `up` is parallel to `forward`; any perpendicular axis will do.
        log::debug!("look basis with up parallel to forward {forward}");
        x = z.any_orthonormal_vector();
    }
    let y = z.cross(x);

    Mat3::from_cols(x, y, z)
}

/// Uniformly random point on the unit circle in the XZ plane.
pub fn random_on_unit_circle<R>(rng: &mut R) -> Vec3
where
    R: Rng + ?Sized,
{
    let angle: f32 = rng.gen_range(0.0..TAU);
    Vec3::new(angle.sin(), 0.0, angle.cos())
}

/// Returns `1` or `-1` with equal probability.
pub fn random_sign<R>(rng: &mut R) -> i32
where
    R: Rng + ?Sized,
{
    if rng.gen_bool(0.5) {
        1
    } else {
        -1
    }
}
