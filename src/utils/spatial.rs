//! # Spatial Queries
//!
//! Direction helpers, axis-aligned bounds containment and view-frustum tests.

use crate::utils::with::Vec3With;
use macroquad::math::{Mat4, Vec3};

/// Unit direction from `from` to `to`, or zero if they coincide.
pub fn direction_to(from: Vec3, to: Vec3) -> Vec3 {
    (to - from).normalize_or_zero()
}

/// Like [`direction_to`] with both points flattened onto the XZ plane.
pub fn xz_direction_to(from: Vec3, to: Vec3) -> Vec3 {
    (to.with_y(0.0) - from.with_y(0.0)).normalize_or_zero()
}

/// Absolute height difference between two points.
pub fn y_difference(a: Vec3, b: Vec3) -> f32 {
    (a.y - b.y).abs()
}

/// Axis-aligned box stored as a center and half-size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub center: Vec3,
    pub extents: Vec3,
}

impl Bounds {
    /// Creates bounds from a center and half-size.
    pub fn new(center: Vec3, extents: Vec3) -> Self {
        Self {
            center,
            extents: extents.abs(),
        }
    }

    /// Creates bounds from two opposite corners in any order.
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self::new((a + b) / 2.0, (b - a) / 2.0)
    }

    /// Smallest corner.
    pub fn min(&self) -> Vec3 {
        self.center - self.extents
    }

    /// Largest corner.
    pub fn max(&self) -> Vec3 {
        self.center + self.extents
    }

    /// Checks whether `point` lies inside or on the surface.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min()).all() && point.cmple(self.max()).all()
    }

    /// Checks whether `other` lies entirely inside these bounds.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains_point(other.min()) && self.contains_point(other.max())
    }
}

/// Checks whether `point` is visible through a camera.
///
/// `view_projection` is the camera's projection times view matrix (OpenGL
/// clip conventions, as produced by `macroquad::camera::Camera3D::matrix`).
/// The point counts as visible when its viewport x and y are in `[0, 1]` and
/// it is not behind the camera. Near and far planes are not checked.
pub fn point_in_frustum(view_projection: &Mat4, point: Vec3) -> bool {
    let clip = *view_projection * point.extend(1.0);
    if clip.w <= 0.0 {
        return false;
    }

    let viewport_x = clip.x / clip.w * 0.5 + 0.5;
    let viewport_y = clip.y / clip.w * 0.5 + 0.5;
    (0.0..=1.0).contains(&viewport_x) && (0.0..=1.0).contains(&viewport_y)
}
