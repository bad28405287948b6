//! # Math Module
//!
//! Pure geometric and interpolation helpers used by gameplay code.
//!
//! Everything here is a free function over plain `glam` values (re-exported by
//! `macroquad::math`). Time and randomness are always passed in:
//! - frame-rate-independent smoothing takes a [`FrameClock`]
//! - sampling functions take any [`rand::Rng`]
//!
//! Degenerate inputs (a line parallel to a plane, an empty remap range) are
//! caller bugs. Functions either panic on them or document the garbage they
//! return; none of them return `Result`.

pub mod geometry;
pub mod lerp;
pub mod numeric;
pub mod random;
pub mod rotation;

pub use geometry::*;
pub use lerp::*;
pub use numeric::*;
pub use random::{random_inside_cone, random_inside_cone_towards, random_on_unit_circle, random_sign};
pub use rotation::*;
