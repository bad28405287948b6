//! # Iteria
//!
//! Stateless helpers for real-time 3D games.
//!
//! ## Overview
//!
//! - **Distance**: [`SqrDist`], a distance kept in squared space so that
//!   threshold checks and nearest-point searches never take a square root
//! - **Math**: line/plane intersection, closest points on lines, Bezier curves,
//!   quaternion angles and capped turning, frame-rate-independent smoothing,
//!   cone/circle/sign sampling, remapping and digit counting
//! - **Utils**: enum cycling, index wrapping, `with_*` component overrides,
//!   bounds containment and view-frustum checks
//!
//! Vectors, quaternions and matrices are the `glam` types re-exported by
//! `macroquad::math`. Frame time and randomness are always injected, through
//! [`FrameClock`] and [`rand::Rng`], so every helper is deterministic under test.

pub mod distance;
pub mod math;
pub mod settings;
pub mod utils;

// Core module re-exports
pub use distance::*;
pub use math::*;
pub use settings::*;
pub use utils::*;

/// Core error type for the settings layer and the demo viewer.
///
/// The math helpers never return errors; they panic on caller bugs.
#[derive(thiserror::Error, Debug)]
pub enum IteriaError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Settings are out of range
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Result type used throughout the Iteria codebase.
pub type IteriaResult<T> = Result<T, IteriaError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tuning constants.
pub mod config {
    /// Sharpness used by `delta_lerp` when none is given
    pub const DEFAULT_SHARPNESS: f32 = 0.5;

    /// Angle in degrees below which `rotate_towards` snaps to the target
    pub const DEFAULT_SNAP_ANGLE_DEGREES: f32 = 0.001;

    /// Default random seed for the demo viewer
    pub const DEFAULT_SEED: u64 = 42;

    /// Default full opening angle of the demo cone, in degrees
    pub const DEFAULT_CONE_DEGREES: f32 = 30.0;

    /// Default number of cone directions drawn per frame
    pub const DEFAULT_CONE_SAMPLES: usize = 64;

    /// Upper bound on cone directions drawn per frame
    pub const MAX_CONE_SAMPLES: usize = 4096;

    /// Default turret turn rate, in degrees per second
    pub const DEFAULT_TURN_RATE_DEGREES: f32 = 90.0;

    /// Default follow-camera speed factor
    pub const DEFAULT_FOLLOW_SPEED: f32 = 4.0;

    /// Default seconds between target moves
    pub const DEFAULT_RETARGET_SECONDS: f32 = 2.5;
}
