//! # Frame-Rate-Independent Interpolation
//!
//! Exponential smoothing that converges at the same rate no matter how often
//! it is called, as long as each call receives the real time since the last one.
//!
//! The blend factor for one step is `1 - (1 - sharpness)^(delta_time * speed)`.
//! Two steps of `dt / 2` leave the same remaining fraction as one step of `dt`,
//! so the trajectory does not depend on the frame rate.

use crate::config::DEFAULT_SHARPNESS;
use macroquad::color::Color;
use macroquad::math::{Quat, Vec3};

/// Source of "seconds elapsed since the last update".
///
/// Implemented for `f32` so a fixed step can be passed directly, which keeps
/// tests and fixed-timestep simulations deterministic.
pub trait FrameClock {
    /// Seconds since the previous frame.
    fn delta_time(&self) -> f32;
}

impl FrameClock for f32 {
    fn delta_time(&self) -> f32 {
        *self
    }
}

/// Reads the frame time measured by macroquad.
///
/// Only meaningful inside a running macroquad window.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroquadClock;

impl FrameClock for MacroquadClock {
    fn delta_time(&self) -> f32 {
        macroquad::time::get_frame_time()
    }
}

/// Blend factor for one frame of exponential smoothing, clamped to `[0, 1]`.
///
/// # Examples
///
/// ```
/// use iteria::delta_lerp_factor;
///
/// // With sharpness 0.5, one second at speed 1 closes half the gap.
/// assert!((delta_lerp_factor(1.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
/// ```
pub fn delta_lerp_factor(delta_time: f32, speed_factor: f32, sharpness_factor: f32) -> f32 {
    (1.0 - (1.0 - sharpness_factor).powf(delta_time * speed_factor)).clamp(0.0, 1.0)
}

/// Values that can be smoothed towards a target once per frame.
pub trait DeltaLerp: Sized {
    /// Interpolates towards `to` by `t`, which is already in `[0, 1]`.
    fn lerp_towards(self, to: Self, t: f32) -> Self;

    /// Smooths towards `to` using the default sharpness.
    fn delta_lerp<C>(self, to: Self, speed_factor: f32, clock: &C) -> Self
    where
        C: FrameClock + ?Sized,
    {
        self.delta_lerp_sharpness(to, speed_factor, DEFAULT_SHARPNESS, clock)
    }

    /// Smooths towards `to` with an explicit sharpness in `(0, 1)`.
    ///
    /// Higher sharpness closes more of the gap per second.
    fn delta_lerp_sharpness<C>(
        self,
        to: Self,
        speed_factor: f32,
        sharpness_factor: f32,
        clock: &C,
    ) -> Self
    where
        C: FrameClock + ?Sized,
    {
        let t = delta_lerp_factor(clock.delta_time(), speed_factor, sharpness_factor);
        self.lerp_towards(to, t)
    }
}

impl DeltaLerp for f32 {
    fn lerp_towards(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl DeltaLerp for Vec3 {
    fn lerp_towards(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

/// Normalized lerp along the shorter arc.
impl DeltaLerp for Quat {
    fn lerp_towards(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

impl DeltaLerp for Color {
    fn lerp_towards(self, to: Self, t: f32) -> Self {
        Color::new(
            self.r + (to.r - self.r) * t,
            self.g + (to.g - self.g) * t,
            self.b + (to.b - self.b) * t,
            self.a + (to.a - self.a) * t,
        )
    }
}

/// Scalar smoothing with separate speeds for falling and rising.
///
/// Uses `speed_down` while `from > to`, otherwise `speed_up`.
pub fn delta_lerp_variable_speed<C>(
    from: f32,
    to: f32,
    speed_down: f32,
    speed_up: f32,
    sharpness_factor: f32,
    clock: &C,
) -> f32
where
    C: FrameClock + ?Sized,
{
    let speed = if from > to { speed_down } else { speed_up };
    from.delta_lerp_sharpness(to, speed, sharpness_factor, clock)
}
