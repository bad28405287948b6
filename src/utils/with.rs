//! # Component Overrides
//!
//! `with_*` builders that copy a vector or color with one component replaced,
//! so `position.with_y(0.0)` reads like the intent.

use macroquad::color::Color;
use macroquad::math::{IVec2, IVec3, Vec2, Vec3, Vec4};

macro_rules! with_components {
    ($trait_name:ident, $target:ty, $scalar:ty, [$($method:ident => $field:ident),+ $(,)?]) => {
        #[doc = concat!("Component overrides for `", stringify!($target), "`.")]
        pub trait $trait_name: Sized {
            $(
                #[doc = concat!("Copy with `", stringify!($field), "` replaced.")]
                fn $method(self, $field: $scalar) -> Self;
            )+
        }

        impl $trait_name for $target {
            $(
                fn $method(mut self, $field: $scalar) -> Self {
                    self.$field = $field;
                    self
                }
            )+
        }
    };
}

with_components!(Vec2With, Vec2, f32, [with_x => x, with_y => y]);
with_components!(Vec3With, Vec3, f32, [with_x => x, with_y => y, with_z => z]);
with_components!(Vec4With, Vec4, f32, [with_x => x, with_y => y, with_z => z, with_w => w]);
with_components!(IVec2With, IVec2, i32, [with_x => x, with_y => y]);
with_components!(IVec3With, IVec3, i32, [with_x => x, with_y => y, with_z => z]);
with_components!(ColorWith, Color, f32, [with_r => r, with_g => g, with_b => b, with_a => a]);
