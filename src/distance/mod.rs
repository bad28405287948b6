//! # Distance Module
//!
//! Distance values that defer the square root until it is needed.
//!
//! Most distance checks in a game loop only need ordering ("is the enemy
//! closer than 5 units?", "which pickup is nearest?"). [`SqrDist`] answers
//! those in squared space and computes the real distance lazily, at most once.

pub mod square;

pub use square::*;
