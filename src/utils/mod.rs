//! # Utilities Module
//!
//! Small field-level helpers: enum cycling, index wrapping, component
//! overrides and spatial queries.

pub mod cycle;
pub mod index;
pub mod spatial;
pub mod with;

pub use cycle::*;
pub use index::*;
pub use spatial::*;
pub use with::*;
