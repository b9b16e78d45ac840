//! Core geometry and ambient utilities shared by every layout system.

pub mod log;
pub mod random;
pub mod rect;
pub mod vec2;
