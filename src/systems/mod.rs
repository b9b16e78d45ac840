//! Layout systems: the collision relaxation solver and the rectangle packer.

pub mod packer;
pub mod relax;
