//! This module defines the level layout and its collision geometry.

pub mod builder;
pub mod parser;

/// Solid tiles of the level, 36 codes per row.
pub const FLOOR_COLLISIONS: &str = include_str!("../../assets/level/floor_collisions.csv");
/// One-way platform tiles of the level, 36 codes per row.
pub const PLATFORM_COLLISIONS: &str = include_str!("../../assets/level/platform_collisions.csv");
