//! Runtime configuration for the level, physics and player geometry.
//!
//! Every tunable the gameplay code reads lives here, grouped by concern. The
//! defaults are built from [`crate::constants`]; tests construct their own
//! values to exercise edge cases.

use bevy_ecs::resource::Resource;
use glam::Vec2;

use crate::constants::{self, mechanics, player};
use crate::systems::collision::Aabb;

/// Describes how flat level data maps onto the tile grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileConfig {
    pub tile_size: f32,
    pub row_width: usize,
    pub solid_code: u16,
    pub platform_height: f32,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            tile_size: constants::TILE_SIZE,
            row_width: constants::ROW_WIDTH,
            solid_code: constants::SOLID_TILE,
            platform_height: constants::PLATFORM_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub epsilon: f32,
    pub jump_velocity: f32,
    pub run_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: mechanics::GRAVITY,
            epsilon: mechanics::COLLISION_EPSILON,
            jump_velocity: mechanics::JUMP_VELOCITY,
            run_speed: mechanics::RUN_SPEED,
        }
    }
}

/// A rectangle positioned relative to an entity's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShape {
    pub offset: Vec2,
    pub size: Vec2,
}

impl BoxShape {
    pub const fn new(offset: Vec2, size: Vec2) -> Self {
        Self { offset, size }
    }

    /// Places the shape at `origin`.
    pub fn at(&self, origin: Vec2) -> Aabb {
        Aabb::new(origin + self.offset, self.size.x, self.size.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    pub start: Vec2,
    pub start_velocity: Vec2,
    pub sprite_scale: f32,
    pub hitbox: BoxShape,
    pub camerabox: BoxShape,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: mechanics::PLAYER_START,
            start_velocity: mechanics::PLAYER_START_VELOCITY,
            sprite_scale: player::SPRITE_SCALE,
            hitbox: BoxShape::new(player::HITBOX_OFFSET, player::HITBOX_SIZE),
            camerabox: BoxShape::new(player::CAMERABOX_OFFSET, player::CAMERABOX_SIZE),
        }
    }
}

/// The canvas, its zoom, and the extent of the level being viewed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    pub canvas_size: Vec2,
    pub scale: f32,
    pub level_size: Vec2,
}

impl ViewportConfig {
    /// The part of the level visible at once, in world pixels.
    pub fn scaled_size(&self) -> Vec2 {
        self.canvas_size / self.scale
    }

    /// Camera offset that shows the bottom-left corner of the level.
    pub fn initial_camera(&self) -> Vec2 {
        Vec2::new(0.0, -self.level_size.y + self.scaled_size().y)
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            canvas_size: constants::CANVAS_SIZE.as_vec2(),
            scale: constants::CANVAS_SCALE,
            level_size: constants::LEVEL_SIZE,
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldConfig {
    pub tiles: TileConfig,
    pub physics: PhysicsConfig,
    pub player: PlayerConfig,
    pub viewport: ViewportConfig,
}
