//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{UVec2, Vec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the window's drawing surface, in logical pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(1024, 576);
/// The zoom applied to the world before it is drawn onto the canvas.
pub const CANVAS_SCALE: f32 = 4.0;

/// The size of each tile, in pixels.
pub const TILE_SIZE: f32 = 16.0;
/// The number of tiles in every row of the level data.
pub const ROW_WIDTH: usize = 36;
/// The tile code marking a collidable cell in the level data.
pub const SOLID_TILE: u16 = 202;
/// The height of a one-way platform block, in pixels.
pub const PLATFORM_HEIGHT: f32 = 4.0;

/// The size of the level (and its background image), in pixels.
pub const LEVEL_SIZE: Vec2 = Vec2::new(576.0, 432.0);

pub mod mechanics {
    use glam::Vec2;

    /// Added to the vertical velocity every frame.
    pub const GRAVITY: f32 = 0.1;
    /// The gap left between a resolved hitbox and the block it hit.
    pub const COLLISION_EPSILON: f32 = 0.01;
    /// Vertical velocity applied instantly when jumping.
    pub const JUMP_VELOCITY: f32 = -4.0;
    /// Horizontal speed while a movement key is held, in pixels per frame.
    pub const RUN_SPEED: f32 = 2.0;

    pub const PLAYER_START: Vec2 = Vec2::new(100.0, 300.0);
    pub const PLAYER_START_VELOCITY: Vec2 = Vec2::new(0.0, 1.0);
}

pub mod player {
    use glam::Vec2;

    /// The player's filmstrips are drawn at half their pixel size.
    pub const SPRITE_SCALE: f32 = 0.5;
    pub const HITBOX_OFFSET: Vec2 = Vec2::new(35.0, 26.0);
    pub const HITBOX_SIZE: Vec2 = Vec2::new(14.0, 27.0);
    pub const CAMERABOX_OFFSET: Vec2 = Vec2::new(-50.0, 0.0);
    pub const CAMERABOX_SIZE: Vec2 = Vec2::new(200.0, 80.0);
}

pub mod animation {
    /// Frame-hold used by sprites that don't specify one.
    pub const DEFAULT_FRAME_BUFFER: u32 = 3;

    pub const IDLE_FRAMES: u32 = 8;
    pub const IDLE_FRAME_BUFFER: u32 = 3;
    pub const RUN_FRAMES: u32 = 8;
    pub const RUN_FRAME_BUFFER: u32 = 5;
    pub const JUMP_FRAMES: u32 = 2;
    pub const JUMP_FRAME_BUFFER: u32 = 3;
    pub const FALL_FRAMES: u32 = 2;
    pub const FALL_FRAME_BUFFER: u32 = 3;
}

/// How many pending images are decoded per frame.
pub const IMAGES_PER_FRAME: usize = 2;
