#![allow(dead_code)]

use bevy_ecs::world::World;
use glam::{UVec2, Vec2};
use warrior_platformer::{
    asset::Asset,
    config::{PlayerConfig, WorldConfig},
    constants::animation,
    events::GameEvent,
    game::Game,
    map::builder::CollisionBlock,
    systems::Player,
    texture::{
        animated::{AnimatedSprite, AnimationClip, Clip},
        image::{ImageHandle, ImageId, ImageStatus},
    },
};

/// Width and height of one frame of the warrior filmstrips, in image pixels.
pub const FRAME_SIZE: UVec2 = UVec2::new(168, 112);

pub const TOLERANCE: f32 = 1e-3;

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_vec_close(actual: Vec2, expected: Vec2) {
    assert!(
        (actual - expected).abs().max_element() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}

/// A handle that has already finished loading.
pub fn ready_handle(asset: Asset, id: usize, size: UVec2) -> ImageHandle {
    let handle = ImageHandle::pending(asset);
    handle.resolve(ImageStatus::Ready { id: ImageId(id), size });
    handle
}

pub fn filmstrip(asset: Asset, id: usize, frames: u32, buffer: u32) -> AnimationClip {
    let size = UVec2::new(FRAME_SIZE.x * frames, FRAME_SIZE.y);
    AnimationClip::new(ready_handle(asset, id, size), frames, buffer).expect("valid clip")
}

/// The warrior sprite with every clip already loaded.
pub fn loaded_warrior_sprite() -> AnimatedSprite {
    let idle = filmstrip(Asset::WarriorIdle, 0, animation::IDLE_FRAMES, animation::IDLE_FRAME_BUFFER);
    let clips = [
        (Clip::Idle, idle.clone()),
        (Clip::IdleLeft, filmstrip(Asset::WarriorIdleLeft, 1, animation::IDLE_FRAMES, animation::IDLE_FRAME_BUFFER)),
        (Clip::Run, filmstrip(Asset::WarriorRun, 2, animation::RUN_FRAMES, animation::RUN_FRAME_BUFFER)),
        (Clip::RunLeft, filmstrip(Asset::WarriorRunLeft, 3, animation::RUN_FRAMES, animation::RUN_FRAME_BUFFER)),
        (Clip::Jump, filmstrip(Asset::WarriorJump, 4, animation::JUMP_FRAMES, animation::JUMP_FRAME_BUFFER)),
        (Clip::JumpLeft, filmstrip(Asset::WarriorJumpLeft, 5, animation::JUMP_FRAMES, animation::JUMP_FRAME_BUFFER)),
        (Clip::Fall, filmstrip(Asset::WarriorFall, 6, animation::FALL_FRAMES, animation::FALL_FRAME_BUFFER)),
        (Clip::FallLeft, filmstrip(Asset::WarriorFallLeft, 7, animation::FALL_FRAMES, animation::FALL_FRAME_BUFFER)),
    ];
    AnimatedSprite::new(idle, 0.5).with_clips(clips)
}

/// A player with the default box shapes at the given position and velocity.
pub fn test_player(position: Vec2, velocity: Vec2) -> Player {
    let config = PlayerConfig {
        start: position,
        start_velocity: velocity,
        ..PlayerConfig::default()
    };
    Player::new(&config, loaded_warrior_sprite())
}

pub fn block(x: f32, y: f32, width: f32, height: f32) -> CollisionBlock {
    CollisionBlock::new(Vec2::new(x, y), width, height)
}

/// A world with every gameplay resource and the player, without any SDL state.
pub fn create_test_world() -> World {
    let mut world = World::default();
    Game::setup_world(&mut world, WorldConfig::default()).expect("world setup should succeed");
    world
}

pub fn send_game_event(world: &mut World, event: GameEvent) {
    world.send_event(event);
}

pub fn player(world: &mut World) -> Player {
    world
        .query::<&Player>()
        .single(world)
        .expect("exactly one player")
        .clone()
}
