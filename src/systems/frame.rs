//! Systems that open and close each frame around the gameplay systems.

use bevy_ecs::{
    resource::Resource,
    system::{Query, Res, ResMut},
};
use glam::Vec2;
use sdl2::pixels::Color;

use crate::asset::Asset;
use crate::config::WorldConfig;
use crate::error::AnimationError;
use crate::map::builder::Level;
use crate::systems::camera::Camera;
use crate::systems::player::Player;
use crate::systems::render::RenderQueue;
use crate::systems::state::DebugState;
use crate::texture::animated::{AnimatedSprite, AnimationClip};
use crate::texture::image::ImageLoader;

pub const CLEAR_COLOR: Color = Color::WHITE;

pub const SOLID_OVERLAY: Color = Color::RGBA(255, 0, 0, 96);
pub const PLATFORM_OVERLAY: Color = Color::RGBA(0, 0, 255, 96);
pub const HITBOX_OVERLAY: Color = Color::RGBA(0, 255, 0, 96);
pub const CAMERABOX_OVERLAY: Color = Color::RGBA(0, 0, 255, 48);

/// The level artwork, drawn behind everything at the world origin.
#[derive(Resource, Debug, Clone)]
pub struct Background {
    pub position: Vec2,
    pub sprite: AnimatedSprite,
}

impl Background {
    pub fn new(loader: &mut ImageLoader) -> Result<Self, AnimationError> {
        let clip = AnimationClip::new(loader.request(Asset::Background), 1, 1)?;
        Ok(Self {
            position: Vec2::ZERO,
            sprite: AnimatedSprite::new(clip, 1.0),
        })
    }
}

/// Clears the canvas and opens the camera transform, then draws the background.
pub fn begin_frame_system(
    config: Res<WorldConfig>,
    camera: Res<Camera>,
    mut background: ResMut<Background>,
    mut render: ResMut<RenderQueue>,
) {
    render.clear(CLEAR_COLOR);
    render.push_transform(camera.transform(&config.viewport));

    let background = &mut *background;
    background.sprite.update(background.position, &mut render);
}

/// Draws the collision geometry and the player's boxes while the overlay is enabled.
pub fn debug_overlay_system(
    debug: Res<DebugState>,
    level: Res<Level>,
    players: Query<&Player>,
    mut render: ResMut<RenderQueue>,
) {
    if !debug.enabled() {
        return;
    }

    for block in level.solid_blocks() {
        render.fill_rect(*block.bounds(), SOLID_OVERLAY);
    }
    for block in level.platform_blocks() {
        render.fill_rect(*block.bounds(), PLATFORM_OVERLAY);
    }
    for player in players.iter() {
        render.fill_rect(player.camerabox, CAMERABOX_OVERLAY);
        render.fill_rect(player.hitbox, HITBOX_OVERLAY);
    }
}

pub fn end_frame_system(mut render: ResMut<RenderQueue>) {
    render.pop_transform();
}
