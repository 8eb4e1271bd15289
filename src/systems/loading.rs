use bevy_ecs::{
    event::EventWriter,
    system::{NonSend, NonSendMut, ResMut},
};
use glam::UVec2;
use sdl2::image::LoadTexture;
use sdl2::render::TextureCreator;
use sdl2::video::WindowContext;

use crate::constants::IMAGES_PER_FRAME;
use crate::error::{GameError, TextureError};
use crate::texture::image::{ImageLoader, TextureStore};

/// Decodes a few pending images per frame into textures.
pub fn asset_load_system(
    mut loader: ResMut<ImageLoader>,
    mut store: NonSendMut<TextureStore>,
    creator: NonSend<TextureCreator<WindowContext>>,
    mut errors: EventWriter<GameError>,
) {
    if loader.pending_count() == 0 {
        return;
    }

    let failures = loader.poll_with(IMAGES_PER_FRAME, |asset| {
        let bytes = asset.get_bytes()?;
        let texture = creator.load_texture_bytes(&bytes).map_err(TextureError::LoadFailed)?;
        let query = texture.query();
        Ok((store.insert(texture), UVec2::new(query.width, query.height)))
    });

    for failure in failures {
        errors.write(failure);
    }
}
