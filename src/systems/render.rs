//! Frame drawing.
//!
//! Gameplay code never touches the SDL canvas. It records [`DrawCommand`]s into the
//! [`RenderQueue`] in world coordinates, and [`present_system`] replays them at the end
//! of the frame, applying the transform stack.

use bevy_ecs::event::EventWriter;
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{NonSend, NonSendMut, ResMut};
use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;
use smallvec::SmallVec;
use tracing::warn;

use crate::error::{GameError, TextureError};
use crate::systems::collision::Aabb;
use crate::texture::image::{ImageId, TextureStore};

/// Maps world coordinates to canvas coordinates: `(p + translation) * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub translation: Vec2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    pub fn new(scale: f32, translation: Vec2) -> Self {
        Self { scale, translation }
    }

    pub fn apply(&self, point: Vec2) -> Vec2 {
        (point + self.translation) * self.scale
    }

    pub fn apply_rect(&self, rect: &Aabb) -> Aabb {
        Aabb::new(self.apply(rect.position), rect.width * self.scale, rect.height * self.scale)
    }

    /// The transform that applies `inner` first, then `self`.
    pub fn then(&self, inner: &Transform) -> Transform {
        Transform {
            scale: self.scale * inner.scale,
            translation: inner.translation + self.translation / inner.scale,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    PushTransform(Transform),
    PopTransform,
    /// Copies `src` of an image into `dest`, both in the image's and the world's pixels.
    Image { id: ImageId, src: Aabb, dest: Aabb },
    FillRect { rect: Aabb, color: Color },
}

/// Draw commands recorded during the current frame.
#[derive(Resource, Debug, Default)]
pub struct RenderQueue {
    commands: Vec<DrawCommand>,
}

impl RenderQueue {
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn clear(&mut self, color: Color) {
        self.push(DrawCommand::Clear(color));
    }

    pub fn push_transform(&mut self, transform: Transform) {
        self.push(DrawCommand::PushTransform(transform));
    }

    pub fn pop_transform(&mut self) {
        self.push(DrawCommand::PopTransform);
    }

    pub fn image(&mut self, id: ImageId, src: Aabb, dest: Aabb) {
        self.push(DrawCommand::Image { id, src, dest });
    }

    pub fn fill_rect(&mut self, rect: Aabb, color: Color) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, DrawCommand> {
        self.commands.drain(..)
    }
}

/// Rounds a canvas-space rectangle to whole pixels.
pub fn to_rect(rect: &Aabb) -> Rect {
    Rect::new(
        rect.left().round() as i32,
        rect.top().round() as i32,
        rect.width.round().max(0.0) as u32,
        rect.height.round().max(0.0) as u32,
    )
}

/// Replays the frame's draw commands onto the canvas and presents it.
///
/// When nothing was recorded (the game is paused) the previous frame stays on screen.
pub fn present_system(
    mut canvas: NonSendMut<&mut Canvas<Window>>,
    textures: NonSend<TextureStore>,
    mut queue: ResMut<RenderQueue>,
    mut errors: EventWriter<GameError>,
) {
    if queue.is_empty() {
        return;
    }

    let mut stack: SmallVec<[Transform; 4]> = SmallVec::new();
    let mut current = Transform::IDENTITY;

    for command in queue.drain() {
        match command {
            DrawCommand::Clear(color) => {
                canvas.set_draw_color(color);
                canvas.clear();
            }
            DrawCommand::PushTransform(transform) => {
                stack.push(current);
                current = current.then(&transform);
            }
            DrawCommand::PopTransform => match stack.pop() {
                Some(previous) => current = previous,
                None => warn!("Transform stack underflow"),
            },
            DrawCommand::Image { id, src, dest } => {
                let result = textures.get(id).and_then(|texture| {
                    canvas
                        .copy(texture, to_rect(&src), to_rect(&current.apply_rect(&dest)))
                        .map_err(TextureError::RenderFailed)
                });
                if let Err(e) = result {
                    errors.write(e.into());
                }
            }
            DrawCommand::FillRect { rect, color } => {
                canvas.set_blend_mode(BlendMode::Blend);
                canvas.set_draw_color(color);
                if let Err(e) = canvas.fill_rect(to_rect(&current.apply_rect(&rect))) {
                    errors.write(TextureError::RenderFailed(e).into());
                }
            }
        }
    }

    if !stack.is_empty() {
        warn!(depth = stack.len(), "Frame ended with unbalanced transforms");
    }

    canvas.present();
}
