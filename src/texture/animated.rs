use std::collections::HashMap;

use glam::Vec2;
use strum_macros::IntoStaticStr;
use tracing::trace;

use crate::error::AnimationError;
use crate::systems::collision::Aabb;
use crate::systems::render::RenderQueue;
use crate::texture::image::ImageHandle;

/// Named animations a sprite can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Clip {
    Idle,
    IdleLeft,
    Run,
    RunLeft,
    Jump,
    JumpLeft,
    Fall,
    FallLeft,
}

/// A horizontal filmstrip: `frame_rate` equally wide frames, each held for
/// `frame_buffer` calls to [`AnimatedSprite::advance_frame`].
#[derive(Debug, Clone)]
pub struct AnimationClip {
    image: ImageHandle,
    frame_rate: u32,
    frame_buffer: u32,
}

impl AnimationClip {
    pub fn new(image: ImageHandle, frame_rate: u32, frame_buffer: u32) -> Result<Self, AnimationError> {
        if frame_rate == 0 {
            return Err(AnimationError::NoFrames);
        }
        if frame_buffer == 0 {
            return Err(AnimationError::NoFrameBuffer);
        }
        Ok(Self {
            image,
            frame_rate,
            frame_buffer,
        })
    }

    pub fn image(&self) -> &ImageHandle {
        &self.image
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn frame_buffer(&self) -> u32 {
        self.frame_buffer
    }
}

/// A sprite cut from filmstrip images, drawn one frame at a time.
///
/// The draw size is fixed by the image the sprite was built with, even after switching
/// to a clip whose frames are a different size.
#[derive(Debug, Clone)]
pub struct AnimatedSprite {
    initial: ImageHandle,
    initial_frame_rate: u32,
    image: ImageHandle,
    frame_rate: u32,
    frame_buffer: u32,
    current_frame: u32,
    elapsed_frames: u64,
    scale: f32,
    clips: HashMap<Clip, AnimationClip>,
}

impl AnimatedSprite {
    pub fn new(initial: AnimationClip, scale: f32) -> Self {
        Self {
            initial: initial.image.clone(),
            initial_frame_rate: initial.frame_rate,
            image: initial.image,
            frame_rate: initial.frame_rate,
            frame_buffer: initial.frame_buffer,
            current_frame: 0,
            elapsed_frames: 0,
            scale,
            clips: HashMap::new(),
        }
    }

    pub fn with_clips(mut self, clips: impl IntoIterator<Item = (Clip, AnimationClip)>) -> Self {
        self.clips.extend(clips);
        self
    }

    /// Whether the image the sprite was built with has finished loading.
    pub fn loaded(&self) -> bool {
        self.initial.is_ready()
    }

    /// Drawn size in world pixels, known once the sprite has loaded.
    pub fn size(&self) -> Option<Vec2> {
        let image = self.initial.size()?.as_vec2();
        Some(Vec2::new(image.x / self.initial_frame_rate as f32, image.y) * self.scale)
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn frame_buffer(&self) -> u32 {
        self.frame_buffer
    }

    pub fn elapsed_frames(&self) -> u64 {
        self.elapsed_frames
    }

    pub fn image(&self) -> &ImageHandle {
        &self.image
    }

    pub fn advance_frame(&mut self) {
        self.elapsed_frames += 1;
        if self.elapsed_frames % u64::from(self.frame_buffer) == 0 {
            if self.current_frame + 1 < self.frame_rate {
                self.current_frame += 1;
            } else {
                self.current_frame = 0;
            }
        }
    }

    /// Queues the current frame at `position`. Does nothing until both the sprite and
    /// its active image are ready.
    pub fn draw(&self, position: Vec2, queue: &mut RenderQueue) {
        let (Some(id), Some(image), Some(size)) = (self.image.id(), self.image.size(), self.size()) else {
            return;
        };

        let frame_width = image.x as f32 / self.frame_rate as f32;
        let src = Aabb::new(
            Vec2::new(self.current_frame as f32 * frame_width, 0.0),
            frame_width,
            image.y as f32,
        );
        queue.image(id, src, Aabb::new(position, size.x, size.y));
    }

    /// Draws, then advances. Used for sprites without an owner that steps them.
    pub fn update(&mut self, position: Vec2, queue: &mut RenderQueue) {
        self.draw(position, queue);
        self.advance_frame();
    }

    /// Makes `clip` the active animation, restarting it from its first frame.
    ///
    /// Returns false without changing anything if the clip is already playing, the
    /// sprite has not loaded, or no such clip was registered.
    pub fn switch_clip(&mut self, clip: Clip) -> bool {
        if !self.loaded() {
            return false;
        }
        let Some(animation) = self.clips.get(&clip) else {
            return false;
        };
        if animation.image.same_image(&self.image) {
            return false;
        }

        trace!(clip = <&'static str>::from(clip), "Switching animation clip");
        self.current_frame = 0;
        self.image = animation.image.clone();
        self.frame_rate = animation.frame_rate;
        self.frame_buffer = animation.frame_buffer;
        true
    }
}
