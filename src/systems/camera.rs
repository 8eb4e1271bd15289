use bevy_ecs::resource::Resource;
use glam::Vec2;

use crate::config::ViewportConfig;
use crate::systems::render::Transform;

/// Offset added to every world position before scaling to the canvas.
///
/// Both components are zero or negative while the view stays inside the level.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub position: Vec2,
}

impl Camera {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }

    /// A camera showing the bottom-left corner of the level.
    pub fn initial(viewport: &ViewportConfig) -> Self {
        Self::new(viewport.initial_camera())
    }

    /// The world-to-canvas transform for this camera.
    pub fn transform(&self, viewport: &ViewportConfig) -> Transform {
        Transform::new(viewport.scale, self.position)
    }
}
