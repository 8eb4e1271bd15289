//! Image handles that resolve while the game is already running.
//!
//! Requesting an image never blocks: the caller gets an [`ImageHandle`] at once and the
//! [`ImageLoader`] decodes a few pending images each frame. Code holding a handle checks
//! [`ImageHandle::is_ready`] (or just tries [`ImageHandle::size`]) before using it.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, OnceLock};

use bevy_ecs::resource::Resource;
use glam::UVec2;
use sdl2::render::Texture;
use tracing::{debug, warn};

use crate::asset::Asset;
use crate::error::{GameError, TextureError};

/// Index of a texture inside the [`TextureStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(pub usize);

/// Outcome of a load. A handle without a status is still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    Ready { id: ImageId, size: UVec2 },
    Failed,
}

#[derive(Debug)]
struct ImageSlot {
    asset: Asset,
    status: OnceLock<ImageStatus>,
}

/// Shared handle to an image that may not have finished loading.
///
/// Clones point at the same slot, so resolving one resolves all of them.
#[derive(Debug, Clone)]
pub struct ImageHandle(Arc<ImageSlot>);

impl ImageHandle {
    pub fn pending(asset: Asset) -> Self {
        Self(Arc::new(ImageSlot {
            asset,
            status: OnceLock::new(),
        }))
    }

    pub fn asset(&self) -> Asset {
        self.0.asset
    }

    pub fn status(&self) -> Option<ImageStatus> {
        self.0.status.get().copied()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.status(), Some(ImageStatus::Ready { .. }))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status(), Some(ImageStatus::Failed))
    }

    pub fn id(&self) -> Option<ImageId> {
        match self.status() {
            Some(ImageStatus::Ready { id, .. }) => Some(id),
            _ => None,
        }
    }

    /// Pixel size of the image, once it is ready.
    pub fn size(&self) -> Option<UVec2> {
        match self.status() {
            Some(ImageStatus::Ready { size, .. }) => Some(size),
            _ => None,
        }
    }

    /// Settles the handle. Only the first resolution sticks; returns whether this one did.
    pub fn resolve(&self, status: ImageStatus) -> bool {
        self.0.status.set(status).is_ok()
    }

    /// Whether both handles refer to the same underlying image slot.
    pub fn same_image(&self, other: &ImageHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Queue of requested images, resolved a few at a time.
///
/// Requests are deduplicated per asset, so asking twice for the same image
/// yields handles that compare equal with [`ImageHandle::same_image`].
#[derive(Resource, Debug, Default)]
pub struct ImageLoader {
    pending: VecDeque<ImageHandle>,
    handles: HashMap<Asset, ImageHandle>,
}

impl ImageLoader {
    pub fn request(&mut self, asset: Asset) -> ImageHandle {
        if let Some(handle) = self.handles.get(&asset) {
            return handle.clone();
        }

        let handle = ImageHandle::pending(asset);
        self.handles.insert(asset, handle.clone());
        self.pending.push_back(handle.clone());
        handle
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Resolves up to `budget` pending handles with `load`.
    ///
    /// A failed load settles its handle as [`ImageStatus::Failed`]; the errors are
    /// returned so the caller can report them.
    pub fn poll_with<F>(&mut self, budget: usize, mut load: F) -> Vec<GameError>
    where
        F: FnMut(Asset) -> Result<(ImageId, UVec2), GameError>,
    {
        let mut failures = Vec::new();

        for _ in 0..budget {
            let Some(handle) = self.pending.pop_front() else {
                break;
            };

            let name: &'static str = handle.asset().into();
            match load(handle.asset()) {
                Ok((id, size)) => {
                    debug!(asset = name, width = size.x, height = size.y, "Image loaded");
                    handle.resolve(ImageStatus::Ready { id, size });
                }
                Err(e) => {
                    warn!(asset = name, error = %e, "Image failed to load, it will not be drawn");
                    handle.resolve(ImageStatus::Failed);
                    failures.push(e);
                }
            }
        }

        failures
    }
}

/// Owns every loaded SDL texture. Stored as a non-send resource.
#[derive(Default)]
pub struct TextureStore {
    textures: Vec<Texture>,
}

impl TextureStore {
    pub fn insert(&mut self, texture: Texture) -> ImageId {
        self.textures.push(texture);
        ImageId(self.textures.len() - 1)
    }

    pub fn get(&self, id: ImageId) -> Result<&Texture, TextureError> {
        self.textures.get(id.0).ok_or(TextureError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
