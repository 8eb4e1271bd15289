//! Builds the level's static collision geometry from tile data.

use bevy_ecs::resource::Resource;
use glam::Vec2;
use tracing::debug;

use crate::config::TileConfig;
use crate::error::ParseError;
use crate::map::parser::{parse_tile_codes, TileGrid};
use crate::map::{FLOOR_COLLISIONS, PLATFORM_COLLISIONS};
use crate::systems::collision::Aabb;

/// A static collision rectangle. It cannot be changed once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionBlock {
    bounds: Aabb,
}

impl CollisionBlock {
    pub fn new(position: Vec2, width: f32, height: f32) -> Self {
        Self {
            bounds: Aabb::new(position, width, height),
        }
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn position(&self) -> Vec2 {
        self.bounds.position
    }

    pub fn width(&self) -> f32 {
        self.bounds.width
    }

    pub fn height(&self) -> f32 {
        self.bounds.height
    }
}

/// Emits one block of the given height for every cell holding the solid code.
pub fn build_blocks(grid: &TileGrid<'_>, tiles: &TileConfig, height: f32) -> Vec<CollisionBlock> {
    grid.cells()
        .filter(|&(_, _, code)| code == tiles.solid_code)
        .map(|(x, y, _)| {
            CollisionBlock::new(
                Vec2::new(x as f32 * tiles.tile_size, y as f32 * tiles.tile_size),
                tiles.tile_size,
                height,
            )
        })
        .collect()
}

/// The collision geometry of a level: solid blocks and one-way platforms.
#[derive(Resource, Debug, Clone, Default)]
pub struct Level {
    solid: Vec<CollisionBlock>,
    platforms: Vec<CollisionBlock>,
}

impl Level {
    pub fn new(solid: Vec<CollisionBlock>, platforms: Vec<CollisionBlock>) -> Self {
        Self { solid, platforms }
    }

    /// Builds the level from flat floor and platform tile codes.
    pub fn from_codes(floor: &[u16], platforms: &[u16], tiles: &TileConfig) -> Self {
        let solid = build_blocks(&TileGrid::new(floor, tiles.row_width), tiles, tiles.tile_size);
        let platforms = build_blocks(&TileGrid::new(platforms, tiles.row_width), tiles, tiles.platform_height);

        debug!(
            solid_count = solid.len(),
            platform_count = platforms.len(),
            "Built level collision blocks"
        );
        Self::new(solid, platforms)
    }

    /// Parses the level data bundled with the game.
    ///
    /// # Errors
    ///
    /// Returns an error if either data file holds something other than tile codes.
    pub fn load_embedded(tiles: &TileConfig) -> Result<Self, ParseError> {
        let floor = parse_tile_codes(FLOOR_COLLISIONS)?;
        let platforms = parse_tile_codes(PLATFORM_COLLISIONS)?;
        Ok(Self::from_codes(&floor, &platforms, tiles))
    }

    pub fn solid_blocks(&self) -> &[CollisionBlock] {
        &self.solid
    }

    pub fn platform_blocks(&self) -> &[CollisionBlock] {
        &self.platforms
    }
}
