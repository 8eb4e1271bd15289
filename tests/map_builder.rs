use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use warrior_platformer::config::TileConfig;
use warrior_platformer::constants::LEVEL_SIZE;
use warrior_platformer::map::builder::{build_blocks, Level};
use warrior_platformer::map::parser::TileGrid;

#[test]
fn test_single_solid_cell_becomes_one_block() {
    let mut codes = vec![0u16; 72];
    codes[40] = 202;

    let tiles = TileConfig::default();
    let grid = TileGrid::new(&codes, tiles.row_width);
    let blocks = build_blocks(&grid, &tiles, 16.0);

    assert_that(&blocks).has_length(1);
    assert_eq!(blocks[0].position(), Vec2::new(64.0, 16.0));
    assert_eq!(blocks[0].width(), 16.0);
    assert_eq!(blocks[0].height(), 16.0);
}

#[test]
fn test_only_solid_code_produces_blocks() {
    let codes = vec![0, 201, 202, 203, 1, 202];
    let tiles = TileConfig {
        row_width: 3,
        ..TileConfig::default()
    };
    let grid = TileGrid::new(&codes, tiles.row_width);
    let blocks = build_blocks(&grid, &tiles, 16.0);

    let positions: Vec<Vec2> = blocks.iter().map(|b| b.position()).collect();
    assert_eq!(positions, vec![Vec2::new(32.0, 0.0), Vec2::new(32.0, 16.0)]);
}

#[test]
fn test_from_codes_uses_platform_height() {
    let mut floor = vec![0u16; 72];
    let mut platforms = vec![0u16; 72];
    floor[36] = 202;
    platforms[5] = 202;

    let level = Level::from_codes(&floor, &platforms, &TileConfig::default());

    assert_that(&level.solid_blocks().len()).is_equal_to(1);
    assert_that(&level.platform_blocks().len()).is_equal_to(1);
    assert_eq!(level.solid_blocks()[0].height(), 16.0);
    assert_eq!(level.platform_blocks()[0].height(), 4.0);
    assert_eq!(level.platform_blocks()[0].position(), Vec2::new(80.0, 0.0));
}

#[test]
fn test_empty_level_has_no_blocks() {
    let level = Level::from_codes(&[], &[], &TileConfig::default());
    assert_that(&level.solid_blocks().is_empty()).is_true();
    assert_that(&level.platform_blocks().is_empty()).is_true();
}

#[test]
fn test_embedded_level_fits_inside_bounds() {
    let level = Level::load_embedded(&TileConfig::default()).unwrap();

    assert_that(&level.solid_blocks().is_empty()).is_false();
    assert_that(&level.platform_blocks().is_empty()).is_false();

    for block in level.solid_blocks().iter().chain(level.platform_blocks()) {
        let bounds = block.bounds();
        assert!(bounds.left() >= 0.0 && bounds.right() <= LEVEL_SIZE.x, "{bounds:?}");
        assert!(bounds.top() >= 0.0 && bounds.bottom() <= LEVEL_SIZE.y, "{bounds:?}");
    }
}

#[test]
fn test_embedded_level_has_floor_under_start() {
    let level = Level::load_embedded(&TileConfig::default()).unwrap();

    // The bottom row spans the whole level
    let bottom_row = level
        .solid_blocks()
        .iter()
        .filter(|b| b.position().y == LEVEL_SIZE.y - 16.0)
        .count();
    assert_that(&bottom_row).is_equal_to(36);
}
