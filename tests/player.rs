use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;
use speculoos::prelude::*;
use warrior_platformer::{
    asset::Asset,
    config::WorldConfig,
    events::{GameCommand, GameEvent},
    map::builder::Level,
    systems::{
        player_control_system, player_jump_system, player_update_system, Camera, Facing, HeldKeys, Player, RenderQueue,
        TickContext,
    },
};

mod common;

use common::{assert_close, block, test_player};

const EPSILON: f32 = 0.01;

fn tick(player: &mut Player, level: &Level, keys: HeldKeys, camera: &mut Camera) -> RenderQueue {
    let config = WorldConfig::default();
    let mut render = RenderQueue::default();
    player.update(&mut TickContext {
        config: &config,
        level,
        render: &mut render,
    });
    player.control(keys, camera, &config);
    render
}

#[test]
fn test_boxes_follow_position() {
    let player = test_player(Vec2::new(100.0, 300.0), Vec2::ZERO);
    assert_that(&player.hitbox.position).is_equal_to(Vec2::new(135.0, 326.0));
    assert_that(&player.hitbox.size()).is_equal_to(Vec2::new(14.0, 27.0));
    assert_that(&player.camerabox.position).is_equal_to(Vec2::new(50.0, 300.0));
    assert_that(&player.camerabox.size()).is_equal_to(Vec2::new(200.0, 80.0));
    assert_that(&player.facing).is_equal_to(Facing::Right);
}

#[test]
fn test_rightward_collision_stops_at_block_edge() {
    let mut player = test_player(Vec2::new(150.0, 300.0), Vec2::new(2.0, 0.0));
    player.position.x += player.velocity.x;
    player.update_hitbox();

    player.check_for_horizontal_collisions(&[block(200.0, 320.0, 16.0, 16.0)], EPSILON);

    assert_close(player.position.x, 150.99);
    assert_close(player.hitbox.right(), 199.99);
    assert_that(&player.velocity.x).is_equal_to(0.0);
}

#[test]
fn test_rightward_collision_during_update() {
    let level = Level::new(vec![block(200.0, 320.0, 16.0, 16.0)], vec![]);
    let mut player = test_player(Vec2::new(150.0, 300.0), Vec2::new(2.0, 0.0));
    let config = WorldConfig::default();
    let mut render = RenderQueue::default();

    player.update(&mut TickContext {
        config: &config,
        level: &level,
        render: &mut render,
    });

    assert_close(player.hitbox.right(), 200.0 - EPSILON);
    assert_that(&player.velocity.x).is_equal_to(0.0);
    // The sprite is drawn once per update, before moving
    assert_that(&render.commands().len()).is_equal_to(1);
}

#[test]
fn test_leftward_collision_stops_at_block_edge() {
    let mut player = test_player(Vec2::new(150.0, 300.0), Vec2::new(-2.0, 0.0));
    player.position.x += player.velocity.x;
    player.update_hitbox();

    player.check_for_horizontal_collisions(&[block(170.0, 320.0, 16.0, 16.0)], EPSILON);

    assert_close(player.hitbox.left(), 186.01);
    assert_close(player.position.x, 151.01);
    assert_that(&player.velocity.x).is_equal_to(0.0);
}

#[test]
fn test_standing_overlap_does_not_stop_scan() {
    let mut player = test_player(Vec2::new(150.0, 300.0), Vec2::ZERO);
    let blocks = [block(180.0, 320.0, 16.0, 16.0), block(190.0, 320.0, 16.0, 16.0)];

    player.check_for_horizontal_collisions(&blocks, EPSILON);

    assert_that(&player.position).is_equal_to(Vec2::new(150.0, 300.0));
}

#[test]
fn test_first_overlapping_block_wins() {
    let mut player = test_player(Vec2::new(150.0, 300.0), Vec2::new(2.0, 0.0));
    player.position.x += 2.0;
    player.update_hitbox();

    let blocks = [block(196.0, 320.0, 16.0, 16.0), block(190.0, 320.0, 16.0, 16.0)];
    player.check_for_horizontal_collisions(&blocks, EPSILON);

    assert_close(player.hitbox.right(), 196.0 - EPSILON);
}

#[test]
fn test_falling_lands_on_block() {
    let mut player = test_player(Vec2::new(70.0, 350.0), Vec2::new(0.0, 1.0));
    player.update_hitbox();

    player.check_for_vertical_collisions(&[block(96.0, 400.0, 16.0, 16.0)], &[], EPSILON);

    assert_close(player.hitbox.bottom(), 399.99);
    assert_that(&player.velocity.y).is_equal_to(0.0);
}

#[test]
fn test_rising_bumps_head_on_block() {
    let mut player = test_player(Vec2::new(70.0, 300.0), Vec2::new(0.0, -3.0));

    // Hitbox top at 326 is inside the block spanning [320, 336]
    player.check_for_vertical_collisions(&[block(96.0, 320.0, 16.0, 16.0)], &[], EPSILON);

    assert_close(player.hitbox.top(), 336.01);
    assert_that(&player.velocity.y).is_equal_to(0.0);
}

#[test]
fn test_falling_lands_on_platform() {
    // Hitbox bottom at 353 is inside the platform spanning [352, 356]
    let mut player = test_player(Vec2::new(70.0, 300.0), Vec2::new(0.0, 2.0));

    player.check_for_vertical_collisions(&[], &[block(96.0, 352.0, 16.0, 4.0)], EPSILON);

    assert_close(player.hitbox.bottom(), 351.99);
    assert_that(&player.velocity.y).is_equal_to(0.0);
}

#[test]
fn test_platform_never_stops_rising() {
    let mut player = test_player(Vec2::new(70.0, 300.0), Vec2::new(0.0, -2.0));

    player.check_for_vertical_collisions(&[], &[block(96.0, 352.0, 16.0, 4.0)], EPSILON);

    assert_that(&player.position).is_equal_to(Vec2::new(70.0, 300.0));
    assert_that(&player.velocity.y).is_equal_to(-2.0);
}

#[test]
fn test_free_fall() {
    let level = Level::default();
    let config = WorldConfig::default();
    let mut player = test_player(Vec2::new(100.0, 300.0), Vec2::new(0.0, 1.0));
    let mut render = RenderQueue::default();

    player.update(&mut TickContext {
        config: &config,
        level: &level,
        render: &mut render,
    });

    assert_close(player.velocity.y, 1.1);
    assert_close(player.position.y, 301.1);
    assert_close(player.hitbox.top(), 327.1);
}

#[test]
fn test_canvas_clamp() {
    let mut player = test_player(Vec2::new(-34.0, 300.0), Vec2::new(-2.0, 0.0));
    player.check_for_horizontal_canvas_collision(576.0);
    assert_that(&player.velocity.x).is_equal_to(0.0);

    // Hitbox right edge is 575; moving right would reach the edge
    let mut player = test_player(Vec2::new(526.0, 300.0), Vec2::new(2.0, 0.0));
    player.check_for_horizontal_canvas_collision(576.0);
    assert_that(&player.velocity.x).is_equal_to(0.0);

    let mut player = test_player(Vec2::new(200.0, 300.0), Vec2::new(2.0, 0.0));
    player.check_for_horizontal_canvas_collision(576.0);
    assert_that(&player.velocity.x).is_equal_to(2.0);
}

#[test]
fn test_control_runs_right() {
    let level = Level::default();
    let mut camera = Camera::default();
    let mut player = test_player(Vec2::new(100.0, 300.0), Vec2::ZERO);
    player.velocity.y = -0.1; // cancels gravity for this tick

    tick(&mut player, &level, HeldKeys::RIGHT, &mut camera);

    assert_that(&player.velocity.x).is_equal_to(2.0);
    assert_that(&player.facing).is_equal_to(Facing::Right);
    assert_that(&player.sprite.image().asset()).is_equal_to(Asset::WarriorRun);
}

#[test]
fn test_control_runs_left_and_idles_facing_left() {
    let level = Level::default();
    let mut camera = Camera::default();
    let mut player = test_player(Vec2::new(100.0, 300.0), Vec2::ZERO);
    player.velocity.y = -0.1;

    tick(&mut player, &level, HeldKeys::LEFT, &mut camera);
    assert_that(&player.velocity.x).is_equal_to(-2.0);
    assert_that(&player.facing).is_equal_to(Facing::Left);
    assert_that(&player.sprite.image().asset()).is_equal_to(Asset::WarriorRunLeft);

    player.velocity.y = -0.1;
    tick(&mut player, &level, HeldKeys::empty(), &mut camera);
    assert_that(&player.velocity.x).is_equal_to(0.0);
    assert_that(&player.sprite.image().asset()).is_equal_to(Asset::WarriorIdleLeft);
}

#[test]
fn test_right_takes_priority_over_left() {
    let mut player = test_player(Vec2::new(100.0, 300.0), Vec2::ZERO);
    let mut camera = Camera::default();
    tick(&mut player, &Level::default(), HeldKeys::RIGHT | HeldKeys::LEFT, &mut camera);
    assert_that(&player.velocity.x).is_equal_to(2.0);
}

#[test]
fn test_control_picks_jump_and_fall_clips() {
    let config = WorldConfig::default();
    let level = Level::default();
    let mut camera = Camera::initial(&config.viewport);
    let mut player = test_player(Vec2::new(100.0, 300.0), Vec2::ZERO);

    player.jump(config.physics.jump_velocity);
    tick(&mut player, &level, HeldKeys::empty(), &mut camera);
    assert_that(&player.sprite.image().asset()).is_equal_to(Asset::WarriorJump);

    player.velocity.y = 1.0;
    tick(&mut player, &level, HeldKeys::empty(), &mut camera);
    assert_that(&player.sprite.image().asset()).is_equal_to(Asset::WarriorFall);
}

#[test]
fn test_player_systems_run_on_world() {
    let mut world = common::create_test_world();
    let start = common::player(&mut world);

    world.run_system_once(player_update_system).expect("System should run successfully");
    let after = common::player(&mut world);
    assert_close(after.velocity.y, start.velocity.y + 0.1);

    world.insert_resource(HeldKeys::RIGHT);
    world.run_system_once(player_control_system).expect("System should run successfully");
    assert_that(&common::player(&mut world).velocity.x).is_equal_to(2.0);
}

#[test]
fn test_control_system_needs_neither_level_nor_render_queue() {
    let mut world = common::create_test_world();
    world.remove_resource::<Level>();
    world.remove_resource::<RenderQueue>();
    world.insert_resource(HeldKeys::LEFT);

    world.run_system_once(player_control_system).expect("System should run successfully");

    let player = common::player(&mut world);
    assert_that(&player.velocity.x).is_equal_to(-2.0);
    assert_that(&player.facing).is_equal_to(Facing::Left);
}

#[test]
fn test_jump_command_sets_vertical_velocity() {
    let mut world = common::create_test_world();
    common::send_game_event(&mut world, GameEvent::Command(GameCommand::Jump));

    world.run_system_once(player_jump_system).expect("System should run successfully");

    assert_that(&common::player(&mut world).velocity.y).is_equal_to(-4.0);
}

#[test]
fn test_other_commands_do_not_jump() {
    let mut world = common::create_test_world();
    common::send_game_event(&mut world, GameEvent::Command(GameCommand::TogglePause));

    world.run_system_once(player_jump_system).expect("System should run successfully");

    assert_that(&common::player(&mut world).velocity.y).is_equal_to(1.0);
}
