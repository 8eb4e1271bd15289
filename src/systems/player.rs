use bevy_ecs::{
    component::Component,
    event::{EventReader, EventWriter},
    system::{Query, Res, ResMut},
};
use glam::Vec2;
use tracing::debug;

use crate::{
    asset::Asset,
    config::{BoxShape, PlayerConfig, ViewportConfig, WorldConfig},
    constants::animation,
    error::{AnimationError, GameError},
    events::{GameCommand, GameEvent},
    map::builder::{CollisionBlock, Level},
    systems::{
        camera::Camera,
        collision::{collision, platform_collision, Aabb},
        input::HeldKeys,
        render::RenderQueue,
    },
    texture::{
        animated::{AnimatedSprite, AnimationClip, Clip},
        image::ImageLoader,
    },
};

/// The way the player last moved horizontally; picks the idle, jump and fall clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// What [`Player::update`] reads or writes outside the player itself.
pub struct TickContext<'a> {
    pub config: &'a WorldConfig,
    pub level: &'a Level,
    pub render: &'a mut RenderQueue,
}

/// The controllable character.
///
/// `position` is the top-left corner of the drawn sprite. The hitbox and camerabox
/// are placed relative to it and are refreshed whenever the position changes.
#[derive(Component, Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub hitbox: Aabb,
    pub camerabox: Aabb,
    pub facing: Facing,
    pub sprite: AnimatedSprite,
    hitbox_shape: BoxShape,
    camerabox_shape: BoxShape,
}

impl Player {
    pub fn new(config: &PlayerConfig, sprite: AnimatedSprite) -> Self {
        Self::with_shapes(config.start, config.start_velocity, config.hitbox, config.camerabox, sprite)
    }

    pub fn with_shapes(
        position: Vec2,
        velocity: Vec2,
        hitbox_shape: BoxShape,
        camerabox_shape: BoxShape,
        sprite: AnimatedSprite,
    ) -> Self {
        Self {
            position,
            velocity,
            hitbox: hitbox_shape.at(position),
            camerabox: camerabox_shape.at(position),
            facing: Facing::default(),
            sprite,
            hitbox_shape,
            camerabox_shape,
        }
    }

    pub fn update_hitbox(&mut self) {
        self.hitbox = self.hitbox_shape.at(self.position);
    }

    pub fn update_camerabox(&mut self) {
        self.camerabox = self.camerabox_shape.at(self.position);
    }

    /// Advances the player by one frame: animation, horizontal motion, gravity and
    /// collision against the level, in that order.
    pub fn update(&mut self, ctx: &mut TickContext<'_>) {
        let physics = &ctx.config.physics;

        self.sprite.advance_frame();
        self.update_hitbox();
        self.update_camerabox();
        self.sprite.draw(self.position, ctx.render);

        self.position.x += self.velocity.x;
        self.update_hitbox();
        self.check_for_horizontal_collisions(ctx.level.solid_blocks(), physics.epsilon);

        self.apply_gravity(physics.gravity);
        self.update_hitbox();
        self.check_for_vertical_collisions(ctx.level.solid_blocks(), ctx.level.platform_blocks(), physics.epsilon);
    }

    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity.y += gravity;
        self.position.y += self.velocity.y;
    }

    /// Pushes the player out of the first solid block it overlaps while moving sideways.
    pub fn check_for_horizontal_collisions(&mut self, blocks: &[CollisionBlock], epsilon: f32) {
        for block in blocks {
            if !collision(&self.hitbox, block.bounds()) {
                continue;
            }

            if self.velocity.x > 0.0 {
                self.velocity.x = 0.0;
                let offset = self.hitbox_shape.offset.x + self.hitbox.width;
                self.position.x = block.bounds().left() - offset - epsilon;
                self.update_hitbox();
                break;
            }

            if self.velocity.x < 0.0 {
                self.velocity.x = 0.0;
                let offset = self.hitbox_shape.offset.x;
                self.position.x = block.bounds().right() - offset + epsilon;
                self.update_hitbox();
                break;
            }
        }
    }

    /// Lands on or bumps against the first solid block hit, then lands on platforms.
    ///
    /// Platforms only catch a falling player; jumping up through them is allowed.
    pub fn check_for_vertical_collisions(&mut self, solid: &[CollisionBlock], platforms: &[CollisionBlock], epsilon: f32) {
        for block in solid {
            if !collision(&self.hitbox, block.bounds()) {
                continue;
            }

            if self.velocity.y > 0.0 {
                self.land_on(block, epsilon);
                break;
            }

            if self.velocity.y < 0.0 {
                self.velocity.y = 0.0;
                let offset = self.hitbox_shape.offset.y;
                self.position.y = block.bounds().bottom() - offset + epsilon;
                self.update_hitbox();
                break;
            }
        }

        for block in platforms {
            if self.velocity.y > 0.0 && platform_collision(&self.hitbox, block.bounds()) {
                self.land_on(block, epsilon);
                break;
            }
        }
    }

    fn land_on(&mut self, block: &CollisionBlock, epsilon: f32) {
        self.velocity.y = 0.0;
        let offset = self.hitbox_shape.offset.y + self.hitbox.height;
        self.position.y = block.bounds().top() - offset - epsilon;
        self.update_hitbox();
    }

    /// Stops horizontal motion that would carry the hitbox past either side of the level.
    pub fn check_for_horizontal_canvas_collision(&mut self, level_width: f32) {
        if self.hitbox.right() + self.velocity.x >= level_width || self.hitbox.left() + self.velocity.x <= 0.0 {
            self.velocity.x = 0.0;
        }
    }

    /// Scrolls the view along with a player moving right past the camerabox.
    pub fn pan_camera_left(&self, camera: &mut Camera, viewport: &ViewportConfig) {
        let right = self.camerabox.right();
        if right >= viewport.level_size.x {
            return;
        }
        if right >= viewport.scaled_size().x + camera.position.x.abs() {
            camera.position.x -= self.velocity.x;
        }
    }

    pub fn pan_camera_right(&self, camera: &mut Camera) {
        let left = self.camerabox.left();
        if left <= 0.0 {
            return;
        }
        if left <= camera.position.x.abs() {
            camera.position.x -= self.velocity.x;
        }
    }

    pub fn pan_camera_down(&self, camera: &mut Camera) {
        let top = self.camerabox.top();
        if top + self.velocity.y <= 0.0 {
            return;
        }
        if top <= camera.position.y.abs() {
            camera.position.y -= self.velocity.y;
        }
    }

    pub fn pan_camera_up(&self, camera: &mut Camera, viewport: &ViewportConfig) {
        let bottom = self.camerabox.bottom();
        if bottom + self.velocity.y >= viewport.level_size.y {
            return;
        }
        if bottom >= camera.position.y.abs() + viewport.scaled_size().y {
            camera.position.y -= self.velocity.y;
        }
    }

    /// Turns the held keys into velocity, animation and camera movement for this frame.
    pub fn control(&mut self, keys: HeldKeys, camera: &mut Camera, config: &WorldConfig) {
        let viewport = &config.viewport;
        let run_speed = config.physics.run_speed;

        self.velocity.x = 0.0;
        if keys.contains(HeldKeys::RIGHT) {
            self.sprite.switch_clip(Clip::Run);
            self.velocity.x = run_speed;
            self.facing = Facing::Right;
            self.pan_camera_left(camera, viewport);
        } else if keys.contains(HeldKeys::LEFT) {
            self.sprite.switch_clip(Clip::RunLeft);
            self.velocity.x = -run_speed;
            self.facing = Facing::Left;
            self.pan_camera_right(camera);
        } else if self.velocity.y == 0.0 {
            self.sprite.switch_clip(match self.facing {
                Facing::Right => Clip::Idle,
                Facing::Left => Clip::IdleLeft,
            });
        }

        if self.velocity.y < 0.0 {
            self.pan_camera_down(camera);
            self.sprite.switch_clip(match self.facing {
                Facing::Right => Clip::Jump,
                Facing::Left => Clip::JumpLeft,
            });
        } else if self.velocity.y > 0.0 {
            self.pan_camera_up(camera, viewport);
            self.sprite.switch_clip(match self.facing {
                Facing::Right => Clip::Fall,
                Facing::Left => Clip::FallLeft,
            });
        }
    }

    pub fn jump(&mut self, jump_velocity: f32) {
        self.velocity.y = jump_velocity;
    }
}

/// Requests the warrior filmstrips and builds the player's sprite from them.
pub fn warrior_sprite(loader: &mut ImageLoader, scale: f32) -> Result<AnimatedSprite, AnimationError> {
    let mut clip = |asset, frames, buffer| AnimationClip::new(loader.request(asset), frames, buffer);

    let clips = [
        (Clip::Idle, clip(Asset::WarriorIdle, animation::IDLE_FRAMES, animation::IDLE_FRAME_BUFFER)?),
        (Clip::IdleLeft, clip(Asset::WarriorIdleLeft, animation::IDLE_FRAMES, animation::IDLE_FRAME_BUFFER)?),
        (Clip::Run, clip(Asset::WarriorRun, animation::RUN_FRAMES, animation::RUN_FRAME_BUFFER)?),
        (Clip::RunLeft, clip(Asset::WarriorRunLeft, animation::RUN_FRAMES, animation::RUN_FRAME_BUFFER)?),
        (Clip::Jump, clip(Asset::WarriorJump, animation::JUMP_FRAMES, animation::JUMP_FRAME_BUFFER)?),
        (Clip::JumpLeft, clip(Asset::WarriorJumpLeft, animation::JUMP_FRAMES, animation::JUMP_FRAME_BUFFER)?),
        (Clip::Fall, clip(Asset::WarriorFall, animation::FALL_FRAMES, animation::FALL_FRAME_BUFFER)?),
        (Clip::FallLeft, clip(Asset::WarriorFallLeft, animation::FALL_FRAMES, animation::FALL_FRAME_BUFFER)?),
    ];

    // The sprite starts on the idle strip; requests are shared, so this is the Idle clip's image.
    let initial = clip(Asset::WarriorIdle, animation::IDLE_FRAMES, animation::DEFAULT_FRAME_BUFFER)?;
    Ok(AnimatedSprite::new(initial, scale).with_clips(clips))
}

/// Keeps the player inside the level, then runs its per-frame update.
pub fn player_update_system(
    config: Res<WorldConfig>,
    level: Res<Level>,
    mut render: ResMut<RenderQueue>,
    mut players: Query<&mut Player>,
) {
    for mut player in players.iter_mut() {
        let mut ctx = TickContext {
            config: &config,
            level: &level,
            render: &mut render,
        };
        player.check_for_horizontal_canvas_collision(config.viewport.level_size.x);
        player.update(&mut ctx);
    }
}

pub fn player_control_system(
    config: Res<WorldConfig>,
    keys: Res<HeldKeys>,
    mut camera: ResMut<Camera>,
    mut players: Query<&mut Player>,
) {
    for mut player in players.iter_mut() {
        player.control(*keys, &mut camera, &config);
    }
}

/// Applies jump commands to every player.
pub fn player_jump_system(
    config: Res<WorldConfig>,
    mut events: EventReader<GameEvent>,
    mut players: Query<&mut Player>,
    mut errors: EventWriter<GameError>,
) {
    for event in events.read() {
        if !matches!(event, GameEvent::Command(GameCommand::Jump)) {
            continue;
        }

        if players.is_empty() {
            errors.write(GameError::InvalidState("Jump requested with no player".to_string()));
            continue;
        }

        for mut player in players.iter_mut() {
            debug!(velocity = config.physics.jump_velocity, "Player jumped");
            player.jump(config.physics.jump_velocity);
        }
    }
}
