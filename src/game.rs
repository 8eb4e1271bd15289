//! This module contains the main game logic and state.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use sdl2::event::EventType;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{debug, info, trace};

use crate::config::WorldConfig;
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::map::builder::Level;
use crate::platform;
use crate::systems::player::warrior_sprite;
use crate::systems::{
    self, asset_load_system, begin_frame_system, command_system, debug_overlay_system, end_frame_system, error_log_system,
    not_paused, player_control_system, player_jump_system, player_update_system, present_system, Background, Bindings,
    Camera, DebugState, GlobalState, HeldKeys, PauseState, Player, RenderQueue,
};
use crate::texture::image::{ImageLoader, TextureStore};

/// Core game state manager built on the Bevy ECS architecture.
///
/// The `World` holds the player entity and every resource the frame needs; the
/// `Schedule` runs input, gameplay and drawing in a fixed order once per tick.
/// SDL2 objects are stored as `NonSend` resources since they must stay on the main thread.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    /// Builds the world, requests every image and configures the schedule.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if the embedded level data is malformed or an animation is
    /// configured with no frames.
    pub fn new(
        canvas: Canvas<Window>,
        texture_creator: TextureCreator<WindowContext>,
        mut event_pump: EventPump,
    ) -> GameResult<Game> {
        info!("Starting game initialization");

        debug!("Disabling unnecessary SDL events");
        Self::disable_sdl_events(&mut event_pump);

        let mut world = World::default();
        let mut schedule = Schedule::default();

        debug!("Inserting gameplay resources and spawning the player");
        Self::setup_world(&mut world, WorldConfig::default())?;
        trace!("Yielding after world setup");
        platform::yield_to_browser();

        world.insert_non_send_resource(event_pump);
        world.insert_non_send_resource::<&mut Canvas<Window>>(Box::leak(Box::new(canvas)));
        world.insert_non_send_resource(texture_creator);
        world.insert_non_send_resource(TextureStore::default());

        debug!("Configuring system execution schedule");
        Self::configure_schedule(&mut schedule);

        info!("Game initialization completed successfully");
        Ok(Game { world, schedule })
    }

    /// Inserts every SDL-independent resource and spawns the player.
    ///
    /// Images are only requested here; they are decoded later by the asset loader.
    pub fn setup_world(world: &mut World, config: WorldConfig) -> GameResult<()> {
        EventRegistry::register_event::<GameError>(world);
        EventRegistry::register_event::<GameEvent>(world);

        let level = Level::load_embedded(&config.tiles)?;
        info!(
            solid = level.solid_blocks().len(),
            platforms = level.platform_blocks().len(),
            "Level loaded"
        );

        let mut loader = ImageLoader::default();
        let background = Background::new(&mut loader)?;
        let sprite = warrior_sprite(&mut loader, config.player.sprite_scale)?;
        debug!(requested = loader.pending_count(), "Images requested");

        world.spawn(Player::new(&config.player, sprite));

        world.insert_resource(Camera::initial(&config.viewport));
        world.insert_resource(level);
        world.insert_resource(background);
        world.insert_resource(loader);
        world.insert_resource(config);
        world.insert_resource(GlobalState::default());
        world.insert_resource(PauseState::default());
        world.insert_resource(DebugState::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(HeldKeys::default());
        world.insert_resource(RenderQueue::default());
        Ok(())
    }

    fn configure_schedule(schedule: &mut Schedule) {
        let gameplay = (
            player_jump_system,
            begin_frame_system,
            player_update_system,
            player_control_system,
            debug_overlay_system,
            end_frame_system,
        )
            .chain()
            .run_if(not_paused);

        schedule.add_systems(
            (
                systems::input_system,
                command_system,
                asset_load_system,
                gameplay,
                present_system,
                error_log_system,
            )
                .chain(),
        );
    }

    fn disable_sdl_events(event_pump: &mut EventPump) {
        for event_type in [
            EventType::JoyAxisMotion,
            EventType::JoyBallMotion,
            EventType::JoyHatMotion,
            EventType::JoyButtonDown,
            EventType::JoyButtonUp,
            EventType::JoyDeviceAdded,
            EventType::JoyDeviceRemoved,
            EventType::ControllerAxisMotion,
            EventType::ControllerButtonDown,
            EventType::ControllerButtonUp,
            EventType::ControllerDeviceAdded,
            EventType::ControllerDeviceRemoved,
            EventType::ControllerDeviceRemapped,
            EventType::FingerDown,
            EventType::FingerUp,
            EventType::FingerMotion,
            EventType::MouseMotion,
            EventType::MouseButtonDown,
            EventType::MouseButtonUp,
            EventType::MouseWheel,
            EventType::DropFile,
            EventType::TextInput,
            EventType::TextEditing,
        ] {
            event_pump.disable_event(event_type);
        }
    }

    /// Runs one frame: input, commands, image loading, gameplay and presentation.
    ///
    /// # Returns
    ///
    /// `true` if the game should terminate (exit command received), `false` to continue
    pub fn tick(&mut self) -> bool {
        self.schedule.run(&mut self.world);

        // Events live for two ticks, so each reader sees every event once
        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<GameError>>().update();

        self.world.get_resource::<GlobalState>().is_some_and(|state| state.exit)
    }
}
