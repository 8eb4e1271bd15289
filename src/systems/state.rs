use bevy_ecs::{
    event::EventReader,
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::{info, warn};

use crate::error::GameError;
use crate::events::{GameCommand, GameEvent};

#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct GlobalState {
    pub exit: bool,
}

#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum PauseState {
    #[default]
    Inactive,
    Active,
}

impl PauseState {
    pub fn active(&self) -> bool {
        matches!(self, PauseState::Active)
    }

    pub fn toggled(&self) -> Self {
        match self {
            PauseState::Active => PauseState::Inactive,
            PauseState::Inactive => PauseState::Active,
        }
    }
}

/// Whether collision geometry is drawn over the level.
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum DebugState {
    #[default]
    Off,
    Collision,
}

impl DebugState {
    pub fn next(&self) -> Self {
        match self {
            DebugState::Off => DebugState::Collision,
            DebugState::Collision => DebugState::Off,
        }
    }

    pub fn enabled(&self) -> bool {
        matches!(self, DebugState::Collision)
    }
}

/// Run condition: gameplay systems only run while the game is not paused.
pub fn not_paused(pause: Res<PauseState>) -> bool {
    !pause.active()
}

/// Handles the commands that change global game state.
pub fn command_system(
    mut events: EventReader<GameEvent>,
    mut state: ResMut<GlobalState>,
    mut pause: ResMut<PauseState>,
    mut debug: ResMut<DebugState>,
) {
    for event in events.read() {
        match event {
            GameEvent::Command(GameCommand::Exit) => {
                info!("Exit requested");
                state.exit = true;
            }
            GameEvent::Command(GameCommand::TogglePause) => {
                *pause = pause.toggled();
                info!(paused = pause.active(), "Pause toggled");
            }
            GameEvent::Command(GameCommand::ToggleDebug) => {
                *debug = debug.next();
                let debug_state = *debug;
                info!(debug = ?debug_state, "Debug overlay toggled");
            }
            GameEvent::Command(GameCommand::Jump) => {}
        }
    }
}

/// Reports runtime errors without interrupting the frame loop.
pub fn error_log_system(mut errors: EventReader<GameError>) {
    for error in errors.read() {
        warn!(error = %error, "Game error");
    }
}
