//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including components, systems,
//! and resources.

pub mod camera;
pub mod collision;
pub mod frame;
pub mod input;
pub mod loading;
pub mod player;
pub mod render;
pub mod state;

pub use self::camera::Camera;
pub use self::frame::{begin_frame_system, debug_overlay_system, end_frame_system, Background};
pub use self::input::{input_system, Bindings, HeldKeys};
pub use self::loading::asset_load_system;
pub use self::player::{player_control_system, player_jump_system, player_update_system, Facing, Player, TickContext};
pub use self::render::{present_system, DrawCommand, RenderQueue, Transform};
pub use self::state::{command_system, error_log_system, not_paused, DebugState, GlobalState, PauseState};
