//! Centralized error types for the platformer.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use std::io;

use bevy_ecs::event::Event;

use crate::texture::image::ImageId;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
/// Runtime failures are also sent through the ECS as events so that a
/// single system can report them without stopping the frame loop.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Level parsing error: {0}")]
    LevelParse(#[from] ParseError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Asset not found: {0}")]
    NotFound(String),
}

/// Platform-specific errors.
#[derive(thiserror::Error, Debug)]
pub enum PlatformError {
    #[error("Console initialization failed: {0}")]
    ConsoleInit(String),
}

/// Error type for level data parsing.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid tile code {token:?} at index {index}")]
    InvalidTileCode { index: usize, token: String },
}

/// Errors related to texture operations.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Failed to load texture: {0}")]
    LoadFailed(String),

    #[error("Texture not found in store: {0:?}")]
    NotFound(ImageId),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

/// Errors raised when building animation clips.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError {
    #[error("Frame count must be positive")]
    NoFrames,

    #[error("Frame buffer must be positive")]
    NoFrameBuffer,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
