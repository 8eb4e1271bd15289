//! Cross-platform asset loading abstraction.
//! On desktop, images are embedded with `include_bytes!`; on Emscripten, they are read from the
//! preloaded virtual filesystem.

use std::borrow::Cow;

use strum_macros::IntoStaticStr;

pub use crate::error::AssetError;
use crate::platform;

/// Every image the game can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Asset {
    Background,
    WarriorIdle,
    WarriorIdleLeft,
    WarriorRun,
    WarriorRunLeft,
    WarriorJump,
    WarriorJumpLeft,
    WarriorFall,
    WarriorFallLeft,
}

impl Asset {
    /// Path of the asset, relative to the asset root.
    pub fn path(&self) -> &'static str {
        use Asset::*;
        match self {
            Background => "images/background.png",
            WarriorIdle => "images/warrior/Idle.png",
            WarriorIdleLeft => "images/warrior/IdleLeft.png",
            WarriorRun => "images/warrior/Run.png",
            WarriorRunLeft => "images/warrior/RunLeft.png",
            WarriorJump => "images/warrior/Jump.png",
            WarriorJumpLeft => "images/warrior/JumpLeft.png",
            WarriorFall => "images/warrior/Fall.png",
            WarriorFallLeft => "images/warrior/FallLeft.png",
        }
    }

    /// Loads the raw bytes of the asset.
    pub fn get_bytes(&self) -> Result<Cow<'static, [u8]>, AssetError> {
        platform::get_asset_bytes(*self)
    }
}
