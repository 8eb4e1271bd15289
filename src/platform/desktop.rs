//! Desktop platform implementation.

use std::borrow::Cow;
use std::time::Duration;

use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

use crate::asset::Asset;
use crate::error::{AssetError, PlatformError};
use crate::formatter::CustomFormatter;

pub fn sleep(duration: Duration) {
    spin_sleep::sleep(duration);
}

/// Initialization on desktop never has to wait for the browser.
pub fn yield_to_browser() {}

pub fn init_console() -> Result<(), PlatformError> {
    let subscriber = tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).event_format(CustomFormatter))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PlatformError::ConsoleInit(format!("Failed to set tracing subscriber: {}", e)))?;

    Ok(())
}

/// Images are compiled into the binary; decoding still happens lazily in the asset loader.
pub fn get_asset_bytes(asset: Asset) -> Result<Cow<'static, [u8]>, AssetError> {
    match asset {
        Asset::Background => Ok(Cow::Borrowed(include_bytes!("../../assets/images/background.png"))),
        Asset::WarriorIdle => Ok(Cow::Borrowed(include_bytes!("../../assets/images/warrior/Idle.png"))),
        Asset::WarriorIdleLeft => Ok(Cow::Borrowed(include_bytes!("../../assets/images/warrior/IdleLeft.png"))),
        Asset::WarriorRun => Ok(Cow::Borrowed(include_bytes!("../../assets/images/warrior/Run.png"))),
        Asset::WarriorRunLeft => Ok(Cow::Borrowed(include_bytes!("../../assets/images/warrior/RunLeft.png"))),
        Asset::WarriorJump => Ok(Cow::Borrowed(include_bytes!("../../assets/images/warrior/Jump.png"))),
        Asset::WarriorJumpLeft => Ok(Cow::Borrowed(include_bytes!("../../assets/images/warrior/JumpLeft.png"))),
        Asset::WarriorFall => Ok(Cow::Borrowed(include_bytes!("../../assets/images/warrior/Fall.png"))),
        Asset::WarriorFallLeft => Ok(Cow::Borrowed(include_bytes!("../../assets/images/warrior/FallLeft.png"))),
    }
}
