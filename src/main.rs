#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use anyhow::Context;
use tracing::info;
use warrior_platformer::{app::App, constants::LOOP_TIME, platform};

// Emscripten-specific: static storage for the App instance
// Required because emscripten_set_main_loop_arg needs a persistent pointer
#[cfg(target_os = "emscripten")]
static mut APP: Option<App> = None;

/// Emscripten main loop callback - runs once per frame
#[cfg(target_os = "emscripten")]
unsafe extern "C" fn main_loop_callback(_arg: *mut std::ffi::c_void) {
    #[allow(static_mut_refs)]
    if let Some(ref mut app) = APP {
        let _ = app.run();
    }
}

/// The main entry point of the application.
///
/// This function initializes logging, SDL, the window and the game state, and then
/// enters the main game loop.
pub fn main() -> anyhow::Result<()> {
    // On Emscripten, this connects the subscriber to the browser console
    platform::init_console().context("Could not initialize console")?;

    let app = App::new().context("Could not create app")?;

    info!(loop_time = ?LOOP_TIME, "Starting game loop");

    #[cfg(target_os = "emscripten")]
    {
        use std::ptr;

        // Store app in static for callback access
        unsafe {
            APP = Some(app);
        }

        // fps=0 means use requestAnimationFrame
        // simulate_infinite_loop=1 means this call won't return
        unsafe {
            platform::emscripten_set_main_loop_arg(main_loop_callback, ptr::null_mut(), 0, 1);
        }
    }

    #[cfg(not(target_os = "emscripten"))]
    {
        let mut app = app;
        while app.run() {}
    }

    Ok(())
}
