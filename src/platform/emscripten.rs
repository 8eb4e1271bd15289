//! Emscripten platform implementation.

use crate::asset::Asset;
use crate::error::{AssetError, PlatformError};
use crate::formatter::CustomFormatter;
use sdl2::rwops::RWops;
use std::borrow::Cow;
use std::ffi::{c_void, CString};
use std::io::{self, Read, Write};
use std::os::raw::c_int;
use std::time::Duration;

/// Callback function type for emscripten main loop
pub type EmMainLoopCallback = unsafe extern "C" fn(*mut c_void);

// Emscripten FFI functions
extern "C" {
    fn emscripten_sleep(ms: u32);
    fn printf(format: *const u8, ...) -> i32;

    /// Set up a browser-friendly main loop with argument passing.
    /// - `fps`: target FPS (0 = use requestAnimationFrame)
    /// - `simulate_infinite_loop`: if 1, never returns
    pub fn emscripten_set_main_loop_arg(func: EmMainLoopCallback, arg: *mut c_void, fps: c_int, simulate_infinite_loop: c_int);
}

/// The browser schedules frames itself, so there is never anything to wait for.
pub fn sleep(_duration: Duration) {}

/// Yields control to the browser event loop without delay (requires ASYNCIFY).
pub fn yield_to_browser() {
    unsafe {
        emscripten_sleep(0);
    }
}

pub fn init_console() -> Result<(), PlatformError> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

    // Write straight to the browser console; it has no use for ANSI colors
    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(|| EmscriptenConsoleWriter)
                .with_ansi(false)
                .event_format(CustomFormatter),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(tracing_error::ErrorLayer::default());

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| PlatformError::ConsoleInit(format!("Failed to set tracing subscriber: {}", e)))?;

    Ok(())
}

/// A writer that outputs to the browser console via printf (redirected by emscripten)
struct EmscriptenConsoleWriter;

impl Write for EmscriptenConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(s) = std::str::from_utf8(buf) {
            if let Ok(cstr) = CString::new(s.trim_end_matches('\n')) {
                unsafe {
                    printf(c"%s\n".as_ptr().cast(), cstr.as_ptr());
                }
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn get_asset_bytes(asset: Asset) -> Result<Cow<'static, [u8]>, AssetError> {
    let path = format!("assets/{}", asset.path());
    let mut rwops = RWops::from_file(&path, "rb").map_err(|_| AssetError::NotFound(path.clone()))?;

    let len = rwops.len().ok_or_else(|| AssetError::NotFound(path.clone()))?;

    let mut buf = vec![0u8; len];
    rwops.read_exact(&mut buf).map_err(|e| AssetError::Io(io::Error::other(e)))?;

    Ok(Cow::Owned(buf))
}
