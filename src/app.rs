use std::time::{Duration, Instant};

use sdl2::Sdl;
use tracing::{debug, info, trace};

use crate::constants::{CANVAS_SIZE, LOOP_TIME};
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;
use crate::platform;

/// Main application wrapper that manages SDL initialization, window lifecycle, and the game loop.
pub struct App {
    pub game: Game,
    // Keep SDL alive for the app lifetime so the video subsystem is not shut down
    _sdl_context: Sdl,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and sets up the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails, or propagates
    /// errors from `Game::new()` during game state setup.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;
        trace!("Yielding after subsystem init");
        platform::yield_to_browser();

        trace!(width = CANVAS_SIZE.x, height = CANVAS_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window("Warrior", CANVAS_SIZE.x, CANVAS_SIZE.y)
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        trace!("Creating hardware-accelerated canvas");
        let mut canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");
        trace!("Yielding after canvas creation");
        platform::yield_to_browser();

        let texture_creator = canvas.texture_creator();
        let game = Game::new(canvas, texture_creator, event_pump)?;

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            _sdl_context: sdl_context,
        })
    }

    /// Executes a single frame and sleeps away whatever remains of `LOOP_TIME`.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the game requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        formatter::increment_frame();

        if self.game.tick() {
            info!("Exiting game loop");
            return false;
        }

        let time = LOOP_TIME.saturating_sub(start.elapsed());
        if time != Duration::ZERO {
            platform::sleep(time);
        }

        true
    }
}
