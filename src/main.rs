#![deny(clippy::all)]
#![forbid(unsafe_code)]

use crate::config::Config;
use crate::error::Error;
use crate::keymap::{auto_repeats, BINDINGS};
use duel_core::{FrameBuffer, Game, FPS, HEIGHT, TIME_STEP, WIDTH};
use error_iter::ErrorIter as _;
use game_loop::{game_loop, Time, TimeTrait as _};
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::Duration;
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::KeyCode;
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

mod config;
mod error;
mod keymap;
mod overlay;

/// Uber-struct representing the entire application.
struct Duel {
    /// Software renderer.
    pixels: Pixels<'static>,
    /// The duel itself.
    game: Game,
    /// Event manager.
    input: WinitInputHelper,
}

impl Duel {
    fn new(pixels: Pixels<'static>, debug: bool) -> Self {
        let mut game = Game::new();
        game.set_debug(debug);

        Self {
            pixels,
            game,
            input: WinitInputHelper::new(),
        }
    }

    /// Forward key presses and releases for every bound key.
    ///
    /// Fire keys also forward the OS key repeat, so holding one keeps shooting.
    fn update_controls(&mut self) {
        for (code, key) in BINDINGS {
            let pressed = if auto_repeats(key) {
                self.input.key_pressed_os(code)
            } else {
                self.input.key_pressed(code)
            };
            if pressed {
                debug!("{code:?} pressed");
                self.game.key_down(key);
            }
            if self.input.key_released(code) {
                self.game.key_up(key);
            }
        }
    }

    /// Run one tick and paint it, with the notification labels on top.
    fn update(&mut self) {
        let frame = self.pixels.frame_mut();
        self.game.tick(&mut FrameBuffer::new(frame));
        overlay::draw_notifications(frame, self.game.notifications());
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();
    let config = Config::from_env();
    let event_loop = EventLoop::new()?;

    let window = {
        let size = LogicalSize::new(WIDTH as f64, HEIGHT as f64);
        let scaled_size =
            LogicalSize::new(WIDTH as f64 * config.scale, HEIGHT as f64 * config.scale);
        let window = WindowBuilder::new()
            .with_title("pixel duel")
            .with_inner_size(scaled_size)
            .with_min_inner_size(size)
            .build(&event_loop)?;
        Arc::new(window)
    };

    let pixels = {
        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, Arc::clone(&window));
        Pixels::new(WIDTH as u32, HEIGHT as u32, surface_texture)?
    };

    info!("Player 1: WASD to move, Space to fire, Q to shield");
    info!("Player 2: arrows to move, Enter to fire, M to shield");
    let duel = Duel::new(pixels, config.debug);

    game_loop(
        event_loop,
        window,
        duel,
        FPS as u32,
        0.1,
        move |g| {
            g.game.update();
        },
        move |g| {
            if let Err(err) = g.game.pixels.render() {
                log_error("pixels.render", err);
                g.exit();
            }

            // Sleep the main thread to limit drawing to the fixed time step.
            let dt = TIME_STEP.as_secs_f64() - Time::now().sub(&g.current_instant());
            if dt > 0.0 {
                std::thread::sleep(Duration::from_secs_f64(dt));
            }
        },
        |g, event| {
            // Keys held while the window loses focus never see their release
            if let Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } = event
            {
                g.game.game.release_all();
            }

            // Let winit_input_helper collect events to build its state.
            if g.game.input.update(event) {
                // Close events
                if g.game.input.key_pressed(KeyCode::Escape) || g.game.input.close_requested() {
                    g.exit();
                    return;
                }

                // Restart the duel
                if g.game.input.key_pressed(KeyCode::KeyR) {
                    g.game.game.restart();
                }

                g.game.update_controls();

                // Resize the window
                if let Some(size) = g.game.input.window_resized() {
                    if let Err(err) = g.game.pixels.resize_surface(size.width, size.height) {
                        log_error("pixels.resize_surface", err);
                        g.exit();
                    }
                }
            }
        },
    )?;

    Ok(())
}

fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
