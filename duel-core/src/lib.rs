//! A two-player local arcade duel to demonstrate `pixels`.
//!
//! Two rectangles drop into the arena, then move around, fire bullets at each other, and raise a
//! shield while the shield key is held. There is no scoring and bullets never hit anything; the
//! interesting part is the frame loop and the intro drop that gates it.
//!
//! Everything is driven through [`Game`]. The host calls [`Game::tick`] once per fixed time step
//! with a [`Canvas`] to paint on, and forwards key events to [`Game::key_down`] and
//! [`Game::key_up`].

#![no_std]
#![deny(clippy::all)]
#![forbid(unsafe_code)]

extern crate alloc;

pub use crate::canvas::{Canvas, FrameBuffer};
pub use crate::combat::{advance, fire};
pub use crate::controls::{Controls, Direction, Key, PlayerId};
pub use crate::entity::{Bullet, Color, Player};
pub use crate::game::{Game, Phase};
pub use crate::intro::{Intro, IntroStatus};
pub use crate::movement::move_player;
pub use crate::notify::{Notification, Notifications};
pub use crate::render::{draw_bullets, draw_players, draw_shields, render};
use core::time::Duration;

mod canvas;
mod combat;
mod controls;
mod debug;
mod entity;
mod game;
mod intro;
mod movement;
mod notify;
mod render;

/// The screen width is constant (units are in pixels)
pub const WIDTH: usize = 800;
/// The screen height is constant (units are in pixels)
pub const HEIGHT: usize = 400;

// Fixed time step, one tick per display frame
pub const FPS: usize = 60;
pub const TIME_STEP: Duration = Duration::from_nanos(1_000_000_000 / FPS as u64);

/// Distance a player moves per tick on each held axis.
pub const SPEED: f32 = 5.0;
/// Horizontal distance a bullet travels per tick.
pub const BULLET_SPEED: f32 = 7.0;
/// Distance a player falls per tick during the intro.
pub const DROP_SPEED: f32 = 5.0;
/// Off-screen row where the intro drop begins.
pub const DROP_START_Y: f32 = -50.0;
/// Row where dropped players come to rest and the duel begins.
pub const RESTING_ROW: f32 = 300.0;
/// How long a notification stays on screen.
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_millis(2000);

// Player positioning
const PLAYER_ONE_START_X: f32 = 100.0;
const PLAYER_TWO_START_X: f32 = 600.0;
const PLAYER_SIZE: f32 = 40.0;

// Projectile size
const BULLET_WIDTH: f32 = 10.0;
const BULLET_HEIGHT: f32 = 5.0;

// Shield outline
const SHIELD_PADDING: f32 = 5.0;
const SHIELD_LINE_WIDTH: f32 = 3.0;

// Notifications are anchored just right of the player
const NOTIFICATION_OFFSET_X: f32 = 30.0;
