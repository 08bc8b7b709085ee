use crate::canvas::Canvas;
use crate::combat::{advance, fire};
use crate::controls::{Controls, Key, PlayerId};
use crate::debug;
use crate::entity::{Bullet, Color, Player, MAX_HEALTH};
use crate::intro::{Intro, IntroStatus};
use crate::movement::move_player;
use crate::notify::Notifications;
use crate::render::{draw_bullets, draw_players, draw_shields};
use crate::{
    DROP_START_Y, NOTIFICATION_OFFSET_X, PLAYER_ONE_START_X, PLAYER_SIZE, PLAYER_TWO_START_X,
};
use alloc::format;
use alloc::vec::Vec;
use log::{debug, info, trace};

/// Where the game is in its lifecycle, as seen by the frame loop.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// The players are dropping in; the duel has not started.
    Intro,
    /// The duel is live.
    Running,
    /// Nothing to do. Ticks are no-ops until the next restart.
    Stopped,
}

/// The whole game state.
///
/// Owns both players, every bullet in flight, the held keys, the running flag and the single
/// intro sequencer. The host drives it with [`Game::tick`] once per [`TIME_STEP`] and forwards
/// key events to [`Game::key_down`] and [`Game::key_up`].
///
/// [`TIME_STEP`]: crate::TIME_STEP
#[derive(Debug)]
pub struct Game {
    players: [Player; 2],
    bullets: Vec<Bullet>,
    controls: Controls,
    running: bool,
    intro: Intro,
    notifications: Notifications,
    debug: bool,
}

impl Game {
    /// Create a new game and start the intro drop.
    pub fn new() -> Self {
        let players = [
            Player::new(
                PLAYER_ONE_START_X,
                DROP_START_Y,
                PLAYER_SIZE,
                PLAYER_SIZE,
                Color::Blue,
            ),
            Player::new(
                PLAYER_TWO_START_X,
                DROP_START_Y,
                PLAYER_SIZE,
                PLAYER_SIZE,
                Color::Red,
            ),
        ];

        let mut game = Self {
            players,
            bullets: Vec::new(),
            controls: Controls::default(),
            running: false,
            intro: Intro::default(),
            notifications: Notifications::default(),
            debug: false,
        };
        game.intro.begin(&mut game.players);
        info!("Waiting for players to drop in");

        game
    }

    /// Enable debug visualizations.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::Running
        } else if self.intro.is_dropping() {
            Phase::Intro
        } else {
            Phase::Stopped
        }
    }

    /// Run one frame and paint it to `canvas`.
    ///
    /// Returns the phase the game is in after the frame. The host keeps calling `tick` for as long
    /// as it wants frames; a `Stopped` game leaves the canvas untouched.
    pub fn tick<C: Canvas>(&mut self, canvas: &mut C) -> Phase {
        self.notifications.tick();

        match self.phase() {
            Phase::Intro => {
                // The first duel frame is painted on the landing tick itself
                if self.intro.tick(&mut self.players, canvas) == IntroStatus::Landed {
                    self.start();
                    self.step(canvas);
                }
            }
            Phase::Running => self.step(canvas),
            Phase::Stopped => (),
        }

        self.phase()
    }

    /// Greet from both landing spots and let the duel begin.
    fn start(&mut self) {
        for (n, player) in (1..).zip(&self.players) {
            self.notifications.push(
                format!("{} Player {n} says: Player {n}!", badge(player.color)),
                player.x + NOTIFICATION_OFFSET_X,
                player.y,
            );
        }

        self.running = true;
        info!("Duel started after {} ticks", self.intro.ticks());
    }

    /// One frame of the running duel.
    fn step<C: Canvas>(&mut self, canvas: &mut C) {
        canvas.clear();

        // Movement first, so everything is drawn where it ends up this frame
        for id in PlayerId::ALL {
            let direction = self.controls.direction(id);
            move_player(&mut self.players[id.index()], direction);
        }

        advance(&mut self.bullets);
        draw_bullets(canvas, &self.bullets);
        draw_players(canvas, &self.players);
        draw_shields(canvas, &self.players);

        if self.debug {
            debug::draw_players(canvas, &self.players);
            debug::draw_bullets(canvas, &self.bullets);
        }

        trace!(
            "Players at ({}, {}) and ({}, {}), {} bullets",
            self.players[0].x,
            self.players[0].y,
            self.players[1].x,
            self.players[1].y,
            self.bullets.len()
        );
    }

    /// Reset everything and replay the intro drop.
    ///
    /// Health is restored but shield charge is left alone. Safe to call at any point, including
    /// halfway through a drop; the drop simply starts over.
    pub fn restart(&mut self) {
        for player in self.players.iter_mut() {
            player.health = MAX_HEALTH;
        }
        self.bullets.clear();
        self.notifications.clear();
        self.running = false;
        self.intro.begin(&mut self.players);

        info!("Restarting");
    }

    /// Handle a key press.
    ///
    /// Fire keys only work while the duel is running.
    pub fn key_down(&mut self, key: Key) {
        self.controls.set_held(key, true);

        if let Some(id) = key.shields() {
            self.set_shield(id, true);
        }
        if let Some(id) = key.fires() {
            self.fire(id);
        }
    }

    /// Handle a key release.
    pub fn key_up(&mut self, key: Key) {
        self.controls.set_held(key, false);

        if let Some(id) = key.shields() {
            self.set_shield(id, false);
        }
    }

    /// Raise or lower a player's shield, as if its shield key was pressed or released.
    pub fn set_shield(&mut self, id: PlayerId, value: bool) {
        self.controls.set_shield(id, value);
        self.players[id.index()].shield_active = value;
        debug!("Shield {} for {id:?}", if value { "raised" } else { "lowered" });
    }

    /// Release every key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.controls.clear();
        for player in self.players.iter_mut() {
            player.shield_active = false;
        }
    }

    /// Fire a bullet for one player. Does nothing unless the duel is running.
    pub fn fire(&mut self, id: PlayerId) -> Option<Bullet> {
        if !self.running {
            return None;
        }

        let bullet = fire(&mut self.bullets, &self.players[id.index()], id);
        debug!("{id:?} fired from ({}, {})", bullet.x, bullet.y);

        Some(bullet)
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }
}

/// Colored square the greetings start with.
fn badge(color: Color) -> &'static str {
    match color {
        Color::Blue => "\u{1f7e6}",
        Color::Red => "\u{1f7e5}",
        _ => "\u{2b1c}",
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
