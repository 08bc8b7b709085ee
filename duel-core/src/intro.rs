use crate::canvas::Canvas;
use crate::entity::Player;
use crate::render::draw_players;
use crate::{DROP_SPEED, DROP_START_Y, PLAYER_ONE_START_X, PLAYER_TWO_START_X, RESTING_ROW};
use log::{debug, trace};

/// The intro animation: both players fall from above the arena onto the resting row.
///
/// A game owns exactly one `Intro`. Restarting resets it in place, which replaces any drop that is
/// still in flight.
#[derive(Debug, Default)]
pub struct Intro {
    state: State,
    ticks: usize,
}

#[derive(Debug, Default, Eq, PartialEq)]
enum State {
    Dropping,
    #[default]
    Done,
}

/// Outcome of one intro tick.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum IntroStatus {
    /// At least one player is still falling.
    Dropping,
    /// Both players reached the resting row on this tick.
    Landed,
    /// The intro is not running.
    Idle,
}

impl Intro {
    /// Put both players above the arena and start dropping them.
    pub fn begin(&mut self, players: &mut [Player; 2]) {
        let [one, two] = players;
        one.x = PLAYER_ONE_START_X;
        one.y = DROP_START_Y;
        two.x = PLAYER_TWO_START_X;
        two.y = DROP_START_Y;

        self.state = State::Dropping;
        self.ticks = 0;
        debug!("Intro drop started");
    }

    pub fn is_dropping(&self) -> bool {
        self.state == State::Dropping
    }

    /// Number of ticks since the drop started.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Advance the drop by one tick and paint it.
    ///
    /// Players fall independently and each stops on its own at the resting row. The drop is over
    /// on the first tick where both have arrived.
    pub fn tick<C: Canvas>(&mut self, players: &mut [Player; 2], canvas: &mut C) -> IntroStatus {
        if self.state == State::Done {
            return IntroStatus::Idle;
        }
        self.ticks += 1;

        canvas.clear();
        for player in players.iter_mut() {
            if player.y < RESTING_ROW {
                player.y += DROP_SPEED;
            }
        }
        draw_players(canvas, players);
        trace!(
            "Intro tick {}: y = ({}, {})",
            self.ticks,
            players[0].y,
            players[1].y
        );

        if players.iter().all(|player| player.y >= RESTING_ROW) {
            self.state = State::Done;
            debug!("Players landed after {} ticks", self.ticks);

            IntroStatus::Landed
        } else {
            IntroStatus::Dropping
        }
    }
}
