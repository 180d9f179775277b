//! One game: the ball, the pipes, the score and whether the player has lost.

use crate::{
    ActionButton,
    Ball,
    Config,
    PipeTrack,
    TickGate,
    collision,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    Playing,
    /// Frozen until the action button is pressed.
    Lost,
}

/// State changes reported by [`Session::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Transition {
    /// The ball hit a pipe, the floor or the ceiling.
    Lost { score: u32 },
    /// A new round started after a loss.
    Restarted,
}

#[derive(Clone, Debug)]
pub struct Session {
    config: Config,
    ball: Ball,
    track: PipeTrack,
    gate: TickGate,
    score: u32,
    state: GameState,
}

impl Session {
    pub fn new(config: Config) -> Self {
        info!("new session, seed {}", config.seed);
        Self {
            config,
            ball: Ball::new(&config),
            track: PipeTrack::new(config),
            gate: TickGate::new(config.tick_divider),
            score: 0,
            state: GameState::Playing,
        }
    }

    /// Sample `button` once and run one frame.
    pub fn frame<B: ActionButton + ?Sized>(&mut self, button: &mut B) -> Option<Transition> {
        let pressed = button.read();
        self.step(pressed)
    }

    /// Run one frame with the action button `pressed` or not.
    ///
    /// While playing, the world (pipes and score) advances only on frames the
    /// tick gate admits, while flapping, gravity and collision run every
    /// frame. While lost nothing moves; a press starts the next round.
    pub fn step(&mut self, pressed: bool) -> Option<Transition> {
        let world_tick = self.gate.admit();

        match self.state {
            GameState::Lost => {
                if !pressed {
                    return None;
                }
                self.reset();
                Some(Transition::Restarted)
            }
            GameState::Playing => {
                if world_tick {
                    self.track.advance();
                    self.score = self.score.wrapping_add(1);
                }
                if pressed {
                    self.ball.impulse(&self.config);
                }
                self.ball.integrate(&self.config);

                if !collision::check(self.ball.position, self.track.pipes(), &self.config) {
                    return None;
                }
                info!(
                    "collision at y={} with score {}",
                    self.ball.position.y,
                    self.score
                );
                self.state = GameState::Lost;
                Some(Transition::Lost { score: self.score })
            }
        }
    }

    /// Start a new round. The pipe stream is reseeded from the score the last
    /// round ended with, so consecutive rounds differ.
    pub fn reset(&mut self) {
        debug!("reset after score {}", self.score);
        self.track.reseed(u64::from(self.score));
        self.track.restart();
        self.ball = Ball::new(&self.config);
        self.score = 0;
        self.state = GameState::Playing;
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn ball(&self) -> &Ball {
        &self.ball
    }

    pub const fn track(&self) -> &PipeTrack {
        &self.track
    }

    /// Current score; after a loss, the score the round ended with.
    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn state(&self) -> GameState {
        self.state
    }

    pub fn is_lost(&self) -> bool {
        self.state == GameState::Lost
    }
}
