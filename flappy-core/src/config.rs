//! Gameplay constants.
//!
//! [`Config::new`] reproduces the reference tuning on a 320×240 playfield.
//! Boards with a different panel adjust it with the `with_*` builders:
//!
//! ```
//! use flappy_core::{Config, Regeneration};
//!
//! const BADGE: Config = Config::new()
//!     .with_playfield(320, 170)
//!     .with_gap(35, -45, 45)
//!     .with_regeneration(Regeneration::OnRemoval);
//!
//! assert_eq!(BADGE.pipe_start, 160);
//! assert_eq!(BADGE.gap_height(), 70);
//! ```

use embedded_graphics::prelude::Point;

/// How the pipe track refills itself after a scroll tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Regeneration {
    /// Append one pair on every tick, whether or not a pipe left the screen.
    /// The list keeps growing while the round lasts.
    EveryTick,
    /// Append one pair only on ticks where a pipe was removed.
    OnRemoval,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Playfield width in pixels.
    pub width: i32,
    /// Playfield height in pixels.
    pub height: i32,

    /// X of the first pair generated on (re)start.
    pub pipe_start: i32,
    pub pipe_width: i32,
    /// Horizontal distance between consecutive pairs.
    pub pipe_spacing: i32,
    /// Pixels scrolled per world tick.
    pub pipe_speed: i32,
    /// Pairs generated on (re)start.
    pub initial_pairs: usize,
    pub regeneration: Regeneration,

    /// Half of the vertical passage between a top and a bottom pipe.
    pub gap_half_height: i32,
    /// Lower bound (inclusive) of the random gap offset.
    pub gap_offset_min: i32,
    /// Upper bound (exclusive) of the random gap offset.
    pub gap_offset_end: i32,

    /// Fixed horizontal position of the ball.
    pub ball_x: i32,
    pub ball_radius: i32,
    /// Pipes whose x is further than this from the ball's x are not tested.
    pub collision_band: i32,

    /// Added to the velocity every frame, in pixels per frame².
    pub gravity: f32,
    /// Downward velocity clamp. Also the velocity a round starts with.
    pub max_fall_speed: f32,
    /// Velocity set by a flap.
    pub impulse_velocity: f32,

    /// World ticks (scroll and score) run once every this many frames.
    pub tick_divider: u8,
    /// Seed of the first round's pipe stream.
    pub seed: u64,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            width: 320,
            height: 240,
            pipe_start: 160,
            pipe_width: 30,
            pipe_spacing: 120,
            pipe_speed: 1,
            initial_pairs: 5,
            regeneration: Regeneration::EveryTick,
            gap_half_height: 50,
            gap_offset_min: -100,
            gap_offset_end: 100,
            ball_x: 50,
            ball_radius: 10,
            collision_band: 20,
            gravity: 0.05,
            max_fall_speed: 2.0,
            impulse_velocity: -2.0,
            tick_divider: 2,
            seed: 12345,
        }
    }

    /// Resize the playfield. The first pair moves to the horizontal centre.
    #[must_use]
    pub const fn with_playfield(self, width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            pipe_start: width / 2,
            ..self
        }
    }

    /// Gap half-height and the `min..end` range of its random vertical offset.
    #[must_use]
    pub const fn with_gap(self, half_height: i32, offset_min: i32, offset_end: i32) -> Self {
        Self {
            gap_half_height: half_height,
            gap_offset_min: offset_min,
            gap_offset_end: offset_end,
            ..self
        }
    }

    #[must_use]
    pub const fn with_regeneration(self, regeneration: Regeneration) -> Self {
        Self {
            regeneration,
            ..self
        }
    }

    #[must_use]
    pub const fn with_tick_divider(self, tick_divider: u8) -> Self {
        Self {
            tick_divider,
            ..self
        }
    }

    #[must_use]
    pub const fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub const fn half_height(&self) -> i32 {
        self.height / 2
    }

    pub const fn gap_height(&self) -> i32 {
        self.gap_half_height * 2
    }

    /// Where the ball sits at the start of every round.
    pub const fn ball_start(&self) -> Point {
        Point::new(self.ball_x, self.half_height())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_tuning() {
        let config = Config::default();
        assert_eq!(config.pipe_start, config.width / 2);
        assert_eq!(config.gap_height(), 100);
        assert_eq!(config.ball_start(), Point::new(50, 120));
        assert_eq!(config.regeneration, Regeneration::EveryTick);
    }

    #[test]
    fn builders_only_touch_their_fields() {
        let config = Config::new().with_playfield(320, 170).with_seed(7);
        assert_eq!(config.height, 170);
        assert_eq!(config.pipe_start, 160);
        assert_eq!(config.ball_start(), Point::new(50, 85));
        assert_eq!(config.seed, 7);
        assert_eq!(config.pipe_spacing, Config::new().pipe_spacing);
    }
}
