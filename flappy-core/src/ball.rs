//! Ball physics.

use embedded_graphics::prelude::Point;

use crate::Config;

/// The player. Only `y` ever changes; the world scrolls past a fixed `x`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ball {
    /// Centre, in playfield pixels.
    pub position: Point,
    /// Pixels per frame, positive downwards.
    pub velocity: f32,
}

impl Ball {
    /// At the start position, already falling at full speed.
    pub const fn new(config: &Config) -> Self {
        Self {
            position: config.ball_start(),
            velocity: config.max_fall_speed,
        }
    }

    /// Flap: replace whatever velocity was accumulated.
    pub const fn impulse(&mut self, config: &Config) {
        self.velocity = config.impulse_velocity;
    }

    /// One frame of gravity. The fall speed is clamped, the rise is not.
    pub fn integrate(&mut self, config: &Config) {
        self.velocity += config.gravity;
        if self.velocity > config.max_fall_speed {
            self.velocity = config.max_fall_speed;
        }
        // roundf rounds halfway cases away from zero
        self.position.y += libm::roundf(self.velocity) as i32;
    }
}
