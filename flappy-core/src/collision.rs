//! Ball against the world.
//!
//! Pipes are tested with the ball's centre point only, not its full circle,
//! so a ball grazing a pipe edge with its rim survives.

use embedded_graphics::prelude::Point;

use crate::{
    Config,
    Pipe,
};

/// The ball's rim crosses the floor or the ceiling.
pub const fn out_of_bounds(ball: Point, config: &Config) -> bool {
    ball.y + config.ball_radius > config.height || ball.y - config.ball_radius < 0
}

/// Only pipes near the ball's column are worth testing.
pub const fn in_band(pipe: &Pipe, ball: Point, config: &Config) -> bool {
    (pipe.x - ball.x).abs() <= config.collision_band
}

/// `true` on the first collision found.
pub fn check(ball: Point, pipes: &[Pipe], config: &Config) -> bool {
    out_of_bounds(ball, config)
        || pipes
            .iter()
            .filter(|pipe| in_band(pipe, ball, config))
            .any(|pipe| pipe.contains(ball))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_and_ceiling() {
        let config = Config::new();
        assert!(check(Point::new(50, 235), &[], &config));
        assert!(check(Point::new(50, 5), &[], &config));
        assert!(!check(Point::new(50, 230), &[], &config));
        assert!(!check(Point::new(50, 10), &[], &config));
        assert!(check(Point::new(50, 231), &[], &config));
    }

    #[test]
    fn band_is_thirty_to_seventy_for_the_default_ball() {
        let config = Config::new();
        let ball = config.ball_start();
        let at = |x| Pipe::new(x, 0, 30, 10);
        assert!(!in_band(&at(29), ball, &config));
        assert!(in_band(&at(30), ball, &config));
        assert!(in_band(&at(70), ball, &config));
        assert!(!in_band(&at(71), ball, &config));
    }

    #[test]
    fn pipe_outside_band_is_ignored_even_when_it_covers_the_ball() {
        let config = Config::new();
        let pipe = Pipe::new(25, 0, 30, 200);
        let ball = Point::new(50, 120);
        assert!(pipe.contains(ball));
        assert!(!check(ball, &[pipe], &config));
    }

    #[test]
    fn centre_inside_a_pipe_in_band_collides() {
        let config = Config::new();
        let ball = Point::new(50, 120);
        let pipes = [Pipe::new(200, 0, 30, 240), Pipe::new(40, 100, 30, 140)];
        assert!(check(ball, &pipes, &config));
    }

    #[test]
    fn rim_overlap_alone_does_not_collide() {
        let config = Config::new();
        // Top pipe ends 5px above the centre, well within the 10px radius.
        let pipes = [Pipe::new(40, 0, 30, 115)];
        assert!(!check(Point::new(50, 120), &pipes, &config));
    }
}
