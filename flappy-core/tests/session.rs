use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
};
use flappy_core::{
    Ball,
    Config,
    Framebuffer,
    GameState,
    Regeneration,
    Session,
    Theme,
    Transition,
    render,
};

#[test]
fn falls_to_the_floor_and_freezes_until_reset() {
    let config = Config::new();
    let mut session = Session::new(config);

    let mut lost_at = None;
    for frame in 0..200 {
        if let Some(Transition::Lost { score }) = session.step(false) {
            lost_at = Some((frame, score));
            break;
        }
        assert_eq!(session.ball().velocity, config.max_fall_speed);
    }
    let (frame, score) = lost_at.expect("no collision within 200 frames");
    assert!(frame < 200);
    assert_eq!(session.state(), GameState::Lost);
    assert!(session.ball().position.y + config.ball_radius > config.height);
    assert_eq!(session.score(), score);

    let pipes = session.track().pipes().to_vec();
    for _ in 0..100 {
        assert_eq!(session.step(false), None);
    }
    assert_eq!(session.track().pipes(), &pipes[..]);
    assert_eq!(session.score(), score);

    assert_eq!(session.step(true), Some(Transition::Restarted));
    assert_eq!(session.score(), 0);
    assert_eq!(*session.ball(), Ball::new(&config));
    assert_eq!(session.ball().position, Point::new(50, config.height / 2));
    assert_eq!(session.track().len(), 2 * config.initial_pairs);
}

#[test]
fn flapping_through_the_first_pipes_keeps_scoring() {
    // A pilot that flaps whenever the ball sinks below the gap of the next pair
    // that can still hit it. A flap carries the ball about 40px up, hence the
    // clamp away from the ceiling.
    let config = Config::new().with_regeneration(Regeneration::OnRemoval);
    let mut session = Session::new(config);
    let band_start = config.ball_x - config.collision_band;

    for _ in 0..3_000 {
        let ball = session.ball().position;
        let target = session
            .track()
            .pipes()
            .chunks(2)
            .find(|pair| pair[0].x >= band_start)
            .map_or(config.half_height(), |pair| {
                ((pair[0].bottom() + pair[1].y) / 2 + 10).clamp(52, 226)
            });
        session.step(ball.y > target);
        assert_eq!(
            session.state(),
            GameState::Playing,
            "lost at score {}",
            session.score()
        );
    }
    assert_eq!(session.score(), 1_500);
}

#[test]
fn every_frame_renders_in_both_states() {
    let config = Config::new().with_playfield(320, 170).with_gap(35, -45, 45);
    let mut session = Session::new(config);
    let mut pixels = vec![Rgb565::BLACK; (config.width * config.height) as usize];

    let mut saw_lost = false;
    for _ in 0..300 {
        session.step(false);
        saw_lost |= session.is_lost();
        let mut canvas = Framebuffer::new(&mut pixels, config.width as u32);
        let Ok(()) = render(&session, &Theme::DEFAULT, &mut canvas);
        assert_eq!(canvas.size(), Size::new(320, 170));
    }
    assert!(saw_lost);
    assert!(pixels.iter().any(|c| *c == Theme::DEFAULT.panel));
}
