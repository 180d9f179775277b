//! The scrolling stream of pipes.

use alloc::vec::Vec;

use crate::{
    Config,
    Pipe,
    PipeGenerator,
    Regeneration,
};

/// Anchor used for the new pair when no pipe survived a scroll tick.
const NO_SURVIVOR_X: i32 = -20;

/// Owns the pipes in spawn order (left to right) and keeps the stream fed.
#[derive(Clone, Debug)]
pub struct PipeTrack {
    pipes: Vec<Pipe>,
    generator: PipeGenerator,
    config: Config,
}

impl PipeTrack {
    /// A track holding the initial batch of pairs.
    pub fn new(config: Config) -> Self {
        let mut track = Self {
            pipes: Vec::new(),
            generator: PipeGenerator::new(config),
            config,
        };
        track.restart();
        track
    }

    /// Drop every pipe and generate the initial batch again at `pipe_start`.
    pub fn restart(&mut self) {
        self.pipes.clear();
        self.generator.generate(
            &mut self.pipes,
            self.config.pipe_start,
            self.config.initial_pairs,
        );
    }

    pub fn reseed(&mut self, seed: u64) {
        self.generator.reseed(seed);
    }

    /// One scroll tick.
    ///
    /// Pipes that are already past the left edge are removed without being
    /// moved; every other pipe moves left by `pipe_speed`. A new pair is then
    /// appended `pipe_spacing` to the right of the rightmost survivor, on every
    /// tick or only after a removal depending on [`Regeneration`].
    ///
    /// Returns how many pipes were removed.
    pub fn advance(&mut self) -> usize {
        let speed = self.config.pipe_speed;
        let before = self.pipes.len();
        let mut max_x = NO_SURVIVOR_X;

        self.pipes.retain_mut(|pipe| {
            if pipe.is_off_screen() {
                return false;
            }
            pipe.x -= speed;
            max_x = max_x.max(pipe.x);
            true
        });

        let removed = before - self.pipes.len();
        let regenerate = match self.config.regeneration {
            Regeneration::EveryTick => true,
            Regeneration::OnRemoval => removed > 0,
        };
        if regenerate {
            self.generator
                .generate(&mut self.pipes, max_x + self.config.pipe_spacing, 1);
        }
        if removed > 0 {
            trace!("recycled {} pipes, {} on track", removed, self.pipes.len());
        }
        removed
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// X of the rightmost pipe, i.e. how far ahead the track is populated.
    pub fn rightmost_x(&self) -> Option<i32> {
        self.pipes.iter().map(|pipe| pipe.x).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_initial_batch() {
        let track = PipeTrack::new(Config::new());
        assert_eq!(track.len(), 10);
        assert_eq!(track.pipes()[0].x, 160);
        assert_eq!(track.rightmost_x(), Some(160 + 4 * 120));
    }

    #[test]
    fn every_tick_appends_a_pair_behind_the_rightmost_survivor() {
        let mut track = PipeTrack::new(Config::new());
        assert_eq!(track.advance(), 0);

        assert_eq!(track.len(), 12);
        assert_eq!(track.pipes()[0].x, 159);
        let [top, bottom] = [track.pipes()[10], track.pipes()[11]];
        assert_eq!(top.x, 639 + 120);
        assert_eq!(bottom.x, top.x);
    }

    #[test]
    fn every_tick_never_shrinks_and_never_empties() {
        let mut track = PipeTrack::new(Config::new());
        for _ in 0..2_000 {
            let before = track.len();
            let removed = track.advance();
            assert!(track.len() >= before, "{} -> {}", before, track.len());
            assert_eq!(track.len(), before - removed + 2);
            assert!(track.rightmost_x().unwrap() >= 320);
        }
    }

    #[test]
    fn off_screen_pipes_are_removed_without_scrolling_the_rest_twice() {
        let config = Config::new().with_regeneration(Regeneration::OnRemoval);
        let mut track = PipeTrack::new(config);
        // First pair reaches x + width == 0 after 190 ticks and leaves on the 191st.
        for _ in 0..190 {
            assert_eq!(track.advance(), 0);
        }
        assert_eq!(track.pipes()[0].x, -30);
        let second_x = track.pipes()[2].x;

        assert_eq!(track.advance(), 2);
        assert_eq!(track.len(), 10);
        assert_eq!(track.pipes()[0].x, second_x - 1);
        assert_eq!(track.pipes()[8].x, 640 - 191 + 120);
    }

    #[test]
    fn on_removal_keeps_the_track_bounded() {
        let config = Config::new().with_regeneration(Regeneration::OnRemoval);
        let mut track = PipeTrack::new(config);
        for _ in 0..10_000 {
            track.advance();
            assert_eq!(track.len(), 10);
            assert!(track.rightmost_x().unwrap() >= config.width);
        }
    }

    #[test]
    fn restart_regenerates_the_startup_batch() {
        let mut track = PipeTrack::new(Config::new());
        for _ in 0..50 {
            track.advance();
        }
        track.restart();
        assert_eq!(track.len(), 10);
        assert_eq!(track.pipes()[0].x, 160);
    }
}
