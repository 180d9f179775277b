//! Procedural gap pairs.

use alloc::vec::Vec;

use rand::{
    Rng,
    SeedableRng,
};
use rand_pcg::Pcg32;

use crate::{
    Config,
    Pipe,
};

/// Produces gap pairs from a seeded PRNG.
///
/// Each pair is a top pipe hanging from the ceiling and a bottom pipe reaching
/// the floor. The passage between them is always `2 * gap_half_height` tall;
/// only its vertical position is random.
#[derive(Clone, Debug)]
pub struct PipeGenerator {
    rng: Pcg32,
    config: Config,
}

impl PipeGenerator {
    pub fn new(config: Config) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(config.seed),
            config,
        }
    }

    /// Restart the pipe stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        trace!("generator reseeded with {}", seed);
        self.rng = Pcg32::seed_from_u64(seed);
    }

    /// Append `pairs` pairs to `pipes`, the first at `leading_x`, each next one
    /// `pipe_spacing` further right.
    pub fn generate(&mut self, pipes: &mut Vec<Pipe>, leading_x: i32, pairs: usize) {
        pipes.reserve(pairs * 2);
        let mut x = leading_x;
        for _ in 0..pairs {
            let offset = self.offset();
            pipes.extend(self.pair_at(x, offset));
            x += self.config.pipe_spacing;
        }
    }

    /// The top and bottom pipe at `x` for a given gap offset.
    pub const fn pair_at(&self, x: i32, offset: i32) -> [Pipe; 2] {
        let config = &self.config;
        let centre = config.half_height() + offset;
        let top = Pipe::new(x, 0, config.pipe_width, centre - config.gap_half_height);
        let bottom_y = centre + config.gap_half_height;
        let bottom = Pipe::new(x, bottom_y, config.pipe_width, config.height - bottom_y);
        [top, bottom]
    }

    fn offset(&mut self) -> i32 {
        let (min, end) = (self.config.gap_offset_min, self.config.gap_offset_end);
        if end <= min {
            return min;
        }
        self.rng.random_range(min..end)
    }
}
