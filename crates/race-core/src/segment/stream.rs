use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::{Passages, Segment, SegmentSource};
use crate::settings::{settings, SegmentSettings};

/// Counter-driven segment generator: segment `n` draws a random passage
/// from the pool matching `difficulty_for(n)`. Never rewinds.
#[derive(Debug, Clone)]
pub struct SegmentStream {
    passages: Passages,
    curve: SegmentSettings,
    rng: SmallRng,
    index: u32,
}

impl SegmentStream {
    /// Stream over the built-in passages using the global settings.
    pub fn new() -> Self {
        Self::with_rng(
            Passages::builtin().clone(),
            settings().segments.clone(),
            SmallRng::from_entropy(),
        )
    }

    /// Reproducible stream, for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(
            Passages::builtin().clone(),
            settings().segments.clone(),
            SmallRng::seed_from_u64(seed),
        )
    }

    pub fn with_rng(passages: Passages, curve: SegmentSettings, rng: SmallRng) -> Self {
        Self {
            passages,
            curve,
            rng,
            index: 0,
        }
    }

    /// Index the next call to `next_segment` will produce.
    pub fn position(&self) -> u32 {
        self.index
    }
}

impl Default for SegmentStream {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentSource for SegmentStream {
    fn next_segment(&mut self) -> Segment {
        let index = self.index;
        self.index += 1;

        let difficulty = self.curve.difficulty_for(index);
        let pool = self.passages.pool(difficulty);
        let text = pool[self.rng.gen_range(0..pool.len())].clone();
        let id = uuid::Builder::from_random_bytes(self.rng.gen())
            .into_uuid()
            .to_string();

        debug!(index, difficulty, "next segment");
        Segment {
            id,
            text,
            difficulty,
            time_limit: self.curve.time_limit_for(index),
            index,
        }
    }
}
