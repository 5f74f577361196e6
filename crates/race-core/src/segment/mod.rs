//! Segments and the per-player streams that produce them.

mod passages;
mod stream;

use serde::Serialize;

use crate::settings::SegmentSettings;

pub use passages::{parse_passages_toml, PassageError, Passages, DEFAULT_PASSAGES_TOML};
pub use stream::SegmentStream;

/// One unit of text a player must type. Immutable once issued.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub id: String,
    pub text: String,
    pub difficulty: u32,
    /// Advisory limit in seconds; nothing in the core enforces it.
    pub time_limit: f64,
    /// Position of this segment in its player's stream.
    pub index: u32,
}

/// An infinite, forward-only supply of segments for one player.
pub trait SegmentSource {
    fn next_segment(&mut self) -> Segment;
}

impl<S: SegmentSource + ?Sized> SegmentSource for Box<S> {
    fn next_segment(&mut self) -> Segment {
        (**self).next_segment()
    }
}

/// Cycles through a fixed list of texts. Useful for replays and tests.
#[derive(Debug, Clone)]
pub struct FixedSegments {
    texts: Vec<String>,
    curve: SegmentSettings,
    index: u32,
}

impl FixedSegments {
    pub fn new<I, S>(texts: I, curve: SegmentSettings) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            curve,
            index: 0,
        }
    }
}

impl SegmentSource for FixedSegments {
    fn next_segment(&mut self) -> Segment {
        let index = self.index;
        self.index += 1;
        let text = if self.texts.is_empty() {
            String::new()
        } else {
            self.texts[index as usize % self.texts.len()].clone()
        };
        Segment {
            id: format!("fixed-{index}"),
            text,
            difficulty: self.curve.difficulty_for(index),
            time_limit: self.curve.time_limit_for(index),
            index,
        }
    }
}
