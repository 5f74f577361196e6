use std::collections::BTreeSet;

use race_core::corruption::CorruptionTracker;
use race_core::layout::SegmentLayout;
use race_core::scramble::Scrambler;
use tracing::debug;

use crate::junk_cache::JunkCache;

/// Per-player judgment state: the current segment's layout, the junk word
/// set, and the scrambled text of every junk word revealed so far.
///
/// Two instances live in a [`crate::Match`]; they share nothing.
#[derive(Debug, Clone)]
pub struct PlayerSession {
    layout: Option<SegmentLayout>,
    pub(crate) junk: CorruptionTracker,
    pub(crate) overrides: JunkCache,
    pub(crate) scrambler: Scrambler,
}

impl PlayerSession {
    pub fn new(scrambler: Scrambler) -> Self {
        Self {
            layout: None,
            junk: CorruptionTracker::new(),
            overrides: JunkCache::new(),
            scrambler,
        }
    }

    /// Replace the layout with one built from `text` and drop all cached junk
    /// text. The junk set itself is left alone; see [`Self::load_segment`].
    pub fn prepare(&mut self, text: &str) {
        self.layout = Some(SegmentLayout::prepare(text));
        self.overrides.clear();
    }

    /// Segment advance: prepare the new text and clear the junk set.
    pub fn load_segment(&mut self, text: &str) {
        self.prepare(text);
        self.junk.clear();
        debug!(words = self.word_count(), "segment loaded");
    }

    pub fn is_prepared(&self) -> bool {
        self.layout.is_some()
    }

    /// Layout of the current segment. Panics if nothing was prepared yet.
    pub fn layout(&self) -> &SegmentLayout {
        match &self.layout {
            Some(layout) => layout,
            None => panic!("PlayerSession used before prepare()"),
        }
    }

    pub fn word_count(&self) -> usize {
        self.layout().word_count()
    }

    /// Flag a word as junk. Returns `false` if it already was.
    pub fn mark_junk(&mut self, word_index: usize) -> bool {
        self.junk.mark_junk(word_index)
    }

    pub fn junk_indices(&self) -> &BTreeSet<usize> {
        self.junk.indices()
    }

    pub fn is_junk(&self, word_index: usize) -> bool {
        self.junk.contains(word_index)
    }

    pub fn clear_junk(&mut self) {
        self.junk.clear();
    }
}

impl Default for PlayerSession {
    fn default() -> Self {
        Self::new(Scrambler::default())
    }
}
