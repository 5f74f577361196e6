use std::collections::BTreeMap;

use race_core::scramble::Scrambler;

/// Scrambled text per junk word index, generated on first access.
///
/// Once an entry exists it is returned unchanged until [`JunkCache::clear`],
/// so a revealed junk word never re-randomizes between keystrokes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JunkCache {
    entries: BTreeMap<usize, String>,
}

impl JunkCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached junk for `word_index`, scrambling `base` on first access.
    pub fn get_or_scramble(
        &mut self,
        word_index: usize,
        base: &str,
        scrambler: &mut Scrambler,
    ) -> &str {
        self.entries
            .entry(word_index)
            .or_insert_with(|| scrambler.scramble(base))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
