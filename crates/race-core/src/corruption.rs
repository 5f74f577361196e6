use std::collections::BTreeSet;

/// Word indices flagged as junk for one player's current segment.
///
/// No bounds checking: indices are validated against the live word count by
/// whoever requests the corruption. Cleared only when the segment advances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorruptionTracker {
    indices: BTreeSet<usize>,
}

impl CorruptionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag `word_index`. Returns `false` if it was already flagged.
    pub fn mark_junk(&mut self, word_index: usize) -> bool {
        self.indices.insert(word_index)
    }

    pub fn indices(&self) -> &BTreeSet<usize> {
        &self.indices
    }

    pub fn contains(&self, word_index: usize) -> bool {
        self.indices.contains(&word_index)
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}
