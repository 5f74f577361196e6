//! Word layout of a segment: words split on single spaces, each with the
//! inclusive character range it occupies in the space-joined text.
//!
//! Offsets are in `char`s and signed: an empty word has `end = start - 1`,
//! and callers routinely ask about caret position `-1` (nothing typed yet).

/// Inclusive character range of one word.
///
/// For a word of length `L`, `end == start + L - 1`; the next word starts at
/// `end + 2` (one separating space).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBoundary {
    pub start: isize,
    pub end: isize,
}

impl WordBoundary {
    pub fn contains(&self, char_index: isize) -> bool {
        self.start <= char_index && char_index <= self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Base (uncorrupted) word layout for one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentLayout {
    words: Vec<String>,
    boundaries: Vec<WordBoundary>,
}

impl SegmentLayout {
    /// Split `text` on `' '` and compute contiguous boundaries.
    ///
    /// Always yields at least one word: `""` becomes a single empty word so
    /// that word indices stay aligned with the judge.
    pub fn prepare(text: &str) -> Self {
        let words: Vec<String> = text.split(' ').map(str::to_owned).collect();
        let mut boundaries = Vec::with_capacity(words.len());

        let mut position: isize = 0;
        for word in &words {
            let start = position;
            let end = start + word.chars().count() as isize - 1;
            boundaries.push(WordBoundary { start, end });
            // +1 for the space after the word
            position = end + 2;
        }

        Self { words, boundaries }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn boundaries(&self) -> &[WordBoundary] {
        &self.boundaries
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Index of the word owning `char_index`.
    ///
    /// Negative offsets map to word 0 and offsets past the last word map to
    /// the last word. First containing boundary wins. A separating space
    /// belongs to no boundary and resolves to the word before it, which keeps
    /// the mapping non-decreasing.
    pub fn word_index_for_char(&self, char_index: isize) -> usize {
        if char_index < 0 {
            return 0;
        }
        if let Some(i) = self.boundaries.iter().position(|b| b.contains(char_index)) {
            return i;
        }
        self.boundaries
            .iter()
            .rposition(|b| b.start <= char_index)
            .unwrap_or(0)
    }

    /// Base text re-joined with single spaces.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}
