use race_core::layout::WordBoundary;
use tracing::{debug, debug_span};

use crate::player::PlayerSession;
use crate::types::{CharClass, Classification, Judgment, WordClass};

/// Compare `typed` against `expected` position by position. Offsets with no
/// typed character are `Pending`; typed characters past the end of
/// `expected` are not reported. Never stops at the first mismatch.
pub fn classify_chars(expected: &[char], typed: &[char]) -> Vec<CharClass> {
    expected
        .iter()
        .enumerate()
        .map(|(i, e)| match typed.get(i) {
            None => CharClass::Pending,
            Some(t) if t == e => CharClass::Correct,
            Some(_) => CharClass::Incorrect,
        })
        .collect()
}

/// Place every word relative to `caret`: inside its range is `Current`,
/// entirely before it is `Done`, otherwise `Pending`.
pub fn classify_words(boundaries: &[WordBoundary], caret: isize) -> Vec<WordClass> {
    boundaries
        .iter()
        .map(|b| {
            if b.contains(caret) {
                WordClass::Current
            } else if caret > b.end {
                WordClass::Done
            } else {
                WordClass::Pending
            }
        })
        .collect()
}

impl PlayerSession {
    /// Base words with junk substituted in. Junk text is scrambled on first
    /// access per index and reused after that.
    pub fn effective_words(&mut self) -> Vec<String> {
        let mut words = self.layout().words().to_vec();
        for (i, word) in words.iter_mut().enumerate() {
            if self.junk.contains(i) {
                let junk = self
                    .overrides
                    .get_or_scramble(i, word, &mut self.scrambler)
                    .to_string();
                *word = junk;
            }
        }
        words
    }

    /// Effective words joined by single spaces: the text the player must type.
    pub fn effective_text(&mut self) -> String {
        self.effective_words().join(" ")
    }

    /// Classify every character and word of `typed` against the effective
    /// text. Never mutates the input; calling twice without intervening
    /// changes gives the same result.
    pub fn classify(&mut self, typed: &str) -> Classification {
        self.judge(typed).classification
    }

    /// Effective text and classification computed from one snapshot.
    pub fn judge(&mut self, typed: &str) -> Judgment {
        let effective_words = self.effective_words();
        let effective_text = effective_words.join(" ");

        let expected: Vec<char> = effective_text.chars().collect();
        let typed_chars: Vec<char> = typed.chars().collect();
        let caret = typed_chars.len() as isize - 1;

        let classification = Classification {
            chars: classify_chars(&expected, &typed_chars),
            words: classify_words(self.layout().boundaries(), caret),
            caret,
        };

        let word_count = effective_words.len();
        let junk_words = self
            .junk_indices()
            .iter()
            .copied()
            .filter(|&i| i < word_count)
            .collect();

        Judgment {
            complete: typed == effective_text,
            effective_words,
            effective_text,
            junk_words,
            classification,
        }
    }

    /// Index of the word owning `char_index` in the current layout.
    pub fn word_index_for_char(&self, char_index: isize) -> usize {
        self.layout().word_index_for_char(char_index)
    }

    /// Word that should turn to junk given this player's typed length: the
    /// word after the one under the caret, clamped to the last word.
    pub fn junk_target(&self, typed_len: usize) -> usize {
        let caret = typed_len as isize - 1;
        let current = self.word_index_for_char(caret);
        let last = self.word_count().saturating_sub(1);
        (current + 1).min(last)
    }

    /// Mark [`Self::junk_target`] as junk. Returns the index and whether it
    /// was newly marked.
    pub fn inject_junk(&mut self, typed_len: usize) -> (usize, bool) {
        let _span = debug_span!("inject_junk", typed_len).entered();
        let target = self.junk_target(typed_len);
        let newly_marked = self.mark_junk(target);
        debug!(target, newly_marked, "junk injected");
        (target, newly_marked)
    }
}
