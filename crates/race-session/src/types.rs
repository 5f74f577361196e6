use std::fmt;

use serde::{Deserialize, Serialize};

use race_core::segment::Segment;

use crate::controller::PlayerStats;

/// One of the two fixed player identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::P1, PlayerId::P2];

    pub fn opponent(self) -> PlayerId {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::P1 => "Player 1",
            Self::P2 => "Player 2",
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::P1 => "p1",
            Self::P2 => "p2",
        })
    }
}

/// Per-character state of the effective text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// Nothing typed at this offset yet.
    Pending,
    Correct,
    Incorrect,
}

/// Per-word state relative to the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Pending,
    Current,
    Done,
}

/// Full classification of typed input against the effective text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// One entry per character of the effective text, separating spaces included.
    pub chars: Vec<CharClass>,
    /// One entry per word slot of the layout.
    pub words: Vec<WordClass>,
    /// `typed.len() - 1`; `-1` when nothing is typed.
    pub caret: isize,
}

impl Classification {
    pub fn first_incorrect(&self) -> Option<usize> {
        self.chars.iter().position(|c| *c == CharClass::Incorrect)
    }

    pub fn correct_count(&self) -> usize {
        self.chars.iter().filter(|c| **c == CharClass::Correct).count()
    }

    /// Class of the character under the caret, if the caret is inside the text.
    pub fn at_caret(&self) -> Option<CharClass> {
        usize::try_from(self.caret)
            .ok()
            .and_then(|i| self.chars.get(i).copied())
    }
}

/// A classification together with the effective text it was computed against.
///
/// Rendering and the correctness check both read from this one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Judgment {
    pub effective_words: Vec<String>,
    pub effective_text: String,
    /// Word indices rendered as junk, ascending and within the live word count.
    pub junk_words: Vec<usize>,
    pub classification: Classification,
    /// Typed text equals the effective text exactly.
    pub complete: bool,
}

impl Judgment {
    /// The newest typed character matches the effective text.
    /// `true` when nothing is typed.
    pub fn caret_correct(&self) -> bool {
        let c = &self.classification;
        c.caret < 0 || c.at_caret() == Some(CharClass::Correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Backspace,
}

/// Junk placed on the opponent after a completed segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JunkInjection {
    pub target: PlayerId,
    pub word_index: usize,
    /// `false` when the word was already junk.
    pub newly_marked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletedSegment {
    pub player: PlayerId,
    pub finished_index: u32,
    pub next: Segment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub elapsed_seconds: u64,
    pub loser_stats: PlayerStats,
}

/// Response from `Match::handle_key`, returned to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyResponse {
    /// `false` once the match is decided.
    pub accepted: bool,
    /// Judgment of the input as typed, before a wrong character is dropped.
    pub judgment: Option<Judgment>,
    pub heart_lost: bool,
    pub completed: Option<CompletedSegment>,
    pub junk: Option<JunkInjection>,
    pub outcome: Option<MatchOutcome>,
}
