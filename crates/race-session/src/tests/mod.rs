mod match_flow;

use race_core::scramble::{Scrambler, DEFAULT_JUNK_ALPHABET};
use race_core::segment::{FixedSegments, SegmentSource};
use race_core::settings::settings;

use super::{Match, MatchConfig, PlayerSession};

pub(super) const MAX_HEARTS: u32 = 5;

pub(super) fn test_config() -> MatchConfig {
    MatchConfig {
        max_hearts: MAX_HEARTS,
        chars_per_word: 5,
        junk_alphabet: DEFAULT_JUNK_ALPHABET.to_string(),
        scramble_seed: Some(42),
    }
}

pub(super) fn fixed(texts: &[&str]) -> Box<dyn SegmentSource> {
    Box::new(FixedSegments::new(
        texts.iter().copied(),
        settings().segments.clone(),
    ))
}

/// Match where each player cycles through its own list of texts.
pub(super) fn make_match(p1: &[&str], p2: &[&str]) -> Match {
    Match::new(test_config(), fixed(p1), fixed(p2))
}

/// Session prepared with `text` and a seeded scrambler.
pub(super) fn make_session(text: &str) -> PlayerSession {
    let mut session = PlayerSession::new(Scrambler::with_seed(DEFAULT_JUNK_ALPHABET, 7));
    session.load_segment(text);
    session
}
