//! Judgment engine and match controller for the junk typing race.
//!
//! [`PlayerSession`] holds one player's segment layout, junk set and scrambled
//! overrides, and judges typed input against the effective text. [`Match`]
//! owns two sessions plus hearts, stats and the clock, and processes each
//! keystroke, returning a [`KeyResponse`] that the presentation layer paints.

mod clock;
mod controller;
mod judge;
mod junk_cache;
mod key_handlers;
mod player;
mod response;
mod types;

#[cfg(test)]
mod tests;

pub use clock::MatchClock;
pub use controller::{Match, MatchConfig, PlayerStats};
pub use judge::{classify_chars, classify_words};
pub use junk_cache::JunkCache;
pub use player::PlayerSession;
pub use types::{
    CharClass, Classification, CompletedSegment, Judgment, JunkInjection, KeyResponse, Keystroke,
    MatchOutcome, PlayerId, WordClass,
};
