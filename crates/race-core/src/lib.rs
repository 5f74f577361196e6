//! Text-side building blocks for the two-player junk typing race.
//!
//! Segments come from a per-player [`segment::SegmentSource`]; each segment is
//! split into a [`layout::SegmentLayout`] of words and inclusive character
//! ranges. Junk injected by the opponent is tracked per word index by
//! [`corruption::CorruptionTracker`] and rendered through
//! [`scramble::Scrambler`]. The judgment engine that combines them lives in
//! `race-session`.

pub mod corruption;
pub mod layout;
pub mod scramble;
pub mod segment;
pub mod settings;
pub mod stats;
