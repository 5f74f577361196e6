use serde::Serialize;
use tracing::debug;

use race_core::scramble::Scrambler;
use race_core::segment::{Segment, SegmentSource};
use race_core::settings::Settings;
use race_core::stats::words_per_minute;

use crate::clock::MatchClock;
use crate::player::PlayerSession;
use crate::types::{MatchOutcome, PlayerId};

/// Rules a match is played under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchConfig {
    pub max_hearts: u32,
    pub chars_per_word: u32,
    pub junk_alphabet: String,
    /// Seed both players' scramblers (derived per player) for reproducible junk.
    pub scramble_seed: Option<u64>,
}

impl MatchConfig {
    pub fn from_settings(s: &Settings) -> Self {
        Self {
            max_hearts: s.rules.max_hearts,
            chars_per_word: s.rules.chars_per_word,
            junk_alphabet: s.junk.alphabet.clone(),
            scramble_seed: None,
        }
    }

    fn scrambler_for(&self, player: PlayerId) -> Scrambler {
        match self.scramble_seed {
            Some(seed) => Scrambler::with_seed(&self.junk_alphabet, seed ^ player.index() as u64),
            None => Scrambler::new(&self.junk_alphabet),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::from_settings(race_core::settings::settings())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerStats {
    pub hearts: u32,
    pub segments_completed: u32,
    pub total_junk_sent: u32,
    pub total_correct_characters: u64,
}

impl PlayerStats {
    fn fresh(max_hearts: u32) -> Self {
        Self {
            hearts: max_hearts,
            ..Self::default()
        }
    }
}

pub(crate) struct PlayerSlot {
    pub(crate) session: PlayerSession,
    pub(crate) source: Box<dyn SegmentSource>,
    pub(crate) segment: Segment,
    pub(crate) input: String,
    pub(crate) stats: PlayerStats,
}

impl PlayerSlot {
    fn new(mut source: Box<dyn SegmentSource>, scrambler: Scrambler, max_hearts: u32) -> Self {
        let segment = source.next_segment();
        let mut session = PlayerSession::new(scrambler);
        session.load_segment(&segment.text);
        Self {
            session,
            source,
            segment,
            input: String::new(),
            stats: PlayerStats::fresh(max_hearts),
        }
    }

    /// Pull the next segment and rebuild the session around it.
    pub(crate) fn advance(&mut self) -> &Segment {
        self.segment = self.source.next_segment();
        self.session.load_segment(&self.segment.text);
        self.input.clear();
        &self.segment
    }

    pub(crate) fn typed_len(&self) -> usize {
        self.input.chars().count()
    }
}

/// Two-player match: hearts, stats, clock and one [`PlayerSession`] per player.
pub struct Match {
    pub(crate) config: MatchConfig,
    pub(crate) players: [PlayerSlot; 2],
    pub(crate) clock: MatchClock,
    pub(crate) outcome: Option<MatchOutcome>,
}

impl Match {
    /// Start a match, pulling the first segment from each player's source.
    pub fn new(
        config: MatchConfig,
        p1_source: Box<dyn SegmentSource>,
        p2_source: Box<dyn SegmentSource>,
    ) -> Self {
        let players = [
            PlayerSlot::new(p1_source, config.scrambler_for(PlayerId::P1), config.max_hearts),
            PlayerSlot::new(p2_source, config.scrambler_for(PlayerId::P2), config.max_hearts),
        ];
        Self {
            config,
            players,
            clock: MatchClock::new(),
            outcome: None,
        }
    }

    pub(crate) fn slot(&self, player: PlayerId) -> &PlayerSlot {
        &self.players[player.index()]
    }

    pub(crate) fn slot_mut(&mut self, player: PlayerId) -> &mut PlayerSlot {
        &mut self.players[player.index()]
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn segment(&self, player: PlayerId) -> &Segment {
        &self.slot(player).segment
    }

    pub fn input(&self, player: PlayerId) -> &str {
        &self.slot(player).input
    }

    pub fn stats(&self, player: PlayerId) -> &PlayerStats {
        &self.slot(player).stats
    }

    pub fn session(&self, player: PlayerId) -> &PlayerSession {
        &self.slot(player).session
    }

    pub fn session_mut(&mut self, player: PlayerId) -> &mut PlayerSession {
        &mut self.slot_mut(player).session
    }

    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn words_per_minute(&self, player: PlayerId) -> u32 {
        words_per_minute(
            self.clock.elapsed_seconds(),
            self.stats(player).total_correct_characters,
            self.config.chars_per_word,
        )
    }

    /// Once-per-second tick from the host. Returns elapsed seconds.
    pub fn tick(&mut self) -> u64 {
        self.clock.tick()
    }

    /// Restart: fresh hearts and stats, clock back to zero, both players
    /// advanced to their next segment.
    pub fn reset(&mut self) {
        let max_hearts = self.config.max_hearts;
        for slot in &mut self.players {
            slot.stats = PlayerStats::fresh(max_hearts);
            slot.advance();
        }
        self.clock.reset();
        self.outcome = None;
        debug!("match reset");
    }
}
