//! Scripted match replays.
//!
//! A script names each player's segment texts (or a seed for the built-in
//! passages) and lists keystroke steps:
//!
//! ```toml
//! seed = 7
//!
//! [texts]
//! p1 = ["go now"]
//! p2 = ["one two three"]
//!
//! [[steps]]
//! player = "p2"
//! text = "one t"
//!
//! [[steps]]
//! player = "p1"
//! text = "go now"
//!
//! [[steps]]
//! ticks = 10
//!
//! [[steps]]
//! player = "p2"
//! finish = true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use race_core::segment::{FixedSegments, SegmentSource, SegmentStream};
use race_core::settings::settings;
use race_session::{
    CompletedSegment, JunkInjection, KeyResponse, Keystroke, Match, MatchConfig, MatchOutcome,
    PlayerId, PlayerStats,
};

#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("step {0}: keystrokes need a player")]
    MissingPlayer(usize),
    #[error("step {0}: nothing to do")]
    EmptyStep(usize),
    #[error("texts.{0} is empty")]
    EmptyTexts(PlayerId),
    #[error("texts.{player}[{index}] is blank")]
    BlankText { player: PlayerId, index: usize },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayScript {
    /// Seeds the passage streams and the junk scramblers.
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub texts: ReplayTexts,
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayTexts {
    pub p1: Option<Vec<String>>,
    pub p2: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayStep {
    pub player: Option<PlayerId>,
    /// Characters to type, one keystroke each.
    pub text: Option<String>,
    #[serde(default)]
    pub backspace: u32,
    /// Type the rest of the current effective text, backspacing first if
    /// junk landed on already typed characters.
    #[serde(default)]
    pub finish: bool,
    #[serde(default)]
    pub ticks: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerReport {
    pub player: PlayerId,
    pub stats: PlayerStats,
    pub words_per_minute: u32,
    pub segment_index: u32,
    pub segment_text: String,
    pub effective_text: String,
    pub input: String,
    /// Typed characters matching the effective text.
    pub correct_chars: usize,
    pub junk_words: Vec<usize>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplayReport {
    pub keystrokes: u32,
    pub hearts_lost: u32,
    pub completed: Vec<CompletedSegment>,
    pub junk: Vec<JunkInjection>,
    pub elapsed_seconds: u64,
    pub outcome: Option<MatchOutcome>,
    pub players: Vec<PlayerReport>,
}

impl ReplayReport {
    fn record(&mut self, resp: KeyResponse) {
        if !resp.accepted {
            return;
        }
        self.keystrokes += 1;
        if resp.heart_lost {
            self.hearts_lost += 1;
        }
        self.completed.extend(resp.completed);
        self.junk.extend(resp.junk);
        if resp.outcome.is_some() {
            self.outcome = resp.outcome;
        }
    }
}

pub fn parse_replay_toml(toml_str: &str) -> Result<ReplayScript, ReplayError> {
    let script: ReplayScript =
        toml::from_str(toml_str).map_err(|e| ReplayError::Parse(e.to_string()))?;

    for (i, step) in script.steps.iter().enumerate() {
        let types = step.text.is_some() || step.backspace > 0 || step.finish;
        if types && step.player.is_none() {
            return Err(ReplayError::MissingPlayer(i));
        }
        if !types && step.ticks == 0 {
            return Err(ReplayError::EmptyStep(i));
        }
    }
    for (player, texts) in [(PlayerId::P1, &script.texts.p1), (PlayerId::P2, &script.texts.p2)] {
        let Some(texts) = texts else { continue };
        if texts.is_empty() {
            return Err(ReplayError::EmptyTexts(player));
        }
        // A blank segment has nothing to type and could never complete.
        if let Some(index) = texts.iter().position(|t| t.trim().is_empty()) {
            return Err(ReplayError::BlankText { player, index });
        }
    }

    Ok(script)
}

/// Read and validate a replay script from disk.
pub fn load_replay(path: &Path) -> Result<ReplayScript, ReplayError> {
    let content = fs::read_to_string(path)?;
    parse_replay_toml(&content)
}

fn source_for(texts: &Option<Vec<String>>, seed: u64) -> Box<dyn SegmentSource> {
    match texts {
        Some(texts) => Box::new(FixedSegments::new(
            texts.iter().cloned(),
            settings().segments.clone(),
        )),
        None => Box::new(SegmentStream::with_seed(seed)),
    }
}

/// Play `script` against a fresh match and summarize the result.
pub fn run_replay(script: &ReplayScript) -> ReplayReport {
    let config = MatchConfig {
        scramble_seed: Some(script.seed),
        ..MatchConfig::default()
    };
    let mut m = Match::new(
        config,
        source_for(&script.texts.p1, script.seed),
        source_for(&script.texts.p2, script.seed.wrapping_add(1)),
    );

    let mut report = ReplayReport::default();
    for (i, step) in script.steps.iter().enumerate() {
        debug!(step = i, "replay step");
        if let Some(player) = step.player {
            if let Some(text) = &step.text {
                for resp in m.type_text(player, text) {
                    report.record(resp);
                }
            }
            for _ in 0..step.backspace {
                report.record(m.handle_key(player, Keystroke::Backspace));
            }
            if step.finish {
                finish_segment(&mut m, player, &mut report);
            }
        }
        for _ in 0..step.ticks {
            m.tick();
        }
    }

    report.elapsed_seconds = m.clock().elapsed_seconds();
    for player in PlayerId::ALL {
        let input = m.input(player).to_string();
        let judgment = m.session_mut(player).judge(&input);
        report.players.push(PlayerReport {
            player,
            stats: m.stats(player).clone(),
            words_per_minute: m.words_per_minute(player),
            segment_index: m.segment(player).index,
            segment_text: m.segment(player).text.clone(),
            correct_chars: judgment.classification.correct_count(),
            effective_text: judgment.effective_text,
            input,
            junk_words: judgment.junk_words,
        });
    }
    report
}

fn finish_segment(m: &mut Match, player: PlayerId, report: &mut ReplayReport) {
    let expected: Vec<char> = m.session_mut(player).effective_text().chars().collect();
    let typed: Vec<char> = m.input(player).chars().collect();

    let keep = typed
        .iter()
        .zip(&expected)
        .take_while(|(t, e)| t == e)
        .count();
    for _ in keep..typed.len() {
        report.record(m.handle_key(player, Keystroke::Backspace));
    }
    for &c in &expected[keep..] {
        if m.is_over() {
            break;
        }
        report.record(m.handle_key(player, Keystroke::Char(c)));
    }
}
