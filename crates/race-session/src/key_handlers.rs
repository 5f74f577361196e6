use tracing::{debug, debug_span};

use crate::controller::Match;
use crate::types::{
    CompletedSegment, Judgment, JunkInjection, KeyResponse, Keystroke, MatchOutcome, PlayerId,
};

impl Match {
    /// Process one keystroke for `player`. Keystrokes for the same player must
    /// arrive in order; everything a keystroke triggers (heart loss, junk on
    /// the opponent, segment advance) is finished before this returns.
    pub fn handle_key(&mut self, player: PlayerId, key: Keystroke) -> KeyResponse {
        let _span = debug_span!("handle_key", %player, ?key).entered();

        if self.is_over() {
            return KeyResponse::ignored();
        }

        match key {
            Keystroke::Char(c) => self.handle_char(player, c),
            Keystroke::Backspace => self.handle_backspace(player),
        }
    }

    /// Type every character of `text` in order, stopping early if the match ends.
    pub fn type_text(&mut self, player: PlayerId, text: &str) -> Vec<KeyResponse> {
        let mut responses = Vec::new();
        for c in text.chars() {
            if self.is_over() {
                break;
            }
            responses.push(self.handle_key(player, Keystroke::Char(c)));
        }
        responses
    }

    fn handle_char(&mut self, player: PlayerId, c: char) -> KeyResponse {
        self.slot_mut(player).input.push(c);
        self.clock.start();

        let slot = self.slot_mut(player);
        let judgment = slot.session.judge(&slot.input);

        if !judgment.caret_correct() {
            slot.input.pop();
            return self.lose_heart(player, judgment);
        }

        let complete = judgment.complete;
        let mut resp = KeyResponse::judged(judgment);
        if complete {
            self.complete_segment(player, &mut resp);
        }
        resp
    }

    /// Drop the newest character. Never costs a heart.
    fn handle_backspace(&mut self, player: PlayerId) -> KeyResponse {
        let slot = self.slot_mut(player);
        slot.input.pop();
        let judgment = slot.session.judge(&slot.input);
        KeyResponse::judged(judgment)
    }

    fn lose_heart(&mut self, player: PlayerId, judgment: Judgment) -> KeyResponse {
        let stats = &mut self.slot_mut(player).stats;
        stats.hearts = stats.hearts.saturating_sub(1);
        let hearts = stats.hearts;
        debug!(%player, hearts, "wrong character");

        let mut resp = KeyResponse::judged(judgment);
        resp.heart_lost = true;
        if hearts == 0 {
            resp.outcome = Some(self.defeat(player));
        }
        resp
    }

    fn defeat(&mut self, loser: PlayerId) -> MatchOutcome {
        self.clock.stop();
        let outcome = MatchOutcome {
            winner: loser.opponent(),
            loser,
            elapsed_seconds: self.clock.elapsed_seconds(),
            loser_stats: self.stats(loser).clone(),
        };
        debug!(winner = %outcome.winner, elapsed = outcome.elapsed_seconds, "match over");
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Credit the finished segment, junk the opponent, then advance `player`.
    fn complete_segment(&mut self, player: PlayerId, resp: &mut KeyResponse) {
        let finished_len = self.slot(player).typed_len() as u64;
        let finished_index = self.slot(player).segment.index;

        let stats = &mut self.slot_mut(player).stats;
        stats.segments_completed += 1;
        stats.total_junk_sent += 1;
        stats.total_correct_characters += finished_len;

        let opponent = player.opponent();
        let opp = self.slot_mut(opponent);
        let typed_len = opp.typed_len();
        let (word_index, newly_marked) = opp.session.inject_junk(typed_len);
        resp.junk = Some(JunkInjection {
            target: opponent,
            word_index,
            newly_marked,
        });

        let next = self.slot_mut(player).advance().clone();
        debug!(%player, finished_index, next_index = next.index, "segment completed");
        resp.completed = Some(CompletedSegment {
            player,
            finished_index,
            next,
        });
    }
}
