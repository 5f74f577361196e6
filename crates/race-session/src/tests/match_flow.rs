use super::make_match;
use crate::PlayerId::{P1, P2};
use crate::{JunkInjection, Keystroke};

#[test]
fn completion_junks_opponents_next_word() {
    let mut m = make_match(&["go now"], &["one two three"]);
    m.type_text(P2, "one t");
    let resp = m.type_text(P1, "go now").pop().unwrap();
    assert_eq!(
        resp.junk,
        Some(JunkInjection {
            target: P2,
            word_index: 2,
            newly_marked: true,
        })
    );
    assert!(m.session(P2).is_junk(2));
    // The opponent's typed input is untouched.
    assert_eq!(m.input(P2), "one t");
}

#[test]
fn idle_opponent_gets_second_word() {
    let mut m = make_match(&["go"], &["one two three"]);
    let resp = m.type_text(P1, "go").pop().unwrap();
    assert_eq!(resp.junk.unwrap().word_index, 1);
}

#[test]
fn opponent_on_last_word_gets_last_word() {
    let mut m = make_match(&["go"], &["one two three"]);
    m.type_text(P2, "one two th");
    let resp = m.type_text(P1, "go").pop().unwrap();
    let junk = resp.junk.unwrap();
    assert_eq!(junk.word_index, 2);
    // "th" no longer matches the scrambled word; the next key is judged
    // against junk and backspacing is the way out.
    let j = m.session_mut(P2).judge("one two th");
    assert!(!j.complete);
    assert_eq!(j.classification.first_incorrect(), Some(8));
}

#[test]
fn second_injection_on_same_word_is_not_new() {
    let mut m = make_match(&["go"], &["one two three"]);
    m.type_text(P1, "go");
    let resp = m.type_text(P1, "go").pop().unwrap();
    let junk = resp.junk.unwrap();
    assert_eq!(junk.word_index, 1);
    assert!(!junk.newly_marked);
    assert_eq!(m.session(P2).junk_indices().len(), 1);
    assert_eq!(m.stats(P1).total_junk_sent, 2);
}

#[test]
fn opponent_must_type_scrambled_word() {
    let mut m = make_match(&["go"], &["one two"]);
    m.type_text(P1, "go");

    let effective = m.session_mut(P2).effective_text();
    assert_ne!(effective, "one two");
    assert!(effective.starts_with("one "));

    // Typing the base word now fails at the first junk character.
    m.type_text(P2, "one ");
    let resp = m.handle_key(P2, Keystroke::Char('t'));
    assert!(resp.heart_lost);

    let resp = m.type_text(P2, &effective[4..]).pop().unwrap();
    assert!(resp.completed.is_some());
    assert_eq!(m.stats(P2).segments_completed, 1);
}

#[test]
fn junk_text_is_stable_across_keystrokes() {
    let mut m = make_match(&["go"], &["one two three"]);
    m.type_text(P1, "go");
    let before = m.session_mut(P2).effective_words()[1].clone();
    m.type_text(P2, "one ");
    let resp = m.handle_key(P2, Keystroke::Backspace);
    assert_eq!(resp.judgment.unwrap().effective_words[1], before);
    assert_eq!(m.session_mut(P2).effective_words()[1], before);
}

#[test]
fn advancing_clears_own_junk_only() {
    let mut m = make_match(&["go"], &["a b"]);
    m.type_text(P1, "go");
    assert!(m.session(P2).is_junk(1));
    // P2 finishes its (junked) segment: its junk is cleared on advance and P1 gets junk.
    let effective = m.session_mut(P2).effective_text();
    let resp = m.type_text(P2, &effective).pop().unwrap();
    assert!(resp.completed.is_some());
    assert!(m.session(P2).junk_indices().is_empty());
    assert_eq!(resp.junk.unwrap().target, P1);
    // "go" is a single word, so the clamp lands on word 0.
    assert!(m.session(P1).is_junk(0));
}

#[test]
fn players_are_isolated() {
    let mut m = make_match(&["same text"], &["same text"]);
    m.type_text(P1, "same");
    assert_eq!(m.input(P2), "");
    m.handle_key(P2, Keystroke::Char('x'));
    assert_eq!(m.stats(P1).hearts, super::MAX_HEARTS);
    assert_eq!(m.stats(P2).hearts, super::MAX_HEARTS - 1);
    assert_eq!(m.input(P1), "same");
}
