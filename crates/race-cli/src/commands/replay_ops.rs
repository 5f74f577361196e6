use std::path::Path;

use crate::replay::{load_replay, run_replay};

pub fn replay(file: &str, json: bool) {
    let script = die!(load_replay(Path::new(file)), "Error: {}");
    let report = run_replay(&script);

    if json {
        println!("{}", die!(serde_json::to_string_pretty(&report), "Error: {}"));
        return;
    }

    println!(
        "{} keystrokes, {} hearts lost, {} segments completed, {}s elapsed",
        report.keystrokes,
        report.hearts_lost,
        report.completed.len(),
        report.elapsed_seconds
    );
    for junk in &report.junk {
        let state = if junk.newly_marked { "" } else { " (already junk)" };
        println!("  junk -> {} word {}{}", junk.target, junk.word_index, state);
    }
    for p in &report.players {
        println!(
            "{}: hearts={} segments={} wpm={} segment #{}",
            p.player.label(),
            p.stats.hearts,
            p.stats.segments_completed,
            p.words_per_minute,
            p.segment_index
        );
        println!("    target: {}", p.effective_text);
        println!("    typed:  {} ({} correct)", p.input, p.correct_chars);
    }
    match &report.outcome {
        Some(o) => println!("{} wins after {}s", o.winner.label(), o.elapsed_seconds),
        None => println!("match still running"),
    }
}
