use race_core::scramble::Scrambler;
use race_core::settings::settings;
use race_session::PlayerSession;

use crate::render::render_judgment;

pub fn judge(target: &str, typed: &str, junk: &[usize], seed: Option<u64>, json: bool) {
    let alphabet = &settings().junk.alphabet;
    let scrambler = match seed {
        Some(seed) => Scrambler::with_seed(alphabet, seed),
        None => Scrambler::new(alphabet),
    };
    let mut session = PlayerSession::new(scrambler);
    session.load_segment(target);
    for &i in junk {
        session.mark_junk(i);
    }
    let judgment = session.judge(typed);

    if json {
        println!(
            "{}",
            die!(serde_json::to_string_pretty(&judgment), "Error: {}")
        );
    } else {
        print!("{}", render_judgment(&judgment, typed));
        println!(
            "junk:   next target would be word {}",
            session.junk_target(typed.chars().count())
        );
    }
}
