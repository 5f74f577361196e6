//! Plain-text rendering of judgments for terminal output.

use unicode_width::UnicodeWidthChar;

use race_session::{CharClass, Judgment, WordClass};

/// One marker per display column under `text`: `=` correct, `^` incorrect,
/// blank for pending. Wide characters get a marker per column they occupy.
pub fn marker_line(text: &str, chars: &[CharClass]) -> String {
    let mut line = String::new();
    for (c, class) in text.chars().zip(chars) {
        let marker = match class {
            CharClass::Pending => ' ',
            CharClass::Correct => '=',
            CharClass::Incorrect => '^',
        };
        let width = c.width().unwrap_or(0).max(1);
        line.extend(std::iter::repeat(marker).take(width));
    }
    line.trim_end().to_string()
}

/// Words annotated with their state: the current word in `[..]`, finished
/// words in `(..)`, junk words suffixed with `*`.
pub fn word_line(judgment: &Judgment) -> String {
    judgment
        .effective_words
        .iter()
        .zip(&judgment.classification.words)
        .enumerate()
        .map(|(i, (word, class))| {
            let junk = if judgment.junk_words.contains(&i) { "*" } else { "" };
            match class {
                WordClass::Current => format!("[{word}]{junk}"),
                WordClass::Done => format!("({word}){junk}"),
                WordClass::Pending => format!("{word}{junk}"),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Multi-line report: effective text, markers, typed text and word states.
pub fn render_judgment(judgment: &Judgment, typed: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("target: {}\n", judgment.effective_text));
    out.push_str(&format!(
        "        {}\n",
        marker_line(&judgment.effective_text, &judgment.classification.chars)
    ));
    out.push_str(&format!("typed:  {typed}\n"));
    out.push_str(&format!("words:  {}\n", word_line(judgment)));
    let state = if judgment.complete {
        "complete".to_string()
    } else {
        match judgment.classification.first_incorrect() {
            Some(i) => format!("first error at {i}"),
            None => "ok".to_string(),
        }
    };
    out.push_str(&format!("state:  {state}\n"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use race_core::scramble::{Scrambler, DEFAULT_JUNK_ALPHABET};
    use race_session::PlayerSession;

    fn judge(text: &str, typed: &str, junk: &[usize]) -> Judgment {
        let mut s = PlayerSession::new(Scrambler::with_seed(DEFAULT_JUNK_ALPHABET, 1));
        s.load_segment(text);
        for &i in junk {
            s.mark_junk(i);
        }
        s.judge(typed)
    }

    #[test]
    fn markers_for_go_naw() {
        let j = judge("go now", "go naw", &[]);
        assert_eq!(marker_line(&j.effective_text, &j.classification.chars), "====^=");
    }

    #[test]
    fn pending_tail_is_trimmed() {
        let j = judge("go now", "go", &[]);
        assert_eq!(marker_line(&j.effective_text, &j.classification.chars), "==");
    }

    #[test]
    fn wide_chars_take_two_columns() {
        let classes = [CharClass::Correct, CharClass::Incorrect];
        assert_eq!(marker_line("天a", &classes), "==^");
    }

    #[test]
    fn word_line_marks_state_and_junk() {
        let j = judge("one two three", "one t", &[2]);
        let line = word_line(&j);
        assert!(line.starts_with("(one) [two] "));
        assert!(line.ends_with('*'));
    }

    #[test]
    fn render_reports_first_error() {
        let j = judge("go now", "go naw", &[]);
        let out = render_judgment(&j, "go naw");
        assert!(out.contains("first error at 4"));
        let j = judge("go now", "go now", &[]);
        assert!(render_judgment(&j, "go now").contains("complete"));
    }
}
