/// Words per minute from correct characters, where one word is
/// `chars_per_word` characters. Zero until the clock has advanced.
pub fn words_per_minute(elapsed_seconds: u64, correct_chars: u64, chars_per_word: u32) -> u32 {
    if elapsed_seconds == 0 || chars_per_word == 0 {
        return 0;
    }
    let words = correct_chars as f64 / f64::from(chars_per_word);
    (words * 60.0 / elapsed_seconds as f64).round() as u32
}
