//! Junk-word scrambling.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Characters a junk word is drawn from.
pub const DEFAULT_JUNK_ALPHABET: &str = "0123456789-/:;()$&@\".,?!'";

/// Replace every character of `word` with one drawn uniformly from
/// `alphabet`. The result has the same `char` count as `word`.
///
/// Panics if `alphabet` is empty and `word` is not.
pub fn scramble_word<R: Rng>(word: &str, alphabet: &[char], rng: &mut R) -> String {
    word.chars()
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// Stateful scrambler owning its alphabet and RNG.
///
/// Output is not reproducible across runs unless built with [`Scrambler::with_seed`].
/// Constructors panic on an empty alphabet.
#[derive(Debug, Clone)]
pub struct Scrambler {
    alphabet: Vec<char>,
    rng: SmallRng,
}

impl Scrambler {
    pub fn new(alphabet: &str) -> Self {
        Self::with_rng(alphabet, SmallRng::from_entropy())
    }

    pub fn with_seed(alphabet: &str, seed: u64) -> Self {
        Self::with_rng(alphabet, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(alphabet: &str, rng: SmallRng) -> Self {
        let alphabet: Vec<char> = alphabet.chars().collect();
        assert!(!alphabet.is_empty(), "Scrambler needs a non-empty alphabet");
        Self { alphabet, rng }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn scramble(&mut self, word: &str) -> String {
        scramble_word(word, &self.alphabet, &mut self.rng)
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new(DEFAULT_JUNK_ALPHABET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_matches_source() {
        let mut s = Scrambler::with_seed(DEFAULT_JUNK_ALPHABET, 7);
        for len in 0..=24 {
            let word = "x".repeat(len);
            assert_eq!(s.scramble(&word).chars().count(), len);
        }
    }

    #[test]
    fn empty_word_scrambles_to_empty() {
        let mut s = Scrambler::default();
        assert_eq!(s.scramble(""), "");
    }

    #[test]
    fn output_stays_in_alphabet() {
        let mut s = Scrambler::with_seed(DEFAULT_JUNK_ALPHABET, 42);
        let junk = s.scramble("brighter");
        assert!(junk.chars().all(|c| DEFAULT_JUNK_ALPHABET.contains(c)));
    }

    #[test]
    fn multibyte_source_counts_chars() {
        let mut s = Scrambler::with_seed("#", 1);
        assert_eq!(s.scramble("café"), "####");
    }

    #[test]
    fn seeded_scramblers_agree() {
        let mut a = Scrambler::with_seed(DEFAULT_JUNK_ALPHABET, 99);
        let mut b = Scrambler::with_seed(DEFAULT_JUNK_ALPHABET, 99);
        assert_eq!(a.scramble("horizon"), b.scramble("horizon"));
    }

    #[test]
    #[should_panic(expected = "non-empty alphabet")]
    fn empty_alphabet_panics() {
        Scrambler::with_seed("", 3);
    }
}
