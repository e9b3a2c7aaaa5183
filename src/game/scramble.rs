//! Verse scramble game
//!
//! Shuffles the words of a verse and checks a player's reconstruction against
//! the original text. Matching is case-insensitive after trimming, but
//! punctuation and word order must reproduce the original exactly.

use rand::seq::SliceRandom;

/// Tokenize `text` on whitespace and return the tokens in random order
///
/// Every token is preserved; only the ordering changes.
#[must_use]
pub fn scramble(text: &str) -> Vec<String> {
    let mut tokens: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    tokens.shuffle(&mut rand::rng());
    tokens
}

/// Check a reconstruction against the original text
///
/// # Examples
/// ```
/// use selah::game::check;
///
/// assert!(check("Give thanks.", "give thanks."));
/// assert!(!check("thanks. Give", "Give thanks."));
/// ```
#[must_use]
pub fn check(answer: &str, original: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(original.trim())
}

/// A scramble round: the original text plus one shuffled ordering
#[derive(Debug, Clone)]
pub struct ScramblePuzzle {
    original: String,
    tokens: Vec<String>,
}

impl ScramblePuzzle {
    /// Scramble `text` into a new puzzle
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            original: text.to_string(),
            tokens: scramble(text),
        }
    }

    /// The shuffled tokens to show the player
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The original verse text
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Check the player's answer against the original
    #[must_use]
    pub fn check(&self, answer: &str) -> bool {
        check(answer, &self.original)
    }

    /// Shuffle the tokens again without changing the original
    pub fn reshuffle(&mut self) {
        self.tokens = scramble(&self.original);
    }
}
