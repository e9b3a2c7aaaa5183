//! Guess feedback scoring
//!
//! A `Feedback` holds one `LetterScore` per position of a guess:
//! - `Exact`: the letter sits in the same position in the target
//! - `Present`: the letter occurs somewhere else in the target
//! - `Absent`: the letter does not occur in the target at all
//!
//! Presence is a plain membership test, checked per position independently.
//! It is not the count-limited matching of canonical Wordle: a guess that
//! repeats a letter earns `Present` at every repeat as long as the target
//! contains that letter anywhere, even when the target holds it only once.
//! See `repeated_guess_letter_scores_present_each_time` below.

use super::{WORD_LEN, Word};

/// Classification of a single guess letter against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    Exact,
    Present,
    Absent,
}

/// Per-letter feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterScore; WORD_LEN]);

impl Feedback {
    /// Score `guess` against `target`, one classification per position
    ///
    /// Both words are already validated to the fixed length, so the result
    /// always has exactly [`WORD_LEN`] entries.
    ///
    /// # Examples
    /// ```
    /// use selah::core::{Feedback, LetterScore, Word};
    ///
    /// let guess = Word::new("grace").unwrap();
    /// let target = Word::new("glory").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// // G(exact) R(present) A(absent) C(absent) E(absent)
    /// assert_eq!(feedback.scores()[0], LetterScore::Exact);
    /// assert_eq!(feedback.scores()[1], LetterScore::Present);
    /// assert_eq!(feedback.scores()[2], LetterScore::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut scores = [LetterScore::Absent; WORD_LEN];

        for (i, score) in scores.iter_mut().enumerate() {
            let letter = guess.letter_at(i);
            if letter == target.letter_at(i) {
                *score = LetterScore::Exact;
            } else if target.contains(letter) {
                *score = LetterScore::Present;
            }
        }

        Self(scores)
    }

    /// Get the per-position scores
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> &[LetterScore; WORD_LEN] {
        &self.0
    }

    /// Check if every position scored `Exact` (the guess is the target)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterScore::Exact)
    }

    /// Count the positions that scored `Exact`
    #[must_use]
    pub fn exact_count(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterScore::Exact).count()
    }

    /// Count the positions that scored `Present`
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.0
            .iter()
            .filter(|&&s| s == LetterScore::Present)
            .count()
    }

    /// Render the feedback as emoji squares
    ///
    /// # Examples
    /// ```
    /// use selah::core::{Feedback, Word};
    ///
    /// let guess = Word::new("grace").unwrap();
    /// let feedback = Feedback::score(&guess, &guess);
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|s| match s {
                LetterScore::Exact => '🟩',
                LetterScore::Present => '🟨',
                LetterScore::Absent => '⬜',
            })
            .collect()
    }
}
