//! Guessing game session state
//!
//! A `GameSession` owns the hidden target and the guess history, and enforces
//! the guess-count policy: in limited mode the game ends after six guesses,
//! in unlimited mode only a correct guess ends it. Terminal states stay
//! terminal until an explicit reset.

use crate::core::{Feedback, Word, WordError};
use std::fmt;

/// Maximum guesses in limited mode
pub const GUESS_LIMIT: usize = 6;

/// Guess-count policy for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Six guesses, then the game is lost
    Limited,
    /// Guess until solved
    Unlimited,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Solved,
    Exhausted,
}

/// Error from [`GameSession::submit_guess`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The submitted text is not a valid game word
    Invalid(WordError),
    /// The session already reached a terminal state
    Finished(GameState),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{e}"),
            Self::Finished(GameState::Solved) => {
                write!(f, "Already solved. Start a new game to keep playing")
            }
            Self::Finished(_) => {
                write!(f, "No guesses left. Start a new game to keep playing")
            }
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Finished(_) => None,
        }
    }
}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::Invalid(e)
    }
}

/// One interactive game against a hidden target
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    guesses: Vec<(Word, Feedback)>,
    state: GameState,
    mode: GameMode,
}

impl GameSession {
    /// Start a session against `target`
    #[must_use]
    pub const fn new(target: Word, mode: GameMode) -> Self {
        Self {
            target,
            guesses: Vec::new(),
            state: GameState::InProgress,
            mode,
        }
    }

    /// The hidden target word
    ///
    /// Exposed so the presentation layer can reveal it after a loss.
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Guesses made so far, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[(Word, Feedback)] {
        &self.guesses
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Whether the session reached `Solved` or `Exhausted`
    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.state, GameState::InProgress)
    }

    /// Guesses left before exhaustion, or `None` in unlimited mode
    #[must_use]
    pub fn guesses_remaining(&self) -> Option<usize> {
        match self.mode {
            GameMode::Limited => Some(GUESS_LIMIT.saturating_sub(self.guesses.len())),
            GameMode::Unlimited => None,
        }
    }

    /// Submit a guess and score it against the target
    ///
    /// Appends the guess and its feedback to the history, then transitions to
    /// `Solved` on an exact match, or to `Exhausted` when the sixth miss
    /// lands in limited mode.
    ///
    /// # Errors
    ///
    /// - [`GuessError::Invalid`] when the text is not a 5-letter word; the
    ///   session is untouched
    /// - [`GuessError::Finished`] when the session is already terminal
    pub fn submit_guess(&mut self, raw: &str) -> Result<Feedback, GuessError> {
        let guess = Word::new(raw)?;

        if self.is_over() {
            return Err(GuessError::Finished(self.state));
        }

        let feedback = Feedback::score(&guess, &self.target);
        self.guesses.push((guess, feedback));

        if feedback.is_win() {
            self.state = GameState::Solved;
        } else if self.mode == GameMode::Limited && self.guesses.len() >= GUESS_LIMIT {
            self.state = GameState::Exhausted;
        }

        Ok(feedback)
    }

    /// Clear the history and start over against a new target
    pub fn reset(&mut self, target: Word) {
        self.target = target;
        self.guesses.clear();
        self.state = GameState::InProgress;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(target: &str, mode: GameMode) -> GameSession {
        GameSession::new(Word::new(target).unwrap(), mode)
    }

    #[test]
    fn correct_guess_solves_the_game() {
        let mut game = session("grace", GameMode::Limited);

        let feedback = game.submit_guess("grace").unwrap();
        assert!(feedback.is_win());
        assert_eq!(game.state(), GameState::Solved);
        assert_eq!(game.guesses().len(), 1);
    }

    #[test]
    fn six_misses_exhaust_a_limited_game() {
        let mut game = session("grace", GameMode::Limited);

        for i in 0..GUESS_LIMIT {
            assert_eq!(game.state(), GameState::InProgress, "ended after {i} guesses");
            game.submit_guess("stone").unwrap();
        }

        assert_eq!(game.state(), GameState::Exhausted);
        assert_eq!(game.guesses().len(), GUESS_LIMIT);
    }

    #[test]
    fn seventh_guess_is_rejected_as_finished_not_invalid() {
        let mut game = session("grace", GameMode::Limited);
        for _ in 0..GUESS_LIMIT {
            game.submit_guess("stone").unwrap();
        }

        let err = game.submit_guess("faith").unwrap_err();
        assert_eq!(err, GuessError::Finished(GameState::Exhausted));
        assert_eq!(game.guesses().len(), GUESS_LIMIT, "history must not grow");
    }

    #[test]
    fn guessing_after_a_win_is_rejected() {
        let mut game = session("grace", GameMode::Limited);
        game.submit_guess("grace").unwrap();

        let err = game.submit_guess("faith").unwrap_err();
        assert_eq!(err, GuessError::Finished(GameState::Solved));
    }

    #[test]
    fn unlimited_mode_never_exhausts() {
        let mut game = session("grace", GameMode::Unlimited);

        for _ in 0..20 {
            game.submit_guess("stone").unwrap();
        }

        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.guesses_remaining(), None);

        game.submit_guess("grace").unwrap();
        assert_eq!(game.state(), GameState::Solved);
    }

    #[test]
    fn invalid_guess_is_a_validation_error_and_leaves_no_trace() {
        let mut game = session("grace", GameMode::Limited);

        assert!(matches!(
            game.submit_guess("amen"),
            Err(GuessError::Invalid(WordError::InvalidLength(4)))
        ));
        assert!(matches!(
            game.submit_guess("gr4ce"),
            Err(GuessError::Invalid(WordError::InvalidCharacters))
        ));
        assert!(game.guesses().is_empty());
        assert_eq!(game.guesses_remaining(), Some(GUESS_LIMIT));
    }

    #[test]
    fn reset_returns_to_in_progress_with_empty_history() {
        let mut game = session("grace", GameMode::Limited);
        for _ in 0..GUESS_LIMIT {
            game.submit_guess("stone").unwrap();
        }
        assert_eq!(game.state(), GameState::Exhausted);

        game.reset(Word::new("mercy").unwrap());
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.guesses().is_empty());
        assert_eq!(game.target().text(), "MERCY");

        game.submit_guess("mercy").unwrap();
        assert_eq!(game.state(), GameState::Solved);
    }

    #[test]
    fn guesses_remaining_counts_down() {
        let mut game = session("grace", GameMode::Limited);
        assert_eq!(game.guesses_remaining(), Some(6));

        game.submit_guess("stone").unwrap();
        assert_eq!(game.guesses_remaining(), Some(5));
    }
}
