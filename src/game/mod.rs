//! Game logic: guessing sessions and the verse scramble

mod scramble;
mod session;

pub use scramble::{ScramblePuzzle, check, scramble};
pub use session::{GUESS_LIMIT, GameMode, GameSession, GameState, GuessError};
