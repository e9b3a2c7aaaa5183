//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure and independently testable.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use word::{WORD_LEN, Word, WordError};
