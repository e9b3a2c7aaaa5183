//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{print_game_recap, print_history, print_streak, print_verse};
pub use formatters::guess_cells;
