//! Verse catalog
//!
//! A static mapping from reflection theme to scripture verses, embedded in the
//! binary. Themes and verses never change at runtime.

mod verses;

pub use verses::THEMES;

use rand::prelude::IndexedRandom;

/// A scripture quote: human-readable citation plus the verse body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verse {
    pub reference: &'static str,
    pub text: &'static str,
}

/// A named reflection theme grouping verses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub verses: &'static [Verse],
}

/// Names of every theme, in menu order
#[must_use]
pub fn theme_names() -> Vec<&'static str> {
    THEMES.iter().map(|t| t.name).collect()
}

/// Look up a theme by name, case-insensitively
#[must_use]
pub fn find_theme(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Pick a random verse from a theme
///
/// # Panics
/// Will not panic - the embedded catalog has no empty themes.
#[must_use]
pub fn random_verse(theme: &Theme) -> &'static Verse {
    theme
        .verses
        .choose(&mut rand::rng())
        .expect("every theme carries at least one verse")
}
