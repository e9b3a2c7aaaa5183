//! Embedded verse catalog
//!
//! Verse data compiled into the binary. Read-only, defined once.

use super::{Theme, Verse};

/// Verses for the gratitude theme
pub const GRATITUDE: &[Verse] = &[
    Verse {
        reference: "1 Thessalonians 5:18",
        text: "Give thanks in all circumstances; for this is the will of God in Christ Jesus for you.",
    },
    Verse {
        reference: "Psalm 107:1",
        text: "Oh give thanks to the LORD, for he is good, for his steadfast love endures forever!",
    },
];

/// Verses for the strength theme
pub const STRENGTH: &[Verse] = &[
    Verse {
        reference: "Philippians 4:13",
        text: "I can do all things through him who strengthens me.",
    },
    Verse {
        reference: "Isaiah 40:31",
        text: "But they who wait for the LORD shall renew their strength; they shall mount up with wings like eagles; they shall run and not be weary; they shall walk and not faint.",
    },
];

/// Verses for the peace theme
pub const PEACE: &[Verse] = &[
    Verse {
        reference: "John 14:27",
        text: "Peace I leave with you; my peace I give to you. Not as the world gives do I give to you.",
    },
    Verse {
        reference: "Philippians 4:6-7",
        text: "Do not be anxious about anything, but in everything by prayer and supplication with thanksgiving let your requests be made known to God.",
    },
];

/// Every theme, in menu order
pub const THEMES: &[Theme] = &[
    Theme {
        name: "gratitude",
        verses: GRATITUDE,
    },
    Theme {
        name: "strength",
        verses: STRENGTH,
    },
    Theme {
        name: "peace",
        verses: PEACE,
    },
];
