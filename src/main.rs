//! Selah - CLI
//!
//! Daily devotional check-in, gratitude journal, and scripture word games.

use anyhow::Result;
use clap::{Parser, Subcommand};
use selah::commands::{
    run_about, run_checkin, run_history, run_play, run_scramble, run_streak, run_verse,
};
use selah::journal::EntryStore;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "selah",
    about = "Daily devotional check-in, gratitude journal, and scripture word games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path of the gratitude journal file
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        default_value = "gratitude_entries.csv"
    )]
    data_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive word-guessing game (default)
    Play {
        /// Draw a random target instead of the word of the day
        #[arg(long)]
        free: bool,

        /// No guess limit
        #[arg(long)]
        unlimited: bool,

        /// Use a custom word list, one 5-letter word per line
        #[arg(short = 'w', long, value_name = "FILE")]
        wordlist: Option<PathBuf>,
    },

    /// Record a gratitude entry for today
    CheckIn {
        /// Reflection theme for the verse
        #[arg(short, long, default_value = "gratitude")]
        theme: String,

        /// Entry text; read from stdin when omitted
        #[arg(short, long)]
        entry: Option<String>,
    },

    /// Print a verse for a theme
    Verse {
        /// Theme to draw from
        #[arg(short, long, default_value = "gratitude")]
        theme: String,
    },

    /// List recorded entries, newest first
    History,

    /// Show the current streak and badge
    Streak,

    /// Reconstruct a scrambled verse
    Scramble {
        /// Theme to draw from
        #[arg(short, long, default_value = "gratitude")]
        theme: String,
    },

    /// About this app
    About,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = EntryStore::new(&cli.data_file);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        free: false,
        unlimited: false,
        wordlist: None,
    });

    match command {
        Commands::Play {
            free,
            unlimited,
            wordlist,
        } => run_play(wordlist.as_deref(), free, unlimited),
        Commands::CheckIn { theme, entry } => run_checkin(&store, &theme, entry.as_deref()),
        Commands::Verse { theme } => run_verse(&theme),
        Commands::History => run_history(&store),
        Commands::Streak => run_streak(&store),
        Commands::Scramble { theme } => run_scramble(&theme),
        Commands::About => run_about(),
    }
}
