//! Command-line interface for lexideck.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lexideck - idiom and vocabulary flashcard API.
#[derive(Parser, Debug)]
#[command(name = "lexideck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file.
    #[arg(short, long, default_value = "lexideck.toml")]
    pub config: PathBuf,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Starts the HTTP API.
    Serve {
        /// Bind address (overrides config).
        #[arg(long)]
        host: Option<String>,

        /// Port (overrides config and PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Writes a default configuration file.
    Init {
        /// Target directory (default: current directory).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Prints one batch of words as JSON.
    Words {
        /// Number of words.
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// easy, medium, hard or all.
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Skip the dictionary and use the built-in words.
        #[arg(long)]
        offline: bool,
    },

    /// Prints idioms as JSON.
    Idioms {
        /// Number of idioms.
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,

        /// easy, medium, hard or all.
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Rewritten variations instead of a plain sample.
        #[arg(long)]
        refresh: bool,
    },

    /// Looks up a single word in the dictionary.
    Lookup {
        /// Word to look up.
        word: String,
    },

    /// Shows pool sizes and cache configuration.
    Stats,

    /// Shows version.
    Version,
}
