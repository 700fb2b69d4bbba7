//! Command line interface

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use datelog::ArchiveNaming;

/// Datelog command line arguments
#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct Args {
    /// Level of logging output (TRACE, DEBUG, INFO, WARN, ERROR).
    #[arg(short, default_value_t = log::Level::Info)]
    pub verbosity: log::Level,

    /// Main action
    #[command(subcommand)]
    pub command: Command,
}

/// Main command
#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Append message(s) to the log file for the current date
    Log {
        /// Directory holding the log files, created if missing.
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Use this date (YYYY-MM-DD) instead of today, to replay or backfill messages.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Date stamped on archived weekend files: 'boundary' for the Sunday ending the
        /// previous weekend, 'content' for the Sunday ending the weekend the archived
        /// content was last written in.
        #[arg(short, long, default_value_t = ArchiveNaming::Boundary)]
        archive_naming: ArchiveNaming,

        /// Message to log, words are joined with spaces.
        /// If missing, each line read from standard input is logged as a message.
        message: Vec<String>,
    },

    /// Print the log file messages for a date are routed to
    Target {
        /// Date (YYYY-MM-DD), defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List log files in a directory
    List {
        /// Directory holding the log files.
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Generate man pages
    #[cfg(feature = "generate-extras")]
    GenManPages {
        /// Target directory.
        dir: PathBuf,
    },

    /// Generate shell completions
    #[cfg(feature = "generate-extras")]
    GenShellCompletions {
        /// Shell to generate completion for, to standard output.
        #[arg(short, long, conflicts_with = "dir")]
        shell: Option<clap_complete::Shell>,

        /// Directory to generate completions for all shells into.
        #[arg(short, long, required_unless_present = "shell")]
        dir: Option<PathBuf>,
    },
}
