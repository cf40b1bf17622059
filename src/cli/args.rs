use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::dates::parse_cli_date;

#[derive(Parser, Debug)]
#[command(name = "dailywrite", version, author, about = "A terminal companion for a daily writing challenge")]
pub struct Cli {
    /// Use this database file instead of the one in the data directory
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default config.toml if none exists and print its path
    Init,
    /// List challenge participants
    Members,
    /// Save a journal entry
    Write {
        /// Participant name
        participant: String,
        /// Entry text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Day the entry is for (defaults to today; future days are refused)
        #[arg(long, value_parser = parse_cli_date)]
        date: Option<NaiveDate>,
    },
    /// Show weekly progress, overall completion and pace
    Status {
        participant: String,
        /// Compute as if it were this day
        #[arg(long, value_parser = parse_cli_date)]
        today: Option<NaiveDate>,
    },
    /// Show the challenge calendar
    Calendar {
        participant: String,
        #[arg(long, value_parser = parse_cli_date)]
        today: Option<NaiveDate>,
    },
    /// Search a participant's entries for a keyword
    Search {
        participant: String,
        /// Case-insensitive keyword
        query: String,
    },
    /// Organizer dashboard for every participant
    Admin {
        /// Today's organizer password
        #[arg(long)]
        password: String,
        /// Rank by "overall" or by a graded week's name
        #[arg(long, default_value = "overall")]
        rank: String,
        #[arg(long, value_parser = parse_cli_date)]
        today: Option<NaiveDate>,
    },
    /// Print a participant's full log, newest first
    Entries { participant: String },
    /// Export a participant's log as JSON to stdout
    Export { participant: String },
}
