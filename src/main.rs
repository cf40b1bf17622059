mod admin;
mod cli;
mod config;
mod db;
mod models;
mod progress;
mod state;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;
use db::repository::ParticipantRepo;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Init runs before the config is loaded so that a broken file can be inspected
    if let Some(Commands::Init) = cli.command {
        return handlers::handle_init();
    }

    let config = AppConfig::load().context("Loading config")?;

    let db_path = match cli.db {
        Some(path) => path,
        None => {
            AppConfig::ensure_data_dir()?;
            AppConfig::db_path()?
        }
    };
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;
    info!("opened entry store at {:?}", db_path);

    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    run_migrations(&conn)?;
    ParticipantRepo::sync_roster(&conn, &config.roster.members)
        .context("Registering roster members")?;

    match cli.command {
        Some(Commands::Init) => unreachable!(),
        Some(Commands::Members) => {
            handlers::handle_members(&conn, &config)?;
        }
        Some(Commands::Write {
            participant,
            text,
            date,
        }) => {
            handlers::handle_write(&conn, &config, &participant, &text.join(" "), date)?;
        }
        Some(Commands::Status { participant, today }) => {
            handlers::handle_status(&conn, &config, &participant, today)?;
        }
        Some(Commands::Calendar { participant, today }) => {
            handlers::handle_calendar(&conn, &config, &participant, today)?;
        }
        Some(Commands::Search { participant, query }) => {
            handlers::handle_search(&conn, &config, &participant, &query)?;
        }
        Some(Commands::Admin {
            password,
            rank,
            today,
        }) => {
            handlers::handle_admin(&conn, &config, &password, &rank, today)?;
        }
        Some(Commands::Entries { participant }) => {
            handlers::handle_entries(&conn, &config, &participant)?;
        }
        Some(Commands::Export { participant }) => {
            handlers::handle_export(&conn, &participant)?;
        }

        // No subcommand → launch TUI
        None => {
            tui::app::run(conn, config)?;
        }
    }

    Ok(())
}
