use anyhow::Result;
use log::info;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch("
        CREATE TABLE IF NOT EXISTS participants (
            name        TEXT PRIMARY KEY,
            sort_order  INTEGER DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS entries (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            participant  TEXT NOT NULL REFERENCES participants(name),
            date         TEXT NOT NULL,
            text         TEXT NOT NULL DEFAULT '',
            created_at   TEXT DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_entries_participant
            ON entries(participant, id);
    ")?;

    info!("entry store schema is up to date");
    Ok(())
}
