use chrono::NaiveDate;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

use crate::models::Entry;
use crate::utils::dates::{format_iso, parse_stored_date};

/// Failures reaching a participant's log. Callers surface these and never retry.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("participant '{0}' not found")]
    NotFound(String),
    #[error("entry store unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

// ─── Participants ────────────────────────────────────────────────────────────

pub struct ParticipantRepo;

impl ParticipantRepo {
    /// Make every roster member known to the store, in roster order.
    pub fn sync_roster(conn: &Connection, members: &[String]) -> StoreResult<()> {
        for (order, name) in members.iter().enumerate() {
            conn.execute(
                "INSERT INTO participants (name, sort_order) VALUES (?1, ?2)
                 ON CONFLICT(name) DO UPDATE SET sort_order = ?2",
                params![name, order as i64],
            )?;
        }
        Ok(())
    }

    pub fn exists(conn: &Connection, name: &str) -> StoreResult<bool> {
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM participants WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn list(conn: &Connection) -> StoreResult<Vec<String>> {
        let mut stmt = conn.prepare("SELECT name FROM participants ORDER BY sort_order, name")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(names)
    }

    fn require(conn: &Connection, name: &str) -> StoreResult<()> {
        if Self::exists(conn, name)? {
            Ok(())
        } else {
            Err(StoreError::NotFound(name.to_string()))
        }
    }
}

// ─── Entries ─────────────────────────────────────────────────────────────────

pub struct EntryRepo;

impl EntryRepo {
    /// A participant's full log in the order it was written.
    ///
    /// Rows whose date can't be read are skipped.
    pub fn load(conn: &Connection, participant: &str) -> StoreResult<Vec<Entry>> {
        ParticipantRepo::require(conn, participant)?;

        let mut stmt = conn.prepare(
            "SELECT id, date, text FROM entries WHERE participant = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![participant], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        })?;

        let mut result = Vec::new();
        for r in rows {
            let (id, raw_date, text) = r?;
            match parse_stored_date(&raw_date) {
                Some(date) => result.push(Entry::new(date, text.unwrap_or_default())),
                None => debug!("skipping entry {} with unreadable date {:?}", id, raw_date),
            }
        }
        Ok(result)
    }

    /// The log ordered by date. Entries sharing a date keep the order they were written in.
    pub fn load_by_date(conn: &Connection, participant: &str) -> StoreResult<Vec<Entry>> {
        let mut entries = Self::load(conn, participant)?;
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    /// Append one row. The text is stored exactly as given.
    pub fn append(
        conn: &Connection,
        participant: &str,
        date: NaiveDate,
        text: &str,
    ) -> StoreResult<()> {
        ParticipantRepo::require(conn, participant)?;
        conn.execute(
            "INSERT INTO entries (participant, date, text) VALUES (?1, ?2, ?3)",
            params![participant, format_iso(date), text],
        )?;
        debug!("appended entry for {} on {}", participant, date);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn store(members: &[&str]) -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        let members: Vec<String> = members.iter().map(|m| m.to_string()).collect();
        ParticipantRepo::sync_roster(&conn, &members).unwrap();
        conn
    }

    fn dec(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, day).unwrap()
    }

    #[test]
    fn roster_sync_keeps_order_and_is_repeatable() {
        let conn = store(&["carol", "alice", "bob"]);
        ParticipantRepo::sync_roster(&conn, &["carol".into(), "alice".into(), "bob".into()])
            .unwrap();
        assert_eq!(
            ParticipantRepo::list(&conn).unwrap(),
            vec!["carol".to_string(), "alice".to_string(), "bob".to_string()]
        );
        assert!(ParticipantRepo::exists(&conn, "alice").unwrap());
        assert!(!ParticipantRepo::exists(&conn, "mallory").unwrap());
    }

    #[test]
    fn appended_text_comes_back_verbatim_in_order() {
        let conn = store(&["alice"]);
        EntryRepo::append(&conn, "alice", dec(9), "  leading and trailing  \n").unwrap();
        EntryRepo::append(&conn, "alice", dec(8), "older day, newer row").unwrap();
        EntryRepo::append(&conn, "alice", dec(9), "").unwrap();

        let entries = EntryRepo::load(&conn, "alice").unwrap();
        assert_eq!(
            entries,
            vec![
                Entry::new(dec(9), "  leading and trailing  \n"),
                Entry::new(dec(8), "older day, newer row"),
                Entry::new(dec(9), ""),
            ]
        );
    }

    #[test]
    fn by_date_order_keeps_same_day_rows_in_write_order() {
        let conn = store(&["alice"]);
        EntryRepo::append(&conn, "alice", dec(10), "a").unwrap();
        EntryRepo::append(&conn, "alice", dec(9), "b").unwrap();
        EntryRepo::append(&conn, "alice", dec(10), "c").unwrap();
        EntryRepo::append(&conn, "alice", dec(9), "d").unwrap();

        let texts: Vec<String> = EntryRepo::load_by_date(&conn, "alice")
            .unwrap()
            .into_iter()
            .map(|e| e.text)
            .collect();
        assert_eq!(texts, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn dates_are_stored_as_iso() {
        let conn = store(&["alice"]);
        EntryRepo::append(&conn, "alice", dec(9), "x").unwrap();
        let raw: String = conn
            .query_row("SELECT date FROM entries", [], |row| row.get(0))
            .unwrap();
        assert_eq!(raw, "2025-12-09");
    }

    #[test]
    fn logs_are_kept_per_participant() {
        let conn = store(&["alice", "bob"]);
        EntryRepo::append(&conn, "alice", dec(9), "mine").unwrap();
        assert!(EntryRepo::load(&conn, "bob").unwrap().is_empty());
        assert_eq!(EntryRepo::load(&conn, "alice").unwrap().len(), 1);
    }

    #[test]
    fn unknown_participant_is_not_found() {
        let conn = store(&["alice"]);
        assert!(matches!(
            EntryRepo::load(&conn, "mallory"),
            Err(StoreError::NotFound(name)) if name == "mallory"
        ));
        assert!(matches!(
            EntryRepo::append(&conn, "mallory", dec(9), "hi"),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn unreadable_dates_are_skipped() {
        let conn = store(&["alice"]);
        conn.execute_batch(
            "INSERT INTO entries (participant, date, text) VALUES
                ('alice', 'not a date', 'lost'),
                ('alice', '2025/12/10', 'slashes'),
                ('alice', '2025-12-11 08:00:00', 'with time');",
        )
        .unwrap();
        let entries = EntryRepo::load(&conn, "alice").unwrap();
        assert_eq!(
            entries,
            vec![
                Entry::new(dec(10), "slashes"),
                Entry::new(dec(11), "with time"),
            ]
        );
    }

    #[test]
    fn broken_store_is_unavailable() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(matches!(
            EntryRepo::load(&conn, "alice"),
            Err(StoreError::Unavailable(_))
        ));
    }
}
