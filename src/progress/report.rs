use chrono::NaiveDate;
use rusqlite::Connection;

use crate::config::ChallengeConfig;
use crate::db::repository::{EntryRepo, StoreResult};
use crate::models::{ChallengeStatus, Entry};
use crate::progress::aggregate::{aggregate, WrittenDays};
use crate::progress::calculator::compute_status;
use crate::progress::calendar::{build_calendar, Calendar};
use crate::progress::pacing::{motivate, Pacing};
use crate::progress::search::search;

/// Everything the views show for one participant on one day.
#[derive(Debug, Clone)]
pub struct ParticipantReport {
    pub participant: String,
    pub today: NaiveDate,
    pub entries: Vec<Entry>,
    pub written: WrittenDays,
    pub status: ChallengeStatus,
    pub pacing: Pacing,
    pub calendar: Calendar,
}

impl ParticipantReport {
    pub fn build(
        participant: &str,
        entries: Vec<Entry>,
        challenge: &ChallengeConfig,
        today: NaiveDate,
    ) -> Self {
        let schedule = &challenge.weeks;
        let written = aggregate(&entries, schedule.start(), schedule.end());
        let status = compute_status(&written, schedule.weeks(), today, challenge.total_goal);
        let (pace_start, pace_end) = challenge.pacing_window();
        let pacing = motivate(
            status.overall.total_written,
            status.overall.total_goal,
            today,
            pace_start,
            pace_end,
        );
        let calendar = build_calendar(schedule.start(), schedule.end(), &written, today, &entries);

        Self {
            participant: participant.to_string(),
            today,
            entries,
            written,
            status,
            pacing,
            calendar,
        }
    }

    /// Re-read the participant's log and recompute from scratch.
    pub fn load(
        conn: &Connection,
        challenge: &ChallengeConfig,
        participant: &str,
        today: NaiveDate,
    ) -> StoreResult<Self> {
        let entries = EntryRepo::load(conn, participant)?;
        Ok(Self::build(participant, entries, challenge, today))
    }

    /// Any non-blank entry dated today, whether or not today is in the window.
    pub fn wrote_today(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.date == self.today && e.is_written())
    }

    pub fn search(&self, query: &str) -> Vec<&Entry> {
        search(&self.entries, query)
    }

    /// The full log, newest day first.
    pub fn entries_newest_first(&self) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}
