use chrono::NaiveDate;
use log::warn;
use rusqlite::Connection;

use crate::config::AppConfig;
use crate::db::repository::StoreError;
use crate::progress::ParticipantReport;

/// One participant's line on the organizer board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardRow {
    pub participant: String,
    pub wrote_today: bool,
    pub total_written: u32,
    pub completion_rate: f64,
    /// Written days per graded week, in schedule order.
    pub weekly: Vec<(String, u32)>,
    /// Set when the participant's log could not be read.
    pub error: Option<String>,
}

impl BoardRow {
    pub fn from_report(report: &ParticipantReport) -> Self {
        Self {
            participant: report.participant.clone(),
            wrote_today: report.wrote_today(),
            total_written: report.status.overall.total_written,
            completion_rate: report.status.overall.completion_rate,
            weekly: report
                .status
                .weeks
                .iter()
                .filter(|w| w.is_graded)
                .map(|w| (w.name.clone(), w.written))
                .collect(),
            error: None,
        }
    }

    pub fn failed(participant: &str, err: &StoreError) -> Self {
        Self {
            participant: participant.to_string(),
            wrote_today: false,
            total_written: 0,
            completion_rate: 0.0,
            weekly: Vec::new(),
            error: Some(err.to_string()),
        }
    }

    pub fn written_in(&self, week: &str) -> u32 {
        self.weekly
            .iter()
            .find(|(name, _)| name == week)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RankKey {
    #[default]
    Overall,
    Week(String),
}

impl RankKey {
    pub fn label(&self) -> &str {
        match self {
            RankKey::Overall => "overall",
            RankKey::Week(name) => name,
        }
    }
}

/// `"overall"` in any case, otherwise a week name.
impl From<&str> for RankKey {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("overall") {
            RankKey::Overall
        } else {
            RankKey::Week(s.to_string())
        }
    }
}

/// Build a row for every roster member. A member whose log fails to load
/// still gets a row, carrying the error.
pub fn collect_board(conn: &Connection, config: &AppConfig, today: NaiveDate) -> Vec<BoardRow> {
    config
        .roster
        .members
        .iter()
        .map(
            |member| match ParticipantReport::load(conn, &config.challenge, member, today) {
                Ok(report) => BoardRow::from_report(&report),
                Err(err) => {
                    warn!("could not load entries for {}: {}", member, err);
                    BoardRow::failed(member, &err)
                }
            },
        )
        .collect()
}

/// Highest first. Ties keep roster order.
pub fn rank<'a>(rows: &'a [BoardRow], key: &RankKey) -> Vec<&'a BoardRow> {
    let mut ranked: Vec<&BoardRow> = rows.iter().collect();
    match key {
        RankKey::Overall => {
            ranked.sort_by(|a, b| b.completion_rate.total_cmp(&a.completion_rate))
        }
        RankKey::Week(name) => ranked.sort_by_key(|r| std::cmp::Reverse(r.written_in(name))),
    }
    ranked
}

/// Participants who wrote today first, then the rest, each group in roster order.
pub fn today_sheet(rows: &[BoardRow]) -> Vec<&BoardRow> {
    let mut sheet: Vec<&BoardRow> = rows.iter().collect();
    sheet.sort_by_key(|r| !r.wrote_today);
    sheet
}
