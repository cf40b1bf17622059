use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::Entry;
use crate::progress::aggregate::WrittenDays;

const PREVIEW_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Complete,
    Missed,
    Today,
    Future,
}

impl CellState {
    pub fn label(&self) -> &'static str {
        match self {
            CellState::Complete => "done",
            CellState::Missed => "missed",
            CellState::Today => "today",
            CellState::Future => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub state: CellState,
    /// Trimmed non-blank texts written for this day, in log order.
    pub contents: Vec<String>,
    /// Past and present days can be opened to read their entries.
    pub clickable: bool,
}

impl DayCell {
    /// Short text for the cell: the start of the first entry, or the state label.
    pub fn preview(&self) -> String {
        match self.contents.first() {
            Some(first) if first.chars().count() > PREVIEW_CHARS => {
                let head: String = first.chars().take(PREVIEW_CHARS).collect();
                format!("{}...", head)
            }
            Some(first) => first.clone(),
            None => self.state.label().to_string(),
        }
    }
}

/// Sunday-first grid over the challenge window. Every row has seven slots;
/// slots before the first day and after the last are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calendar {
    pub rows: Vec<Vec<Option<DayCell>>>,
}

impl Calendar {
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.rows.iter().flatten().flatten()
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|c| c.date == date)
    }
}

/// Lay out `[start, end]` as calendar cells coloured by `written` relative to `today`.
pub fn build_calendar(
    start: NaiveDate,
    end: NaiveDate,
    written: &WrittenDays,
    today: NaiveDate,
    entries: &[Entry],
) -> Calendar {
    let mut by_date: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| start <= e.date && e.date <= end) {
        let text = entry.text.trim();
        if !text.is_empty() {
            by_date.entry(entry.date).or_default().push(text.to_string());
        }
    }

    let lead = start.weekday().num_days_from_sunday() as usize;
    let mut slots: Vec<Option<DayCell>> = vec![None; lead];

    let mut day = start;
    while day <= end {
        let is_written = written.contains(&day);
        let state = if day > today {
            CellState::Future
        } else if is_written {
            CellState::Complete
        } else if day == today {
            CellState::Today
        } else {
            CellState::Missed
        };
        slots.push(Some(DayCell {
            date: day,
            state,
            contents: by_date.remove(&day).unwrap_or_default(),
            clickable: day <= today,
        }));
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    if lead == slots.len() {
        return Calendar { rows: Vec::new() };
    }
    while slots.len() % 7 != 0 {
        slots.push(None);
    }

    Calendar {
        rows: slots.chunks(7).map(|row| row.to_vec()).collect(),
    }
}
