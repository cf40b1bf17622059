use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Progress for one week of the schedule as of a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekStatus {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub written: u32,
    pub goal: u32,
    /// Percentage of `goal`, clamped to `[0, 100]`.
    pub rate: f64,
    pub is_current: bool,
    pub is_finished: bool,
    pub is_graded: bool,
}

impl WeekStatus {
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.start > today
    }

    pub fn goal_met(&self) -> bool {
        self.goal > 0 && self.written >= self.goal
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallProgress {
    /// Written days summed over graded weeks only.
    pub total_written: u32,
    pub total_goal: u32,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallengeStatus {
    pub weeks: Vec<WeekStatus>,
    pub overall: OverallProgress,
}

impl ChallengeStatus {
    pub fn current_week(&self) -> Option<&WeekStatus> {
        self.weeks.iter().find(|w| w.is_current)
    }
}
