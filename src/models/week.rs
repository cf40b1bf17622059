use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_graded() -> bool {
    true
}

/// A named block of days with its own writing goal. `end` is inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDefinition {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub goal: u32,
    /// Ungraded weeks (the bonus week) are shown but left out of the overall total.
    #[serde(default = "default_graded")]
    pub graded: bool,
}

impl WeekDefinition {
    pub fn new(name: &str, start: NaiveDate, end: NaiveDate, goal: u32, graded: bool) -> Self {
        Self {
            name: name.to_string(),
            start,
            end,
            goal,
            graded,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("schedule has no weeks")]
    Empty,
    #[error("week '{0}' ends before it starts")]
    Inverted(String),
    #[error("week '{later}' does not start after week '{earlier}' ends")]
    OutOfOrder { earlier: String, later: String },
    #[error("schedule has no ungraded bonus week")]
    MissingBonusWeek,
    #[error("more than one ungraded week ('{0}' and '{1}')")]
    SeveralBonusWeeks(String, String),
    #[error("ungraded week '{0}' must have a goal of 0")]
    BonusWithGoal(String),
    #[error("graded week '{name}' has goal {goal}, expected {expected} like the other graded weeks")]
    UnevenGoals { name: String, goal: u32, expected: u32 },
}

/// A validated, chronologically ordered list of weeks.
///
/// Construction checks that every week has `start <= end`, that weeks do not
/// overlap and appear in order, that exactly one week is ungraded (with
/// goal 0), and that all graded weeks share one goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WeekDefinition>", into = "Vec<WeekDefinition>")]
pub struct Schedule {
    weeks: Vec<WeekDefinition>,
    start: NaiveDate,
    end: NaiveDate,
}

impl Schedule {
    pub fn new(weeks: Vec<WeekDefinition>) -> Result<Self, ScheduleError> {
        let (start, end) = match (weeks.first(), weeks.last()) {
            (Some(first), Some(last)) => (first.start, last.end),
            _ => return Err(ScheduleError::Empty),
        };

        let mut bonus: Option<&WeekDefinition> = None;
        let mut weekly_goal: Option<u32> = None;
        for (i, week) in weeks.iter().enumerate() {
            if week.start > week.end {
                return Err(ScheduleError::Inverted(week.name.clone()));
            }
            if i > 0 && weeks[i - 1].end >= week.start {
                return Err(ScheduleError::OutOfOrder {
                    earlier: weeks[i - 1].name.clone(),
                    later: week.name.clone(),
                });
            }
            if week.graded {
                match weekly_goal {
                    None => weekly_goal = Some(week.goal),
                    Some(expected) if expected != week.goal => {
                        return Err(ScheduleError::UnevenGoals {
                            name: week.name.clone(),
                            goal: week.goal,
                            expected,
                        });
                    }
                    Some(_) => {}
                }
            } else {
                if week.goal != 0 {
                    return Err(ScheduleError::BonusWithGoal(week.name.clone()));
                }
                if let Some(first) = bonus {
                    return Err(ScheduleError::SeveralBonusWeeks(
                        first.name.clone(),
                        week.name.clone(),
                    ));
                }
                bonus = Some(week);
            }
        }
        if bonus.is_none() {
            return Err(ScheduleError::MissingBonusWeek);
        }

        Ok(Self { weeks, start, end })
    }

    pub fn weeks(&self) -> &[WeekDefinition] {
        &self.weeks
    }

    /// First day of the challenge window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the challenge window (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Start of the first graded week, or of the window when every week is ungraded.
    pub fn graded_start(&self) -> NaiveDate {
        self.weeks
            .iter()
            .find(|w| w.graded)
            .map(|w| w.start)
            .unwrap_or(self.start)
    }

    /// The goal shared by every graded week.
    pub fn weekly_goal(&self) -> u32 {
        self.weeks
            .iter()
            .find(|w| w.graded)
            .map(|w| w.goal)
            .unwrap_or(0)
    }

    pub fn graded_weeks(&self) -> impl Iterator<Item = &WeekDefinition> {
        self.weeks.iter().filter(|w| w.graded)
    }

    pub fn find(&self, name: &str) -> Option<&WeekDefinition> {
        self.weeks.iter().find(|w| w.name == name)
    }
}

impl TryFrom<Vec<WeekDefinition>> for Schedule {
    type Error = ScheduleError;

    fn try_from(weeks: Vec<WeekDefinition>) -> Result<Self, Self::Error> {
        Schedule::new(weeks)
    }
}

impl From<Schedule> for Vec<WeekDefinition> {
    fn from(schedule: Schedule) -> Self {
        schedule.weeks
    }
}

const DEFAULT_WEEKLY_GOAL: u32 = 5;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The December 2025 challenge: a short bonus week followed by four graded weeks.
impl Default for Schedule {
    fn default() -> Self {
        let weeks = vec![
            WeekDefinition::new("Bonus week", ymd(2025, 12, 3), ymd(2025, 12, 7), 0, false),
            WeekDefinition::new("Week 1", ymd(2025, 12, 8), ymd(2025, 12, 14), DEFAULT_WEEKLY_GOAL, true),
            WeekDefinition::new("Week 2", ymd(2025, 12, 15), ymd(2025, 12, 21), DEFAULT_WEEKLY_GOAL, true),
            WeekDefinition::new("Week 3", ymd(2025, 12, 22), ymd(2025, 12, 28), DEFAULT_WEEKLY_GOAL, true),
            WeekDefinition::new("Week 4", ymd(2025, 12, 29), ymd(2026, 1, 4), DEFAULT_WEEKLY_GOAL, true),
        ];
        Self {
            start: ymd(2025, 12, 3),
            end: ymd(2026, 1, 4),
            weeks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn default_schedule_passes_validation() {
        let default = Schedule::default();
        let rebuilt = Schedule::new(default.weeks().to_vec()).unwrap();
        assert_eq!(rebuilt, default);
        assert_eq!(default.start(), d(12, 3));
        assert_eq!(default.end(), NaiveDate::from_ymd_opt(2026, 1, 4).unwrap());
        assert_eq!(default.graded_start(), d(12, 8));
        assert_eq!(default.weekly_goal(), 5);
        assert_eq!(default.graded_weeks().count(), 4);
    }

    #[test]
    fn rejects_empty_and_inverted_weeks() {
        assert_eq!(Schedule::new(vec![]), Err(ScheduleError::Empty));
        let inverted = vec![WeekDefinition::new("W1", d(12, 8), d(12, 1), 5, true)];
        assert_eq!(
            Schedule::new(inverted),
            Err(ScheduleError::Inverted("W1".into()))
        );
    }

    #[test]
    fn rejects_overlapping_weeks() {
        let weeks = vec![
            WeekDefinition::new("W1", d(12, 8), d(12, 14), 5, true),
            WeekDefinition::new("W2", d(12, 14), d(12, 21), 5, true),
        ];
        assert!(matches!(
            Schedule::new(weeks),
            Err(ScheduleError::OutOfOrder { .. })
        ));
    }

    #[test]
    fn allows_gaps_between_weeks() {
        let weeks = vec![
            WeekDefinition::new("Bonus", d(11, 28), d(11, 30), 0, false),
            WeekDefinition::new("W1", d(12, 1), d(12, 7), 5, true),
            WeekDefinition::new("W2", d(12, 15), d(12, 21), 5, true),
        ];
        let schedule = Schedule::new(weeks).unwrap();
        assert_eq!(schedule.start(), d(11, 28));
        assert_eq!(schedule.graded_start(), d(12, 1));
        assert_eq!(schedule.end(), d(12, 21));
    }

    #[test]
    fn rejects_bonus_week_mistakes() {
        let with_goal = vec![WeekDefinition::new("Bonus", d(12, 1), d(12, 7), 2, false)];
        assert_eq!(
            Schedule::new(with_goal),
            Err(ScheduleError::BonusWithGoal("Bonus".into()))
        );

        let two_bonus = vec![
            WeekDefinition::new("B1", d(12, 1), d(12, 2), 0, false),
            WeekDefinition::new("B2", d(12, 3), d(12, 4), 0, false),
        ];
        assert!(matches!(
            Schedule::new(two_bonus),
            Err(ScheduleError::SeveralBonusWeeks(..))
        ));
    }

    #[test]
    fn requires_a_bonus_week() {
        let graded_only = vec![
            WeekDefinition::new("W1", d(12, 8), d(12, 14), 5, true),
            WeekDefinition::new("W2", d(12, 15), d(12, 21), 5, true),
        ];
        assert_eq!(
            Schedule::new(graded_only),
            Err(ScheduleError::MissingBonusWeek)
        );
    }

    #[test]
    fn rejects_uneven_graded_goals() {
        let weeks = vec![
            WeekDefinition::new("W1", d(12, 1), d(12, 7), 5, true),
            WeekDefinition::new("W2", d(12, 8), d(12, 14), 4, true),
        ];
        assert!(matches!(
            Schedule::new(weeks),
            Err(ScheduleError::UnevenGoals { goal: 4, expected: 5, .. })
        ));
    }

    #[test]
    fn deserializes_through_validation() {
        #[derive(Deserialize)]
        struct Wrapper {
            weeks: Schedule,
        }

        let ok: Wrapper = toml::from_str(
            r#"
            [[weeks]]
            name = "Warm-up"
            start = "2025-12-05"
            end = "2025-12-07"
            graded = false

            [[weeks]]
            name = "W1"
            start = "2025-12-08"
            end = "2025-12-14"
            goal = 5
            "#,
        )
        .unwrap();
        assert!(!ok.weeks.weeks()[0].graded);
        assert!(ok.weeks.weeks()[1].graded);
        assert_eq!(ok.weeks.weeks()[0].goal, 0);

        let bad = toml::from_str::<Wrapper>(
            r#"
            [[weeks]]
            name = "W1"
            start = "2025-12-14"
            end = "2025-12-08"
            "#,
        );
        assert!(bad.is_err());
    }
}
