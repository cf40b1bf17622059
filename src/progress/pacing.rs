use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where a participant stands against a linear pace toward the total goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pacing {
    Achieved { goal: u32 },
    OnPace { expected: u32, surplus: u32 },
    Behind { expected: u32, deficit: u32 },
}

impl Pacing {
    pub fn is_behind(&self) -> bool {
        matches!(self, Pacing::Behind { .. })
    }
}

impl fmt::Display for Pacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pacing::Achieved { goal } => write!(
                f,
                "Amazing work! You already reached the final goal of {} days. Anything more is bonus.",
                goal
            ),
            Pacing::OnPace { expected, surplus } => write!(
                f,
                "Right on plan! (+{} days over the {} expected by today)",
                surplus, expected
            ),
            Pacing::Behind { expected, deficit } => write!(
                f,
                "Time to pick up the pace? {} days behind the {} expected by today.",
                deficit, expected
            ),
        }
    }
}

/// Compare `total_written` with the share of `total_goal` that a steady pace
/// over `[start, end]` would have reached by `today`.
pub fn motivate(
    total_written: u32,
    total_goal: u32,
    today: NaiveDate,
    start: NaiveDate,
    end: NaiveDate,
) -> Pacing {
    if total_written >= total_goal {
        return Pacing::Achieved { goal: total_goal };
    }

    let elapsed_days = ((today - start).num_days() + 1).max(0);
    let total_days = ((end - start).num_days() + 1).max(1);
    let expected = (i64::from(total_goal).saturating_mul(elapsed_days) / total_days).max(0);
    let expected = u32::try_from(expected).unwrap_or(u32::MAX);

    if total_written >= expected {
        Pacing::OnPace {
            expected,
            surplus: total_written - expected,
        }
    } else {
        Pacing::Behind {
            expected,
            deficit: expected - total_written,
        }
    }
}
