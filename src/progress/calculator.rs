use chrono::NaiveDate;
use log::debug;

use crate::models::{ChallengeStatus, OverallProgress, WeekDefinition, WeekStatus};
use crate::progress::aggregate::WrittenDays;

/// `count / goal` as a percentage clamped to `[0, 100]`; 0 when there is no goal.
pub fn capped_rate(count: u32, goal: u32) -> f64 {
    if goal == 0 {
        return 0.0;
    }
    (count as f64 / goal as f64 * 100.0).min(100.0)
}

/// Per-week and overall progress as of `today`.
///
/// Weeks that have not started report nothing. Running weeks only count days
/// up to `today`. Only graded weeks feed the overall total, which is measured
/// against `total_goal` rather than the sum of weekly goals.
pub fn compute_status(
    written: &WrittenDays,
    weeks: &[WeekDefinition],
    today: NaiveDate,
    total_goal: u32,
) -> ChallengeStatus {
    let mut statuses = Vec::with_capacity(weeks.len());
    let mut total_written = 0u32;

    for week in weeks {
        let (count, is_current, is_finished) = if week.start > today {
            (0, false, false)
        } else {
            let effective_end = week.end.min(today);
            let count = written
                .iter()
                .filter(|d| week.start <= **d && **d <= effective_end)
                .count() as u32;
            let is_finished = week.end < today;
            let is_current = week.contains(today) && !is_finished;
            (count, is_current, is_finished)
        };

        if week.graded {
            total_written += count;
        }

        statuses.push(WeekStatus {
            name: week.name.clone(),
            start: week.start,
            end: week.end,
            written: count,
            goal: week.goal,
            rate: capped_rate(count, week.goal),
            is_current,
            is_finished,
            is_graded: week.graded,
        });
    }

    let overall = OverallProgress {
        total_written,
        total_goal,
        completion_rate: capped_rate(total_written, total_goal),
    };
    debug!(
        "computed status for {}: {}/{} graded days",
        today, overall.total_written, overall.total_goal
    );

    ChallengeStatus {
        weeks: statuses,
        overall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Schedule;

    fn d(m: u32, day: u32) -> NaiveDate {
        let year = if m == 1 { 2026 } else { 2025 };
        NaiveDate::from_ymd_opt(year, m, day).unwrap()
    }

    fn three_weeks() -> Vec<WeekDefinition> {
        vec![
            WeekDefinition::new("bonus", d(12, 3), d(12, 7), 0, false),
            WeekDefinition::new("W1", d(12, 8), d(12, 14), 5, true),
            WeekDefinition::new("W2", d(12, 15), d(12, 21), 5, true),
        ]
    }

    fn written(days: &[NaiveDate]) -> WrittenDays {
        days.iter().copied().collect()
    }

    #[test]
    fn mid_challenge_scenario() {
        let days = written(&[d(12, 9), d(12, 10), d(12, 11), d(12, 16)]);
        let status = compute_status(&days, &three_weeks(), d(12, 17), 20);

        let w1 = &status.weeks[1];
        assert_eq!(w1.written, 3);
        assert!(w1.is_finished);
        assert!(!w1.is_current);
        assert_eq!(w1.rate, 60.0);

        let w2 = &status.weeks[2];
        assert_eq!(w2.written, 1);
        assert!(w2.is_current);
        assert!(!w2.is_finished);
        assert_eq!(w2.rate, 20.0);

        assert_eq!(status.overall.total_written, 4);
        assert_eq!(status.overall.total_goal, 20);
        assert_eq!(status.overall.completion_rate, 20.0);
        assert_eq!(status.current_week().map(|w| w.name.as_str()), Some("W2"));
    }

    #[test]
    fn before_the_challenge_everything_is_zero() {
        let days = written(&[d(12, 9), d(12, 16)]);
        let status = compute_status(&days, &three_weeks(), d(11, 30), 20);
        for week in &status.weeks {
            assert_eq!(week.written, 0);
            assert!(!week.is_current);
            assert!(!week.is_finished);
            assert_eq!(week.rate, 0.0);
        }
        assert_eq!(status.overall.completion_rate, 0.0);
    }

    #[test]
    fn after_the_challenge_every_week_is_finished() {
        let days = written(&[d(12, 4), d(12, 9), d(12, 21)]);
        let status = compute_status(&days, &three_weeks(), d(1, 10), 20);
        assert!(status.weeks.iter().all(|w| w.is_finished && !w.is_current));
        assert_eq!(status.weeks[0].written, 1);
        assert_eq!(status.weeks[1].written, 1);
        assert_eq!(status.weeks[2].written, 1);
        assert!(status.current_week().is_none());
    }

    #[test]
    fn default_schedule_has_no_current_week_outside_the_window() {
        let schedule = Schedule::default();
        let days = written(&[d(12, 4), d(12, 9), d(12, 30)]);

        let before = compute_status(&days, schedule.weeks(), d(12, 2), 20);
        assert_eq!(before.weeks.len(), 5);
        assert!(before.current_week().is_none());
        assert!(before.weeks.iter().all(|w| !w.is_finished && w.written == 0));
        assert_eq!(before.overall.total_written, 0);

        let after = compute_status(&days, schedule.weeks(), d(1, 5), 20);
        assert!(after.current_week().is_none());
        assert!(after.weeks.iter().all(|w| w.is_finished));
        assert_eq!(after.overall.total_written, 2);
        assert_eq!(after.overall.completion_rate, 10.0);

        let last_day = compute_status(&days, schedule.weeks(), d(1, 4), 20);
        assert_eq!(
            last_day.current_week().map(|w| w.name.as_str()),
            Some("Week 4")
        );
    }

    #[test]
    fn bonus_week_is_shown_but_not_totalled() {
        let days = written(&[d(12, 3), d(12, 4), d(12, 5), d(12, 9)]);
        let status = compute_status(&days, &three_weeks(), d(12, 10), 20);
        assert_eq!(status.weeks[0].written, 3);
        assert_eq!(status.weeks[0].rate, 0.0);
        assert!(!status.weeks[0].is_graded);
        assert_eq!(status.overall.total_written, 1);
    }

    #[test]
    fn days_after_today_are_not_counted_in_the_running_week() {
        // A back-dated log can't contain future days, but the count must
        // still stop at today.
        let days = written(&[d(12, 15), d(12, 16), d(12, 20)]);
        let status = compute_status(&days, &three_weeks(), d(12, 16), 20);
        assert_eq!(status.weeks[2].written, 2);
    }

    #[test]
    fn week_boundaries_for_current_and_finished() {
        let weeks = three_weeks();
        let on_last_day = compute_status(&WrittenDays::new(), &weeks, d(12, 14), 20);
        assert!(on_last_day.weeks[1].is_current);
        assert!(!on_last_day.weeks[1].is_finished);

        let on_next_day = compute_status(&WrittenDays::new(), &weeks, d(12, 15), 20);
        assert!(on_next_day.weeks[1].is_finished);
        assert!(!on_next_day.weeks[1].is_current);
        assert!(on_next_day.weeks[2].is_current);
    }

    #[test]
    fn exactly_one_current_week_inside_the_window() {
        let weeks = three_weeks();
        let mut today = d(12, 3);
        while today <= d(12, 21) {
            let status = compute_status(&WrittenDays::new(), &weeks, today, 20);
            let current = status.weeks.iter().filter(|w| w.is_current).count();
            assert_eq!(current, 1, "on {}", today);
            for week in &status.weeks {
                assert_eq!(week.is_finished, week.end < today);
            }
            today = today.succ_opt().unwrap();
        }
    }

    #[test]
    fn no_current_week_in_a_gap() {
        let weeks = vec![
            WeekDefinition::new("W1", d(12, 1), d(12, 7), 5, true),
            WeekDefinition::new("W2", d(12, 15), d(12, 21), 5, true),
        ];
        let status = compute_status(&WrittenDays::new(), &weeks, d(12, 10), 10);
        assert!(status.current_week().is_none());
        assert!(status.weeks[0].is_finished);
        assert!(!status.weeks[1].is_finished);
    }

    #[test]
    fn rates_are_clamped_to_one_hundred() {
        let weeks = vec![WeekDefinition::new("W1", d(12, 8), d(12, 14), 5, true)];
        let days = written(&[
            d(12, 8),
            d(12, 9),
            d(12, 10),
            d(12, 11),
            d(12, 12),
            d(12, 13),
            d(12, 14),
        ]);
        let status = compute_status(&days, &weeks, d(12, 20), 5);
        assert_eq!(status.weeks[0].written, 7);
        assert_eq!(status.weeks[0].rate, 100.0);
        assert_eq!(status.overall.completion_rate, 100.0);
    }

    #[test]
    fn zero_goals_give_zero_rates() {
        assert_eq!(capped_rate(3, 0), 0.0);
        let weeks = vec![WeekDefinition::new("W1", d(12, 8), d(12, 14), 0, true)];
        let status = compute_status(&written(&[d(12, 9)]), &weeks, d(12, 20), 0);
        assert_eq!(status.weeks[0].rate, 0.0);
        assert_eq!(status.overall.completion_rate, 0.0);
    }

    #[test]
    fn rates_stay_in_range_for_any_count() {
        for goal in 1..=10u32 {
            for count in 0..=30u32 {
                let rate = capped_rate(count, goal);
                assert!((0.0..=100.0).contains(&rate));
            }
        }
    }

    #[test]
    fn total_goal_is_independent_of_weekly_goals() {
        let days = written(&[d(12, 9), d(12, 10)]);
        let status = compute_status(&days, &three_weeks(), d(12, 30), 8);
        assert_eq!(status.overall.total_written, 2);
        assert_eq!(status.overall.completion_rate, 25.0);
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let days = written(&[d(12, 9), d(12, 16)]);
        let weeks = three_weeks();
        let first = compute_status(&days, &weeks, d(12, 17), 20);
        let second = compute_status(&days, &weeks, d(12, 17), 20);
        assert_eq!(first, second);
    }
}
