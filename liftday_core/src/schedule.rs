//! Weekly schedule resolution.
//!
//! The schedule is a hard-coded policy mapping each day of the Sunday-
//! starting week to a workout or rest assignment, plus the date math for
//! rendering a week window at an arbitrary offset from today.

use chrono::{Datelike, Duration, NaiveDate};

use crate::types::Workout;

/// Fixed day-of-week assignment table
///
/// Sun: Rest, Mon: Upper Push, Tue: Lower Body, Wed: Rest,
/// Thu: Upper Pull, Fri: Full Body, Sat: Rest.
const WEEKLY_PLAN: [DayPlan; 7] = [
    DayPlan {
        workout_id: "rest-day",
        is_rest: true,
    },
    DayPlan {
        workout_id: "upper-push",
        is_rest: false,
    },
    DayPlan {
        workout_id: "lower-body",
        is_rest: false,
    },
    DayPlan {
        workout_id: "rest-day",
        is_rest: true,
    },
    DayPlan {
        workout_id: "upper-pull",
        is_rest: false,
    },
    DayPlan {
        workout_id: "full-body",
        is_rest: false,
    },
    DayPlan {
        workout_id: "rest-day",
        is_rest: true,
    },
];

/// Assignment for one day of the week
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayPlan {
    pub workout_id: &'static str,
    pub is_rest: bool,
}

/// One rendered entry of the week strip
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkoutDay {
    pub date: NaiveDate,
    /// Short weekday name ("Sun", "Mon", ...)
    pub day_name: String,
    /// Day of month
    pub day_num: u32,
    pub is_today: bool,
}

/// Look up the fixed workout-or-rest assignment for a day index (0 = Sunday)
///
/// Returns None for indices outside 0..=6.
pub fn plan_for_day(day_index: usize) -> Option<DayPlan> {
    WEEKLY_PLAN.get(day_index).copied()
}

/// Resolve the workout assigned to a day index against a catalog slice
pub fn workout_for_day<'a>(workouts: &'a [Workout], day_index: usize) -> Option<&'a Workout> {
    let plan = plan_for_day(day_index)?;
    workouts.iter().find(|w| w.id == plan.workout_id)
}

/// The Sunday starting the week `offset` weeks away from today's week
pub fn week_start(today: NaiveDate, offset: i32) -> NaiveDate {
    let days_from_sunday = today.weekday().num_days_from_sunday() as i64;
    today - Duration::days(days_from_sunday) + Duration::days(offset as i64 * 7)
}

/// Produce the 7-day window starting at the Sunday of the offset week
///
/// `is_today` is set only when offset is 0 and the entry falls on today's
/// weekday.
pub fn week_days(today: NaiveDate, offset: i32) -> Vec<WorkoutDay> {
    let start = week_start(today, offset);
    let today_index = today.weekday().num_days_from_sunday() as usize;

    (0..7)
        .map(|i| {
            let date = start + Duration::days(i as i64);
            WorkoutDay {
                date,
                day_name: date.format("%a").to_string(),
                day_num: date.day(),
                is_today: offset == 0 && i == today_index,
            }
        })
        .collect()
}

/// Format the displayed week range, e.g. "March 10 - 16, 2025"
///
/// The start renders as "Month Day", the end (start + 6 days) as
/// "Day, Year", joined with " - ".
pub fn week_range_label(start: NaiveDate) -> String {
    let end = start + Duration::days(6);
    format!(
        "{} {} - {}, {}",
        start.format("%B"),
        start.day(),
        end.day(),
        end.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekly_plan_table() {
        let expected = [
            (0, "rest-day", true),
            (1, "upper-push", false),
            (2, "lower-body", false),
            (3, "rest-day", true),
            (4, "upper-pull", false),
            (5, "full-body", false),
            (6, "rest-day", true),
        ];
        for (index, workout_id, is_rest) in expected {
            let plan = plan_for_day(index).unwrap();
            assert_eq!(plan.workout_id, workout_id, "day {}", index);
            assert_eq!(plan.is_rest, is_rest, "day {}", index);
        }
        assert!(plan_for_day(7).is_none());
    }

    #[test]
    fn test_workout_for_day_resolves_against_catalog() {
        let catalog = build_default_catalog();
        let monday = workout_for_day(&catalog.workouts, 1).unwrap();
        assert_eq!(monday.name, "Upper Body Push");

        let sunday = workout_for_day(&catalog.workouts, 0).unwrap();
        assert_eq!(sunday.id, "rest-day");
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2025-03-12 is a Wednesday; its week starts Sunday 2025-03-09
        let today = date(2025, 3, 12);
        assert_eq!(week_start(today, 0), date(2025, 3, 9));
        assert_eq!(week_start(today, 1), date(2025, 3, 16));
        assert_eq!(week_start(today, -1), date(2025, 3, 2));

        // A Sunday is its own week start
        assert_eq!(week_start(date(2025, 3, 9), 0), date(2025, 3, 9));
    }

    #[test]
    fn test_week_days_window() {
        let today = date(2025, 3, 12); // Wednesday
        let days = week_days(today, 0);

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].date, date(2025, 3, 9));
        assert_eq!(days[0].day_name, "Sun");
        assert_eq!(days[6].date, date(2025, 3, 15));
        assert_eq!(days[6].day_name, "Sat");

        let today_flags: Vec<bool> = days.iter().map(|d| d.is_today).collect();
        assert_eq!(
            today_flags,
            vec![false, false, false, true, false, false, false]
        );
    }

    #[test]
    fn test_week_days_offset_has_no_today() {
        let today = date(2025, 3, 12);
        for offset in [-2, -1, 1, 5] {
            let days = week_days(today, offset);
            assert!(
                days.iter().all(|d| !d.is_today),
                "offset {} should carry no today marker",
                offset
            );
        }
    }

    #[test]
    fn test_week_range_label() {
        assert_eq!(week_range_label(date(2025, 3, 9)), "March 9 - 15, 2025");
        assert_eq!(week_range_label(date(2025, 3, 10)), "March 10 - 16, 2025");
        // Month boundary still shows only the end day-of-month, as displayed
        assert_eq!(week_range_label(date(2025, 3, 30)), "March 30 - 5, 2025");
    }
}
