// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Period statistics report.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::analytics::distribution::{by_month, by_type, by_weekday, Bucket};
use crate::analytics::filter::filter_by_range;
use crate::analytics::period::{DateRange, Period};
use crate::analytics::streak::{current_streak, max_streak};
use crate::models::{WorkoutRecord, WorkoutTypeDescriptor};

/// Most-frequent-type label when there are no workouts.
pub const NO_WORKOUT_TYPE_LABEL: &str = "Nenhum";

/// Statistics for one period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub period: Period,
    pub reference_date: NaiveDate,
    /// First day counted, absent when there is nothing to count
    pub start: Option<NaiveDate>,
    /// Last day of the period, absent for `all`
    pub end: Option<NaiveDate>,
    pub total_workouts: u32,
    /// Distinct calendar days with a workout
    pub workout_days: u32,
    /// Elapsed days of the period, up to today
    pub total_days: u32,
    /// `total_days - workout_days`; negative when future workouts are logged
    pub rest_days: i64,
    pub lost_days: u32,
    pub percentage: u32,
    pub most_frequent_type: String,
    pub max_streak: u32,
    /// Streak ending today, over all workouts
    pub current_streak: u32,
    pub by_type: Vec<Bucket>,
    pub by_weekday: Vec<Bucket>,
    pub by_month: Vec<Bucket>,
}

/// Build the statistics report for `period` around `reference`.
///
/// `today` caps the elapsed-day count so future days never count as missed.
pub fn summarize(
    period: Period,
    reference: NaiveDate,
    today: NaiveDate,
    workouts: &[WorkoutRecord],
    types: &[WorkoutTypeDescriptor],
) -> StatsReport {
    let range = period.range(reference);
    let filtered = filter_by_range(workouts, range);

    let days: BTreeSet<NaiveDate> = filtered.iter().map(|w| w.date).collect();
    let workout_days = days.len() as u32;

    // `all` counts from the first workout ever logged
    let (start, end) = match range {
        DateRange::Between { start, end } => (Some(start), Some(end)),
        DateRange::Unbounded => (workouts.iter().map(|w| w.date).min(), None),
    };
    let total_days = start.map_or(0, |start| elapsed_days(start, end, today));

    let by_type = by_type(&filtered, types);
    let most_frequent_type = by_type
        .first()
        .map(|b| b.label.clone())
        .unwrap_or_else(|| NO_WORKOUT_TYPE_LABEL.to_string());

    StatsReport {
        period,
        reference_date: reference,
        start,
        end,
        total_workouts: filtered.len() as u32,
        workout_days,
        total_days,
        rest_days: total_days as i64 - workout_days as i64,
        lost_days: total_days.saturating_sub(workout_days),
        percentage: percentage(workout_days, total_days),
        most_frequent_type,
        max_streak: max_streak(days.iter().copied()),
        current_streak: current_streak(workouts.iter().map(|w| w.date), today),
        by_type,
        by_weekday: by_weekday(&filtered),
        by_month: by_month(&filtered),
    }
}

/// Inclusive day count from `start` to `min(end, today)`.
fn elapsed_days(start: NaiveDate, end: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let last = end.map_or(today, |end| end.min(today));
    if start > last {
        0
    } else {
        ((last - start).num_days() + 1) as u32
    }
}

/// Share of elapsed days with a workout, rounded, within `[0, 100]`.
fn percentage(workout_days: u32, total_days: u32) -> u32 {
    if total_days == 0 {
        return 0;
    }
    let pct = (workout_days as f64 / total_days as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::workout::test_record;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn types() -> Vec<WorkoutTypeDescriptor> {
        ["Peito", "Cardio"]
            .iter()
            .map(|name| WorkoutTypeDescriptor {
                id: name.to_lowercase(),
                user_id: None,
                is_default: true,
                name: name.to_string(),
                icon: "💪".to_string(),
                color: "#EF4444".to_string(),
                exercises: vec![],
            })
            .collect()
    }

    #[test]
    fn test_empty_month() {
        let report = summarize(Period::Month, d("2024-05-20"), d("2024-05-20"), &[], &types());

        assert_eq!(report.total_workouts, 0);
        assert_eq!(report.percentage, 0);
        assert_eq!(report.most_frequent_type, NO_WORKOUT_TYPE_LABEL);
        assert_eq!(report.max_streak, 0);
        assert_eq!(report.total_days, 20);
        assert_eq!(report.lost_days, 20);
        assert_eq!(report.by_weekday.len(), 7);
        assert_eq!(report.by_month.len(), 12);
    }

    #[test]
    fn test_month_report() {
        let workouts = vec![
            test_record("2024-01-01", Some("peito"), None),
            test_record("2024-01-02", Some("cardio"), None),
            test_record("2024-01-03", Some("peito"), None),
            test_record("2024-01-05", Some("peito"), None),
            // outside the month
            test_record("2023-12-31", Some("cardio"), None),
        ];

        let report = summarize(Period::Month, d("2024-01-10"), d("2024-01-10"), &workouts, &types());

        assert_eq!(report.start, Some(d("2024-01-01")));
        assert_eq!(report.end, Some(d("2024-01-31")));
        assert_eq!(report.total_workouts, 4);
        assert_eq!(report.workout_days, 4);
        assert_eq!(report.total_days, 10);
        assert_eq!(report.rest_days, 6);
        assert_eq!(report.lost_days, 6);
        assert_eq!(report.percentage, 40);
        assert_eq!(report.most_frequent_type, "Peito");
        assert_eq!(report.max_streak, 3);
        assert_eq!(report.current_streak, 0);
    }

    #[test]
    fn test_future_days_do_not_count() {
        let workouts = vec![test_record("2024-01-01", Some("peito"), None)];
        let report = summarize(Period::Month, d("2024-01-01"), d("2024-01-01"), &workouts, &types());

        assert_eq!(report.total_days, 1);
        assert_eq!(report.percentage, 100);
        assert_eq!(report.current_streak, 1);
    }

    #[test]
    fn test_period_entirely_in_future() {
        let report = summarize(Period::Month, d("2025-03-01"), d("2024-01-01"), &[], &types());
        assert_eq!(report.total_days, 0);
        assert_eq!(report.percentage, 0);
    }

    #[test]
    fn test_percentage_clamped_with_future_workouts() {
        // Workouts already logged for later in the week
        let workouts = vec![
            test_record("2024-01-01", Some("peito"), None),
            test_record("2024-01-02", Some("peito"), None),
            test_record("2024-01-03", Some("peito"), None),
        ];
        let report = summarize(Period::Week, d("2024-01-01"), d("2024-01-01"), &workouts, &types());

        assert_eq!(report.total_days, 1);
        assert_eq!(report.rest_days, -2);
        assert_eq!(report.lost_days, 0);
        assert_eq!(report.percentage, 100);
    }

    #[test]
    fn test_all_starts_at_first_workout() {
        let workouts = vec![
            test_record("2024-01-10", Some("peito"), None),
            test_record("2024-01-01", Some("cardio"), None),
        ];
        let report = summarize(Period::All, d("2024-01-10"), d("2024-01-10"), &workouts, &types());

        assert_eq!(report.start, Some(d("2024-01-01")));
        assert_eq!(report.end, None);
        assert_eq!(report.total_days, 10);
        assert_eq!(report.percentage, 20);
    }

    #[test]
    fn test_most_frequent_tie_breaks_by_label() {
        let workouts = vec![
            test_record("2024-01-01", Some("peito"), None),
            test_record("2024-01-02", Some("cardio"), None),
        ];
        let report = summarize(Period::Month, d("2024-01-15"), d("2024-01-15"), &workouts, &types());
        assert_eq!(report.most_frequent_type, "Cardio");
    }

    #[test]
    fn test_percentage_bounds() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(5, 3), 100);
    }
}
