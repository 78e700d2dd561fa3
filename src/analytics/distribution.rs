// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout counts grouped by type, weekday and month.

use chrono::Datelike;
use serde::Serialize;
use std::collections::HashMap;

use crate::analytics::filter::Dated;
use crate::models::workout_type::resolve_type;
use crate::models::{WorkoutRecord, WorkoutTypeDescriptor};

/// Weekday labels, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Seg", "Ter", "Qua", "Qui", "Sex", "Sáb", "Dom"];
/// Month labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

const CALENDAR_BUCKET_COLOR: &str = "#22C55E";
const WEEKDAY_BUCKET_ICON: &str = "📅";
const MONTH_BUCKET_ICON: &str = "🗓️";

/// One bar of a distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub count: u32,
    pub color: String,
    pub icon: String,
}

impl Bucket {
    fn empty(label: &str, color: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            count: 0,
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Counts per resolved workout type.
///
/// Only types with at least one workout appear. Sorted by descending count,
/// ties broken by label.
pub fn by_type(records: &[&WorkoutRecord], types: &[WorkoutTypeDescriptor]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let resolved = resolve_type(record, types);
        match index.get(&resolved.name) {
            Some(&i) => buckets[i].count += 1,
            None => {
                index.insert(resolved.name.clone(), buckets.len());
                buckets.push(Bucket {
                    label: resolved.name,
                    count: 1,
                    color: resolved.color,
                    icon: resolved.icon,
                });
            }
        }
    }

    buckets.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    buckets
}

/// Counts per weekday, always seven buckets from Monday to Sunday.
pub fn by_weekday<T: Dated>(records: &[T]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = WEEKDAY_LABELS
        .iter()
        .map(|label| Bucket::empty(label, CALENDAR_BUCKET_COLOR, WEEKDAY_BUCKET_ICON))
        .collect();

    for record in records {
        let slot = record.date().weekday().num_days_from_monday() as usize;
        buckets[slot].count += 1;
    }
    buckets
}

/// Counts per month of year, always twelve buckets from January.
///
/// Records from different years share a bucket (March 2023 and March 2024
/// both count toward `Mar`), so the counts always sum to `records.len()`.
pub fn by_month<T: Dated>(records: &[T]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = MONTH_LABELS
        .iter()
        .map(|label| Bucket::empty(label, CALENDAR_BUCKET_COLOR, MONTH_BUCKET_ICON))
        .collect();

    for record in records {
        let slot = record.date().month0() as usize;
        buckets[slot].count += 1;
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::workout::test_record;
    use crate::models::workout_type::FALLBACK_TYPE_NAME;

    fn descriptor(id: &str, name: &str) -> WorkoutTypeDescriptor {
        WorkoutTypeDescriptor {
            id: id.to_string(),
            user_id: None,
            is_default: true,
            name: name.to_string(),
            icon: "💪".to_string(),
            color: "#EF4444".to_string(),
            exercises: vec![],
        }
    }

    #[test]
    fn test_by_type_counts_and_ordering() {
        let types = vec![descriptor("a", "Pernas"), descriptor("b", "Cardio")];
        let records = vec![
            test_record("2024-01-01", Some("a"), None),
            test_record("2024-01-02", Some("b"), None),
            test_record("2024-01-03", Some("a"), None),
            test_record("2024-01-04", None, Some("Yoga")),
            test_record("2024-01-05", Some("gone"), None),
        ];
        let refs: Vec<&WorkoutRecord> = records.iter().collect();

        let buckets = by_type(&refs, &types);
        let summary: Vec<(&str, u32)> = buckets
            .iter()
            .map(|b| (b.label.as_str(), b.count))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Pernas", 2),
                ("Cardio", 1),
                (FALLBACK_TYPE_NAME, 1),
                ("Yoga", 1)
            ]
        );
    }

    #[test]
    fn test_by_type_is_sparse() {
        let types = vec![descriptor("a", "Pernas"), descriptor("b", "Cardio")];
        assert!(by_type(&[], &types).is_empty());
    }

    #[test]
    fn test_sunday_is_last_weekday() {
        // 2024-01-07 is a Sunday, 2024-01-08 a Monday
        let records = vec![
            test_record("2024-01-07", Some("a"), None),
            test_record("2024-01-08", Some("a"), None),
        ];
        let buckets = by_weekday(&records);

        assert_eq!(buckets.len(), 7);
        assert_eq!(buckets[0].label, "Seg");
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[6].label, "Dom");
        assert_eq!(buckets[6].count, 1);
    }

    #[test]
    fn test_fixed_buckets_sum_to_input_size() {
        let records: Vec<WorkoutRecord> = ["2024-01-01", "2024-03-15", "2024-03-16", "2024-12-31"]
            .iter()
            .map(|d| test_record(d, Some("a"), None))
            .collect();

        let weekdays = by_weekday(&records);
        let months = by_month(&records);

        assert_eq!(weekdays.iter().map(|b| b.count).sum::<u32>(), 4);
        assert_eq!(months.len(), 12);
        assert_eq!(months.iter().map(|b| b.count).sum::<u32>(), 4);
        assert_eq!(months[2].count, 2);
        assert_eq!(months[11].label, "Dez");
    }

    #[test]
    fn test_months_of_different_years_share_a_bucket() {
        let records: Vec<WorkoutRecord> = ["2023-03-10", "2024-03-10", "2024-04-01"]
            .iter()
            .map(|d| test_record(d, Some("a"), None))
            .collect();

        let months = by_month(&records);
        assert_eq!(months[2].count, 2);
        assert_eq!(months[3].count, 1);
        assert_eq!(months.iter().map(|b| b.count).sum::<u32>(), 3);
    }

    #[test]
    fn test_empty_input_keeps_fixed_buckets() {
        let records: Vec<WorkoutRecord> = vec![];
        assert_eq!(by_weekday(&records).len(), 7);
        assert!(by_month(&records).iter().all(|b| b.count == 0));
    }
}
