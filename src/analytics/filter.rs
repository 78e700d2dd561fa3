// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Date-range filtering over dated records.

use chrono::NaiveDate;

use crate::analytics::period::DateRange;
use crate::models::{WeightEntry, WorkoutRecord};

/// Anything that lives on a calendar day.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for NaiveDate {
    fn date(&self) -> NaiveDate {
        *self
    }
}

impl Dated for WorkoutRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for WeightEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn date(&self) -> NaiveDate {
        (**self).date()
    }
}

/// Records whose date lies inside `range`, in their original order.
pub fn filter_by_range<T: Dated>(records: &[T], range: DateRange) -> Vec<&T> {
    records
        .iter()
        .filter(|record| range.contains(record.date()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_inclusive_bounds_and_order() {
        let dates = vec![
            d("2024-01-31"),
            d("2024-01-01"),
            d("2023-12-31"),
            d("2024-01-15"),
            d("2024-02-01"),
        ];
        let range = DateRange::Between {
            start: d("2024-01-01"),
            end: d("2024-01-31"),
        };

        let kept: Vec<NaiveDate> = filter_by_range(&dates, range).into_iter().copied().collect();

        assert_eq!(kept, vec![d("2024-01-31"), d("2024-01-01"), d("2024-01-15")]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let dates: Vec<NaiveDate> = (1..=28).map(|day| d(&format!("2024-02-{:02}", day))).collect();
        let range = DateRange::Between {
            start: d("2024-02-10"),
            end: d("2024-02-20"),
        };

        let once = filter_by_range(&dates, range);
        let twice = filter_by_range(&once, range);

        assert_eq!(once.len(), 11);
        assert_eq!(
            once.iter().map(|x| x.date()).collect::<Vec<_>>(),
            twice.iter().map(|x| x.date()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_unbounded_keeps_everything() {
        let dates = vec![d("1990-05-05"), d("2099-01-01")];
        assert_eq!(filter_by_range(&dates, DateRange::Unbounded).len(), 2);
    }
}
