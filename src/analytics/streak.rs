// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout streaks: runs of consecutive calendar days with a workout.

use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};

/// How far back the current streak is followed.
pub const CURRENT_STREAK_LOOKBACK_DAYS: u32 = 365;

/// Longest run of consecutive days in `dates`.
///
/// Duplicate dates count once. Empty input yields 0.
pub fn max_streak<I>(dates: I) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: BTreeSet<NaiveDate> = dates.into_iter().collect();

    let mut best = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;
    for day in days {
        run = match previous {
            Some(prev) if (day - prev).num_days() == 1 => run + 1,
            _ => 1,
        };
        best = best.max(run);
        previous = Some(day);
    }
    best
}

/// Consecutive days with a workout ending at `reference`.
///
/// Zero when `reference` itself has no workout.
pub fn current_streak<I>(dates: I, reference: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let days: HashSet<NaiveDate> = dates.into_iter().collect();

    let mut count = 0;
    let mut day = reference;
    while count < CURRENT_STREAK_LOOKBACK_DAYS && days.contains(&day) {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}
