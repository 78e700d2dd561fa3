// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Month calendar view.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

use crate::analytics::period::days_in_month;
use crate::models::workout_type::resolve_type;
use crate::models::{WorkoutRecord, WorkoutTypeDescriptor};

/// Workout shown on a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarMarker {
    pub workout_id: String,
    pub label: String,
    pub icon: String,
    pub color: String,
    pub exercises: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// 0 = Monday
    pub weekday: u32,
    pub workout: Option<CalendarMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub workout_days: u32,
    pub days: Vec<CalendarDay>,
}

/// Build the calendar for `year`/`month` (1-based). `None` for an invalid month.
pub fn build_month(
    year: i32,
    month: u32,
    workouts: &[WorkoutRecord],
    types: &[WorkoutTypeDescriptor],
) -> Option<CalendarMonth> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let by_date: HashMap<NaiveDate, &WorkoutRecord> = workouts
        .iter()
        .filter(|w| w.date.year() == year && w.date.month() == month)
        .map(|w| (w.date, w))
        .collect();

    let days: Vec<CalendarDay> = first
        .iter_days()
        .take(days_in_month(year, month) as usize)
        .map(|date| CalendarDay {
            date,
            weekday: date.weekday().num_days_from_monday(),
            workout: by_date.get(&date).map(|w| {
                let resolved = resolve_type(w, types);
                CalendarMarker {
                    workout_id: w.id.clone(),
                    label: resolved.name,
                    icon: resolved.icon,
                    color: resolved.color,
                    exercises: w.exercises.len() as u32,
                }
            }),
        })
        .collect();

    Some(CalendarMonth {
        year,
        month,
        workout_days: by_date.len() as u32,
        days,
    })
}
