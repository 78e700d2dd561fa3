// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Body-weight progress over a period.

use chrono::NaiveDate;
use serde::Serialize;

use crate::analytics::filter::filter_by_range;
use crate::analytics::period::Period;
use crate::models::WeightEntry;

/// A point on the weight chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub date: NaiveDate,
    pub weight: f64,
}

/// Weight progress for one period. Numeric fields are absent without entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightSummary {
    pub period: Period,
    pub entries: u32,
    /// Latest weight in the period
    pub current: Option<f64>,
    /// Earliest weight in the period
    pub starting: Option<f64>,
    /// `current - starting`
    pub change: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub average: Option<f64>,
    /// Entries in ascending date order
    pub points: Vec<WeightPoint>,
}

/// Summarize the weights that fall in `period` around `reference`.
pub fn summarize_weights(
    period: Period,
    reference: NaiveDate,
    entries: &[WeightEntry],
) -> WeightSummary {
    let mut points: Vec<WeightPoint> = filter_by_range(entries, period.range(reference))
        .into_iter()
        .map(|e| WeightPoint {
            date: e.date,
            weight: e.weight,
        })
        .collect();
    points.sort_by_key(|p| p.date);

    let current = points.last().map(|p| p.weight);
    let starting = points.first().map(|p| p.weight);
    let change = current.zip(starting).map(|(c, s)| round1(c - s));
    let min = points.iter().map(|p| p.weight).reduce(f64::min);
    let max = points.iter().map(|p| p.weight).reduce(f64::max);
    let average = if points.is_empty() {
        None
    } else {
        Some(round1(
            points.iter().map(|p| p.weight).sum::<f64>() / points.len() as f64,
        ))
    };

    WeightSummary {
        period,
        entries: points.len() as u32,
        current,
        starting,
        change,
        min,
        max,
        average,
        points,
    }
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
