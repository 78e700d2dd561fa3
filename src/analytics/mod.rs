// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout analytics engine.
//!
//! Pure functions over already-loaded, single-user snapshots:
//! 1. Resolve a period into a date range
//! 2. Filter records into that range
//! 3. Reduce the subset into streaks and distributions
//! 4. Merge everything into a report
//!
//! Nothing here performs I/O. Callers recompute after every mutation.

pub mod calendar;
pub mod distribution;
pub mod filter;
pub mod period;
pub mod streak;
pub mod summary;
pub mod weight;

pub use calendar::{build_month, CalendarMonth};
pub use distribution::Bucket;
pub use filter::{filter_by_range, Dated};
pub use period::{DateRange, Period};
pub use streak::{current_streak, max_streak};
pub use summary::{summarize, StatsReport};
pub use weight::{summarize_weights, WeightSummary};
