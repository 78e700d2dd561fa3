// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod weight;
pub mod workout;
pub mod workout_type;

pub use weight::{WeightDraft, WeightEntry};
pub use workout::{ExerciseDraft, ExerciseEntry, WorkoutDraft, WorkoutRecord};
pub use workout_type::{ExerciseTemplate, WorkoutTypeDescriptor, WorkoutTypeDraft};

use chrono::NaiveDate;
use validator::ValidationError;

use crate::analytics::period::is_supported_date;

/// Reject dates outside the years the tracker accepts.
pub fn validate_supported_date(date: &NaiveDate) -> Result<(), ValidationError> {
    if is_supported_date(*date) {
        Ok(())
    } else {
        Err(ValidationError::new("unsupported_date"))
    }
}
