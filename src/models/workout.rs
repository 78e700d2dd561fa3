// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout records and their exercises.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::workout_type::ExerciseTemplate;

/// Stored workout record. At most one exists per user per calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Document ID (UUID v4)
    pub id: String,
    /// Owning account
    pub user_id: String,
    /// Calendar date of the workout
    pub date: NaiveDate,
    /// Workout type descriptor, if one applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    /// Free-text label used when no descriptor applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Exercises in display order; `order` always matches the position
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
    pub created_at: String,
    pub updated_at: String,
}

/// An exercise performed during a workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub name: String,
    pub sets: u32,
    /// Free text, e.g. "8-12"
    pub reps: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Zero-based position within the workout
    pub order: u32,
}

impl WorkoutRecord {
    /// Non-blank free-text label, if any.
    pub fn custom_label(&self) -> Option<&str> {
        self.custom_type
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Append an exercise at the end of the list.
    pub fn push_exercise(&mut self, draft: ExerciseDraft) {
        let order = self.exercises.len() as u32;
        self.exercises.push(draft.into_entry(order));
    }

    /// Replace the exercise at `order`. Returns `false` if there is none.
    pub fn replace_exercise(&mut self, order: u32, draft: ExerciseDraft) -> bool {
        match self.exercises.get_mut(order as usize) {
            Some(slot) => {
                *slot = draft.into_entry(order);
                true
            }
            None => false,
        }
    }

    /// Remove the exercise at `order` and close the gap.
    pub fn remove_exercise(&mut self, order: u32) -> Option<ExerciseEntry> {
        let index = order as usize;
        if index >= self.exercises.len() {
            return None;
        }
        let removed = self.exercises.remove(index);
        self.reindex_exercises();
        Some(removed)
    }

    /// Move the exercise at `from` so it ends up at position `to`.
    ///
    /// Targets past the end are clamped to the last position.
    pub fn move_exercise(&mut self, from: u32, to: u32) -> bool {
        let from = from as usize;
        if from >= self.exercises.len() {
            return false;
        }
        let entry = self.exercises.remove(from);
        let to = (to as usize).min(self.exercises.len());
        self.exercises.insert(to, entry);
        self.reindex_exercises();
        true
    }

    /// Rewrite `order` so it is contiguous from zero.
    pub fn reindex_exercises(&mut self) {
        for (i, exercise) in self.exercises.iter_mut().enumerate() {
            exercise.order = i as u32;
        }
    }
}

/// Request body for saving a workout.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkoutDraft {
    #[validate(custom(function = "crate::models::validate_supported_date"))]
    pub date: NaiveDate,
    #[serde(default)]
    pub type_id: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 60))]
    pub custom_type: Option<String>,
    #[serde(default)]
    #[validate(length(max = 280))]
    pub notes: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub exercises: Vec<ExerciseDraft>,
}

impl WorkoutDraft {
    /// Trim text fields and turn blanks into `None`.
    pub fn normalized(mut self) -> Self {
        self.type_id = non_blank(self.type_id);
        self.custom_type = non_blank(self.custom_type);
        self.notes = non_blank(self.notes);
        self
    }

    /// A workout needs a descriptor or a free-text label.
    pub fn has_type(&self) -> bool {
        self.type_id.is_some() || self.custom_type.is_some()
    }
}

/// Request body for adding or editing an exercise.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ExerciseDraft {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(range(min = 1, max = 100))]
    pub sets: u32,
    #[validate(length(max = 20))]
    pub reps: String,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1000.0))]
    pub weight: Option<f64>,
    #[serde(default)]
    #[validate(length(max = 280))]
    pub notes: Option<String>,
}

impl ExerciseDraft {
    fn into_entry(self, order: u32) -> ExerciseEntry {
        ExerciseEntry {
            name: self.name.trim().to_string(),
            sets: self.sets,
            reps: self.reps.trim().to_string(),
            weight: self.weight,
            notes: non_blank(self.notes),
            order,
        }
    }
}

impl From<&ExerciseTemplate> for ExerciseDraft {
    fn from(template: &ExerciseTemplate) -> Self {
        Self {
            name: template.name.clone(),
            sets: template.sets,
            reps: template.reps.clone(),
            weight: None,
            notes: None,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
pub(crate) fn test_record(date: &str, type_id: Option<&str>, custom: Option<&str>) -> WorkoutRecord {
    WorkoutRecord {
        id: format!("w-{}", date),
        user_id: "user-1".to_string(),
        date: date.parse().unwrap(),
        type_id: type_id.map(String::from),
        custom_type: custom.map(String::from),
        notes: None,
        exercises: vec![],
        created_at: "2024-01-01T00:00:00Z".to_string(),
        updated_at: "2024-01-01T00:00:00Z".to_string(),
    }
}
