// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout logging service.
//!
//! Every mutation follows the same order:
//! 1. Validate the request
//! 2. Load the current document and check ownership
//! 3. Write to the store
//! 4. Return the confirmed record (nothing is returned if the write failed)
//!
//! A workout's document id is derived from its owner and date, so the store
//! itself rejects a second workout on the same day.

use chrono::NaiveDate;
use validator::Validate;

use crate::db::{day_document_id, Store};
use crate::error::{AppError, Result};
use crate::models::{ExerciseDraft, WorkoutDraft, WorkoutRecord};
use crate::time_utils::now_rfc3339;

/// Result of saving a workout for a date.
#[derive(Debug)]
pub struct SaveOutcome {
    pub record: WorkoutRecord,
    /// `false` when an existing workout on that date was updated
    pub created: bool,
}

/// Workout operations scoped to one user per call.
pub struct WorkoutService {
    db: Store,
}

impl WorkoutService {
    pub fn new(db: Store) -> Self {
        Self { db }
    }

    /// All workouts, newest first.
    pub async fn list(&self, user_id: &str) -> Result<Vec<WorkoutRecord>> {
        let mut workouts = self.db.list_workouts(user_id).await?;
        workouts.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(workouts)
    }

    pub async fn get(&self, user_id: &str, id: &str) -> Result<WorkoutRecord> {
        self.db
            .get_workout(user_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", id)))
    }

    /// Save the workout for `draft.date`.
    ///
    /// If the user already logged a workout that day it is updated in place,
    /// keeping its id. Concurrent saves for one day create a single workout. With `from_template`, an empty exercise list is filled
    /// from the workout type's templates.
    pub async fn save(
        &self,
        user_id: &str,
        draft: WorkoutDraft,
        from_template: bool,
    ) -> Result<SaveOutcome> {
        let mut draft = self.check_draft(user_id, draft).await?;

        if from_template && draft.exercises.is_empty() {
            if let Some(type_id) = draft.type_id.as_deref() {
                if let Some(descriptor) = self.db.get_workout_type(type_id).await? {
                    draft.exercises = descriptor.exercises.iter().map(ExerciseDraft::from).collect();
                }
            }
        }

        let (record, created) = self.upsert(user_id, draft, &now_rfc3339()).await?;

        tracing::info!(
            user_id,
            workout_id = %record.id,
            date = %record.date,
            created,
            "Workout saved"
        );

        Ok(SaveOutcome { record, created })
    }

    /// Create the day's workout, or update it if one is already stored.
    async fn upsert(
        &self,
        user_id: &str,
        draft: WorkoutDraft,
        now: &str,
    ) -> Result<(WorkoutRecord, bool)> {
        let id = day_document_id(user_id, draft.date);

        if self.db.get_workout(user_id, &id).await?.is_none() {
            let blank = blank_record(&id, user_id, draft.date, now);
            let record = apply_draft(blank, draft.clone(), now);
            if self.db.insert_workout(&record).await? {
                return Ok((record, true));
            }
            tracing::debug!(user_id, workout_id = %id, "Concurrent save created the workout first");
        }

        let base = self
            .db
            .get_workout(user_id, &id)
            .await?
            .unwrap_or_else(|| blank_record(&id, user_id, draft.date, now));
        let record = apply_draft(base, draft, now);
        self.db.set_workout(&record).await?;
        Ok((record, false))
    }

    /// Replace an existing workout.
    ///
    /// Moving it to a date that already has another workout is a conflict.
    /// A moved workout is re-created under its new day's id and the old
    /// document is deleted, so the returned id differs from `id`.
    pub async fn update(&self, user_id: &str, id: &str, draft: WorkoutDraft) -> Result<WorkoutRecord> {
        let draft = self.check_draft(user_id, draft).await?;
        let existing = self.get(user_id, id).await?;

        if draft.date == existing.date {
            let record = apply_draft(existing, draft, &now_rfc3339());
            self.db.set_workout(&record).await?;
            tracing::info!(user_id, workout_id = %record.id, date = %record.date, "Workout updated");
            return Ok(record);
        }

        let old_id = existing.id.clone();
        let mut record = apply_draft(existing, draft, &now_rfc3339());
        record.id = day_document_id(user_id, record.date);

        if !self.db.insert_workout(&record).await? {
            return Err(AppError::Conflict(format!(
                "A workout is already logged on {}",
                record.date
            )));
        }
        if record.id != old_id {
            self.db.delete_workout(&old_id).await?;
        }

        tracing::info!(
            user_id,
            workout_id = %record.id,
            previous_id = %old_id,
            date = %record.date,
            "Workout moved"
        );
        Ok(record)
    }

    /// Delete a workout along with its exercises.
    pub async fn delete(&self, user_id: &str, id: &str) -> Result<()> {
        let existing = self.get(user_id, id).await?;
        self.db.delete_workout(&existing.id).await?;
        tracing::info!(user_id, workout_id = %existing.id, "Workout deleted");
        Ok(())
    }

    // ─── Exercises ───────────────────────────────────────────────

    pub async fn add_exercise(
        &self,
        user_id: &str,
        id: &str,
        draft: ExerciseDraft,
    ) -> Result<WorkoutRecord> {
        draft.validate()?;
        self.modify(user_id, id, |record| {
            record.push_exercise(draft);
            Ok(())
        })
        .await
    }

    pub async fn update_exercise(
        &self,
        user_id: &str,
        id: &str,
        order: u32,
        draft: ExerciseDraft,
    ) -> Result<WorkoutRecord> {
        draft.validate()?;
        self.modify(user_id, id, |record| {
            if record.replace_exercise(order, draft) {
                Ok(())
            } else {
                Err(exercise_not_found(order))
            }
        })
        .await
    }

    pub async fn remove_exercise(&self, user_id: &str, id: &str, order: u32) -> Result<WorkoutRecord> {
        self.modify(user_id, id, |record| {
            record
                .remove_exercise(order)
                .map(|_| ())
                .ok_or_else(|| exercise_not_found(order))
        })
        .await
    }

    pub async fn move_exercise(
        &self,
        user_id: &str,
        id: &str,
        from: u32,
        to: u32,
    ) -> Result<WorkoutRecord> {
        self.modify(user_id, id, |record| {
            if record.move_exercise(from, to) {
                Ok(())
            } else {
                Err(exercise_not_found(from))
            }
        })
        .await
    }

    /// Load, edit in memory, write back.
    async fn modify<F>(&self, user_id: &str, id: &str, edit: F) -> Result<WorkoutRecord>
    where
        F: FnOnce(&mut WorkoutRecord) -> Result<()>,
    {
        let mut record = self.get(user_id, id).await?;
        edit(&mut record)?;
        record.updated_at = now_rfc3339();
        self.db.set_workout(&record).await?;

        tracing::debug!(
            user_id,
            workout_id = %record.id,
            exercises = record.exercises.len(),
            "Workout exercises updated"
        );
        Ok(record)
    }

    /// Validate a draft and make sure its type reference is usable.
    async fn check_draft(&self, user_id: &str, draft: WorkoutDraft) -> Result<WorkoutDraft> {
        let draft = draft.normalized();
        draft.validate()?;

        if !draft.has_type() {
            return Err(AppError::Validation(
                "type_id or custom_type is required".to_string(),
            ));
        }

        if let Some(type_id) = draft.type_id.as_deref() {
            let visible = self
                .db
                .get_workout_type(type_id)
                .await?
                .is_some_and(|t| t.is_visible_to(user_id));
            if !visible {
                return Err(AppError::BadRequest(format!(
                    "Unknown workout type: {}",
                    type_id
                )));
            }
        }

        Ok(draft)
    }
}

fn blank_record(id: &str, user_id: &str, date: NaiveDate, now: &str) -> WorkoutRecord {
    WorkoutRecord {
        id: id.to_string(),
        user_id: user_id.to_string(),
        date,
        type_id: None,
        custom_type: None,
        notes: None,
        exercises: vec![],
        created_at: now.to_string(),
        updated_at: now.to_string(),
    }
}

/// Overwrite the editable fields of `record` with `draft`.
fn apply_draft(mut record: WorkoutRecord, draft: WorkoutDraft, now: &str) -> WorkoutRecord {
    record.date = draft.date;
    record.type_id = draft.type_id;
    record.custom_type = draft.custom_type;
    record.notes = draft.notes;
    record.exercises.clear();
    for exercise in draft.exercises {
        record.push_exercise(exercise);
    }
    record.updated_at = now.to_string();
    record
}

fn exercise_not_found(order: u32) -> AppError {
    AppError::NotFound(format!("Exercise {} not found", order))
}
