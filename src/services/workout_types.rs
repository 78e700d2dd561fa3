// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User-defined workout types.
//!
//! The seeded defaults are visible to everyone and read-only. Removing a
//! user's type leaves historical workouts untouched; they resolve to the
//! fallback type from then on.

use uuid::Uuid;
use validator::Validate;

use crate::db::Store;
use crate::error::{AppError, Result};
use crate::models::workout_type::is_color_token;
use crate::models::{WorkoutTypeDescriptor, WorkoutTypeDraft};

pub struct WorkoutTypeService {
    db: Store,
}

impl WorkoutTypeService {
    pub fn new(db: Store) -> Self {
        Self { db }
    }

    /// Defaults first, then the user's own types.
    pub async fn list(&self, user_id: &str) -> Result<Vec<WorkoutTypeDescriptor>> {
        self.db.list_workout_types(user_id).await
    }

    pub async fn create(&self, user_id: &str, draft: WorkoutTypeDraft) -> Result<WorkoutTypeDescriptor> {
        check_draft(&draft)?;

        let descriptor = WorkoutTypeDescriptor {
            id: Uuid::new_v4().to_string(),
            user_id: Some(user_id.to_string()),
            is_default: false,
            name: draft.name.trim().to_string(),
            icon: draft.icon,
            color: draft.color.to_uppercase(),
            exercises: draft.exercises,
        };
        self.db.set_workout_type(&descriptor).await?;

        tracing::info!(user_id, type_id = %descriptor.id, name = %descriptor.name, "Workout type created");
        Ok(descriptor)
    }

    pub async fn update(
        &self,
        user_id: &str,
        id: &str,
        draft: WorkoutTypeDraft,
    ) -> Result<WorkoutTypeDescriptor> {
        check_draft(&draft)?;
        let mut descriptor = self.owned(user_id, id).await?;

        descriptor.name = draft.name.trim().to_string();
        descriptor.icon = draft.icon;
        descriptor.color = draft.color.to_uppercase();
        descriptor.exercises = draft.exercises;
        self.db.set_workout_type(&descriptor).await?;

        tracing::info!(user_id, type_id = %descriptor.id, "Workout type updated");
        Ok(descriptor)
    }

    pub async fn delete(&self, user_id: &str, id: &str) -> Result<()> {
        let descriptor = self.owned(user_id, id).await?;
        self.db.delete_workout_type(&descriptor.id).await?;
        tracing::info!(user_id, type_id = %descriptor.id, "Workout type deleted");
        Ok(())
    }

    /// Fetch a descriptor the user is allowed to change.
    async fn owned(&self, user_id: &str, id: &str) -> Result<WorkoutTypeDescriptor> {
        let descriptor = self
            .db
            .get_workout_type(id)
            .await?
            .filter(|t| t.is_visible_to(user_id))
            .ok_or_else(|| AppError::NotFound(format!("Workout type {} not found", id)))?;

        if descriptor.is_default {
            return Err(AppError::Forbidden(
                "Default workout types are read-only".to_string(),
            ));
        }
        Ok(descriptor)
    }
}

fn check_draft(draft: &WorkoutTypeDraft) -> Result<()> {
    draft.validate()?;
    if draft.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be blank".to_string()));
    }
    if !is_color_token(&draft.color) {
        return Err(AppError::Validation(
            "color must look like #RRGGBB".to_string(),
        ));
    }
    Ok(())
}
