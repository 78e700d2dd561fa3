// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Body-weight log. One entry per user per day, keyed by owner and date.

use validator::Validate;

use crate::db::{day_document_id, Store};
use crate::error::{AppError, Result};
use crate::models::{WeightDraft, WeightEntry};
use crate::time_utils::now_rfc3339;

pub struct WeightService {
    db: Store,
}

impl WeightService {
    pub fn new(db: Store) -> Self {
        Self { db }
    }

    /// All entries, oldest first.
    pub async fn list(&self, user_id: &str) -> Result<Vec<WeightEntry>> {
        let mut entries = self.db.list_weights(user_id).await?;
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    /// Record a weight. An existing entry on the same date is overwritten.
    ///
    /// Returns the stored entry and whether it was newly created.
    pub async fn save(&self, user_id: &str, draft: WeightDraft) -> Result<(WeightEntry, bool)> {
        draft.validate()?;

        let fresh = WeightEntry {
            id: day_document_id(user_id, draft.date),
            user_id: user_id.to_string(),
            weight: draft.weight,
            date: draft.date,
            created_at: now_rfc3339(),
        };

        let existing = self.db.get_weight(user_id, &fresh.id).await?;
        let created = existing.is_none() && self.db.insert_weight(&fresh).await?;

        let entry = if created {
            fresh
        } else {
            // Overwrite the stored entry, which may have been created concurrently
            let mut entry = match existing {
                Some(entry) => entry,
                None => self.db.get_weight(user_id, &fresh.id).await?.unwrap_or(fresh),
            };
            entry.weight = draft.weight;
            self.db.set_weight(&entry).await?;
            entry
        };

        tracing::info!(
            user_id,
            weight_id = %entry.id,
            date = %entry.date,
            created,
            "Weight saved"
        );
        Ok((entry, created))
    }

    pub async fn delete(&self, user_id: &str, id: &str) -> Result<()> {
        let entry = self
            .db
            .get_weight(user_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Weight entry {} not found", id)))?;
        self.db.delete_weight(&entry.id).await?;
        tracing::info!(user_id, weight_id = %entry.id, "Weight deleted");
        Ok(())
    }
}
