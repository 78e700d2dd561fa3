// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (Firestore, or process memory for tests and local runs).
//!
//! Every read and write is scoped by the caller's user id.
//!
//! Workouts and weights are keyed by [`day_document_id`], so a user has at
//! most one document per day in each collection. New documents go through
//! `insert_*`, which fails instead of overwriting when the key is taken.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use chrono::NaiveDate;

use crate::error::AppError;
use crate::models::{WeightEntry, WorkoutRecord, WorkoutTypeDescriptor};

/// Collection names as constants.
pub mod collections {
    pub const WORKOUTS: &str = "workouts";
    pub const WORKOUT_TYPES: &str = "workout_types";
    pub const WEIGHTS: &str = "weights";
}

/// Document id for a user's workout or weight on `date`.
pub fn day_document_id(user_id: &str, date: NaiveDate) -> String {
    let safe_user = urlencoding::encode(user_id);
    format!("{}_{}", safe_user, date.format("%Y-%m-%d"))
}

/// Persistence backend used by the services.
#[derive(Clone)]
pub enum Store {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

impl Store {
    /// Fresh, empty in-memory store.
    pub fn memory() -> Self {
        Store::Memory(MemoryDb::new())
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Store::Firestore(_) => "firestore",
            Store::Memory(_) => "memory",
        }
    }

    /// Round trip to the backend; returns the number of seeded default types.
    pub async fn ping(&self) -> Result<usize, AppError> {
        match self {
            Store::Firestore(db) => db.count_default_types().await,
            Store::Memory(db) => Ok(db.count_default_types()),
        }
    }

    // ─── Workouts ────────────────────────────────────────────────

    pub async fn list_workouts(&self, user_id: &str) -> Result<Vec<WorkoutRecord>, AppError> {
        match self {
            Store::Firestore(db) => db.list_workouts(user_id).await,
            Store::Memory(db) => Ok(db.list_workouts(user_id)),
        }
    }

    pub async fn get_workout(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<WorkoutRecord>, AppError> {
        match self {
            Store::Firestore(db) => db.get_workout(user_id, id).await,
            Store::Memory(db) => Ok(db.get_workout(user_id, id)),
        }
    }

    pub async fn find_workout_by_date(
        &self,
        user_id: &str,
        date: NaiveDate,
    ) -> Result<Option<WorkoutRecord>, AppError> {
        self.get_workout(user_id, &day_document_id(user_id, date))
            .await
    }

    /// Create a workout document. Returns `false` if its id is already taken.
    pub async fn insert_workout(&self, record: &WorkoutRecord) -> Result<bool, AppError> {
        match self {
            Store::Firestore(db) => db.insert_workout(record).await,
            Store::Memory(db) => Ok(db.insert_workout(record)),
        }
    }

    pub async fn set_workout(&self, record: &WorkoutRecord) -> Result<(), AppError> {
        match self {
            Store::Firestore(db) => db.set_workout(record).await,
            Store::Memory(db) => {
                db.set_workout(record);
                Ok(())
            }
        }
    }

    pub async fn delete_workout(&self, id: &str) -> Result<(), AppError> {
        match self {
            Store::Firestore(db) => db.delete_workout(id).await,
            Store::Memory(db) => {
                db.delete_workout(id);
                Ok(())
            }
        }
    }

    // ─── Workout Types ───────────────────────────────────────────

    pub async fn list_workout_types(
        &self,
        user_id: &str,
    ) -> Result<Vec<WorkoutTypeDescriptor>, AppError> {
        let mut types = match self {
            Store::Firestore(db) => db.list_workout_types(user_id).await?,
            Store::Memory(db) => db.list_workout_types(user_id),
        };
        // Defaults first, then the user's own, alphabetically
        types.sort_by(|a, b| {
            b.is_default
                .cmp(&a.is_default)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(types)
    }

    pub async fn get_workout_type(
        &self,
        id: &str,
    ) -> Result<Option<WorkoutTypeDescriptor>, AppError> {
        match self {
            Store::Firestore(db) => db.get_workout_type(id).await,
            Store::Memory(db) => Ok(db.get_workout_type(id)),
        }
    }

    pub async fn set_workout_type(
        &self,
        descriptor: &WorkoutTypeDescriptor,
    ) -> Result<(), AppError> {
        match self {
            Store::Firestore(db) => db.set_workout_type(descriptor).await,
            Store::Memory(db) => {
                db.set_workout_type(descriptor);
                Ok(())
            }
        }
    }

    pub async fn set_workout_types(
        &self,
        descriptors: &[WorkoutTypeDescriptor],
    ) -> Result<(), AppError> {
        match self {
            Store::Firestore(db) => db.set_workout_types(descriptors).await,
            Store::Memory(db) => {
                descriptors.iter().for_each(|d| db.set_workout_type(d));
                Ok(())
            }
        }
    }

    pub async fn delete_workout_type(&self, id: &str) -> Result<(), AppError> {
        match self {
            Store::Firestore(db) => db.delete_workout_type(id).await,
            Store::Memory(db) => {
                db.delete_workout_type(id);
                Ok(())
            }
        }
    }

    // ─── Weights ─────────────────────────────────────────────────

    pub async fn list_weights(&self, user_id: &str) -> Result<Vec<WeightEntry>, AppError> {
        match self {
            Store::Firestore(db) => db.list_weights(user_id).await,
            Store::Memory(db) => Ok(db.list_weights(user_id)),
        }
    }

    pub async fn get_weight(&self, user_id: &str, id: &str) -> Result<Option<WeightEntry>, AppError> {
        match self {
            Store::Firestore(db) => db.get_weight(user_id, id).await,
            Store::Memory(db) => Ok(db.get_weight(user_id, id)),
        }
    }

    /// Create a weight document. Returns `false` if its id is already taken.
    pub async fn insert_weight(&self, entry: &WeightEntry) -> Result<bool, AppError> {
        match self {
            Store::Firestore(db) => db.insert_weight(entry).await,
            Store::Memory(db) => Ok(db.insert_weight(entry)),
        }
    }

    pub async fn set_weight(&self, entry: &WeightEntry) -> Result<(), AppError> {
        match self {
            Store::Firestore(db) => db.set_weight(entry).await,
            Store::Memory(db) => {
                db.set_weight(entry);
                Ok(())
            }
        }
    }

    pub async fn delete_weight(&self, id: &str) -> Result<(), AppError> {
        match self {
            Store::Firestore(db) => db.delete_weight(id).await,
            Store::Memory(db) => {
                db.delete_weight(id);
                Ok(())
            }
        }
    }
}
