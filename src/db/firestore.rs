// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Workouts (one document per user per day, exercises embedded)
//! - Workout types (seeded defaults and user-defined descriptors)
//! - Weights (one document per user per day)

use firestore::errors::FirestoreError;
use futures_util::{stream, StreamExt};
use serde::{de::DeserializeOwned, Serialize};

use crate::db::collections;
use crate::error::AppError;
use crate::models::{WeightEntry, WorkoutRecord, WorkoutTypeDescriptor};

const MAX_CONCURRENT_DB_OPS: usize = 50;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create an offline client. Every operation returns a database error.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Generic Document Helpers ────────────────────────────────

    async fn get_document<T>(&self, collection: &str, id: &str) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collection)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    async fn set_document<T>(&self, collection: &str, id: &str, object: &T) -> Result<(), AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collection)
            .document_id(id)
            .object(object)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Create a document, failing with `Ok(false)` if `id` already exists.
    async fn create_document<T>(
        &self,
        collection: &str,
        id: &str,
        object: &T,
    ) -> Result<bool, AppError>
    where
        T: Serialize + DeserializeOwned + Sync + Send,
    {
        let result = self
            .get_client()?
            .fluent()
            .insert()
            .into(collection)
            .document_id(id)
            .object(object)
            .execute::<T>()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(FirestoreError::DataConflictError(_)) => {
                tracing::debug!(collection, id, "Document already exists");
                Ok(false)
            }
            Err(e) => Err(AppError::Database(e.to_string())),
        }
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collection)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// All documents in `collection` owned by `user_id`.
    async fn query_by_user<T>(&self, collection: &str, user_id: &str) -> Result<Vec<T>, AppError>
    where
        T: DeserializeOwned + Send,
    {
        self.get_client()?
            .fluent()
            .select()
            .from(collection)
            .filter(|q| q.for_all([q.field("user_id").eq(user_id)]))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Workout Operations ──────────────────────────────────────

    pub async fn list_workouts(&self, user_id: &str) -> Result<Vec<WorkoutRecord>, AppError> {
        self.query_by_user(collections::WORKOUTS, user_id).await
    }

    /// Get a workout, only if it belongs to `user_id`.
    pub async fn get_workout(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<WorkoutRecord>, AppError> {
        let record: Option<WorkoutRecord> = self.get_document(collections::WORKOUTS, id).await?;
        Ok(record.filter(|w| w.user_id == user_id))
    }

    pub async fn insert_workout(&self, record: &WorkoutRecord) -> Result<bool, AppError> {
        self.create_document(collections::WORKOUTS, &record.id, record)
            .await
    }

    /// Create or replace a workout document.
    pub async fn set_workout(&self, record: &WorkoutRecord) -> Result<(), AppError> {
        self.set_document(collections::WORKOUTS, &record.id, record)
            .await
    }

    pub async fn delete_workout(&self, id: &str) -> Result<(), AppError> {
        self.delete_document(collections::WORKOUTS, id).await
    }

    // ─── Workout Type Operations ─────────────────────────────────

    /// Seeded defaults followed by the user's own descriptors.
    pub async fn list_workout_types(
        &self,
        user_id: &str,
    ) -> Result<Vec<WorkoutTypeDescriptor>, AppError> {
        let mut types = self.list_default_types().await?;
        let custom: Vec<WorkoutTypeDescriptor> = self
            .query_by_user(collections::WORKOUT_TYPES, user_id)
            .await?;
        types.extend(custom);
        Ok(types)
    }

    async fn list_default_types(&self) -> Result<Vec<WorkoutTypeDescriptor>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::WORKOUT_TYPES)
            .filter(|q| q.for_all([q.field("is_default").eq(true)]))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    pub async fn get_workout_type(
        &self,
        id: &str,
    ) -> Result<Option<WorkoutTypeDescriptor>, AppError> {
        self.get_document(collections::WORKOUT_TYPES, id).await
    }

    pub async fn set_workout_type(
        &self,
        descriptor: &WorkoutTypeDescriptor,
    ) -> Result<(), AppError> {
        self.set_document(collections::WORKOUT_TYPES, &descriptor.id, descriptor)
            .await
    }

    /// Store several descriptors.
    ///
    /// Uses concurrent writes with a limit to avoid overloading Firestore.
    pub async fn set_workout_types(
        &self,
        descriptors: &[WorkoutTypeDescriptor],
    ) -> Result<(), AppError> {
        let writes: Vec<_> = descriptors
            .iter()
            .map(|descriptor| self.set_workout_type(descriptor))
            .collect();
        stream::iter(writes)
            .buffer_unordered(MAX_CONCURRENT_DB_OPS)
            .collect::<Vec<Result<(), AppError>>>()
            .await
            .into_iter()
            .collect::<Result<Vec<()>, AppError>>()?;

        Ok(())
    }

    pub async fn delete_workout_type(&self, id: &str) -> Result<(), AppError> {
        self.delete_document(collections::WORKOUT_TYPES, id).await
    }

    pub async fn count_default_types(&self) -> Result<usize, AppError> {
        Ok(self.list_default_types().await?.len())
    }

    // ─── Weight Operations ───────────────────────────────────────

    pub async fn list_weights(&self, user_id: &str) -> Result<Vec<WeightEntry>, AppError> {
        self.query_by_user(collections::WEIGHTS, user_id).await
    }

    /// Get a weight entry, only if it belongs to `user_id`.
    pub async fn get_weight(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<Option<WeightEntry>, AppError> {
        let entry: Option<WeightEntry> = self.get_document(collections::WEIGHTS, id).await?;
        Ok(entry.filter(|w| w.user_id == user_id))
    }

    pub async fn insert_weight(&self, entry: &WeightEntry) -> Result<bool, AppError> {
        self.create_document(collections::WEIGHTS, &entry.id, entry)
            .await
    }

    pub async fn set_weight(&self, entry: &WeightEntry) -> Result<(), AppError> {
        self.set_document(collections::WEIGHTS, &entry.id, entry)
            .await
    }

    pub async fn delete_weight(&self, id: &str) -> Result<(), AppError> {
        self.delete_document(collections::WEIGHTS, id).await
    }
}
