// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public operational routes: store check and default-type seeding.
//!
//! `/seed` is guarded by a shared token in the `x-seed-token` header and
//! does not exist at all unless `SEED_TOKEN` is configured.

use crate::error::{AppError, Result};
use crate::services::seed_default_types;
use crate::AppState;
use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use subtle::ConstantTimeEq;

pub const SEED_TOKEN_HEADER: &str = "x-seed-token";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/test", get(check_store))
        .route("/seed", post(seed))
}

#[derive(Serialize)]
pub struct StoreCheckResponse {
    pub status: String,
    pub backend: String,
    pub workout_types: usize,
}

/// Round-trip to the store and report how many default types it holds.
async fn check_store(State(state): State<Arc<AppState>>) -> Result<Json<StoreCheckResponse>> {
    let workout_types = state.db.ping().await?;
    Ok(Json(StoreCheckResponse {
        status: "ok".to_string(),
        backend: state.db.backend_name().to_string(),
        workout_types,
    }))
}

#[derive(Serialize)]
pub struct SeedResponse {
    pub seeded: usize,
}

async fn seed(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Result<Json<SeedResponse>> {
    let expected = state
        .config
        .seed_token
        .as_deref()
        .ok_or_else(|| AppError::NotFound("/seed".to_string()))?;

    let provided = headers
        .get(SEED_TOKEN_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    if !bool::from(provided.as_bytes().ct_eq(expected.as_bytes())) {
        tracing::warn!("Rejected seed request with bad token");
        return Err(AppError::Unauthorized);
    }

    let seeded = seed_default_types(&state.db).await?;
    Ok(Json(SeedResponse { seeded }))
}
