// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Body-weight routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{WeightDraft, WeightEntry};
use crate::services::WeightService;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/weights", get(list_weights).post(save_weight))
        .route("/api/weights/{id}", delete(delete_weight))
}

/// All weight entries, oldest first.
async fn list_weights(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<WeightEntry>>> {
    let entries = WeightService::new(state.db.clone())
        .list(&user.user_id)
        .await?;
    Ok(Json(entries))
}

/// Record a weight; 201 for a new date, 200 when replacing that day's entry.
async fn save_weight(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(draft): Json<WeightDraft>,
) -> Result<(StatusCode, Json<WeightEntry>)> {
    let (entry, created) = WeightService::new(state.db.clone())
        .save(&user.user_id, draft)
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(entry)))
}

async fn delete_weight(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    WeightService::new(state.db.clone())
        .delete(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
