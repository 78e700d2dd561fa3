// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout type routes. Defaults are listed for everyone but only
//! user-defined types can be changed.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{WorkoutTypeDescriptor, WorkoutTypeDraft};
use crate::services::WorkoutTypeService;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/workout-types",
            get(list_workout_types).post(create_workout_type),
        )
        .route(
            "/api/workout-types/{id}",
            put(update_workout_type).delete(delete_workout_type),
        )
}

async fn list_workout_types(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<WorkoutTypeDescriptor>>> {
    let types = WorkoutTypeService::new(state.db.clone())
        .list(&user.user_id)
        .await?;
    Ok(Json(types))
}

async fn create_workout_type(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(draft): Json<WorkoutTypeDraft>,
) -> Result<(StatusCode, Json<WorkoutTypeDescriptor>)> {
    let descriptor = WorkoutTypeService::new(state.db.clone())
        .create(&user.user_id, draft)
        .await?;
    Ok((StatusCode::CREATED, Json(descriptor)))
}

async fn update_workout_type(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(draft): Json<WorkoutTypeDraft>,
) -> Result<Json<WorkoutTypeDescriptor>> {
    let descriptor = WorkoutTypeService::new(state.db.clone())
        .update(&user.user_id, &id, draft)
        .await?;
    Ok(Json(descriptor))
}

async fn delete_workout_type(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    WorkoutTypeService::new(state.db.clone())
        .delete(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
