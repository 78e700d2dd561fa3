// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout and exercise routes.

use crate::analytics::filter_by_range;
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{ExerciseDraft, WorkoutDraft, WorkoutRecord};
use crate::routes::api::PeriodQuery;
use crate::services::WorkoutService;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", get(list_workouts).post(save_workout))
        .route(
            "/api/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .route("/api/workouts/{id}/exercises", post(add_exercise))
        .route(
            "/api/workouts/{id}/exercises/{order}",
            put(update_exercise).delete(remove_exercise),
        )
        .route(
            "/api/workouts/{id}/exercises/{order}/move",
            post(move_exercise),
        )
}

/// Workouts, newest first. With `?period=` only those in the period.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<WorkoutRecord>>> {
    let workouts = WorkoutService::new(state.db.clone())
        .list(&user.user_id)
        .await?;

    if query.period.is_none() {
        return Ok(Json(workouts));
    }

    let (period, reference) = query.resolve(state.today())?;
    let selected = filter_by_range(&workouts, period.range(reference))
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(selected))
}

#[derive(Debug, Default, Deserialize)]
struct SaveQuery {
    #[serde(default)]
    from_template: bool,
}

/// Log a workout. Saving onto a date that already has one replaces it.
async fn save_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<SaveQuery>,
    Json(draft): Json<WorkoutDraft>,
) -> Result<(StatusCode, Json<WorkoutRecord>)> {
    let outcome = WorkoutService::new(state.db.clone())
        .save(&user.user_id, draft, query.from_template)
        .await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.record)))
}

async fn get_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<WorkoutRecord>> {
    let record = WorkoutService::new(state.db.clone())
        .get(&user.user_id, &id)
        .await?;
    Ok(Json(record))
}

async fn update_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(draft): Json<WorkoutDraft>,
) -> Result<Json<WorkoutRecord>> {
    let record = WorkoutService::new(state.db.clone())
        .update(&user.user_id, &id, draft)
        .await?;
    Ok(Json(record))
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    WorkoutService::new(state.db.clone())
        .delete(&user.user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ─── Exercises ───────────────────────────────────────────────

async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    Json(draft): Json<ExerciseDraft>,
) -> Result<(StatusCode, Json<WorkoutRecord>)> {
    let record = WorkoutService::new(state.db.clone())
        .add_exercise(&user.user_id, &id, draft)
        .await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn update_exercise(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((id, order)): Path<(String, u32)>,
    Json(draft): Json<ExerciseDraft>,
) -> Result<Json<WorkoutRecord>> {
    let record = WorkoutService::new(state.db.clone())
        .update_exercise(&user.user_id, &id, order, draft)
        .await?;
    Ok(Json(record))
}

async fn remove_exercise(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((id, order)): Path<(String, u32)>,
) -> Result<Json<WorkoutRecord>> {
    let record = WorkoutService::new(state.db.clone())
        .remove_exercise(&user.user_id, &id, order)
        .await?;
    Ok(Json(record))
}

#[derive(Debug, Deserialize)]
struct MoveRequest {
    to: u32,
}

async fn move_exercise(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((id, order)): Path<(String, u32)>,
    Json(body): Json<MoveRequest>,
) -> Result<Json<WorkoutRecord>> {
    let record = WorkoutService::new(state.db.clone())
        .move_exercise(&user.user_id, &id, order, body.to)
        .await?;
    Ok(Json(record))
}
