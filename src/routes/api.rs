// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for authenticated users: profile and analytics views.

use crate::analytics::period::{is_supported_date, MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR};
use crate::analytics::{self, CalendarMonth, Period, StatsReport, WeightSummary};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::services::{WeightService, WorkoutService, WorkoutTypeService};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// API routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/me", get(get_me))
        .route("/api/stats", get(get_stats))
        .route("/api/weights/summary", get(get_weight_summary))
        .route("/api/calendar", get(get_calendar))
}

// ─── User Profile ────────────────────────────────────────────

/// Current user response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserResponse {
    pub user_id: String,
    pub email: Option<String>,
}

/// Get current user identity.
async fn get_me(Extension(user): Extension<AuthUser>) -> Json<UserResponse> {
    Json(UserResponse {
        user_id: user.user_id,
        email: user.email,
    })
}

// ─── Period Queries ──────────────────────────────────────────

/// `?period=&date=` query shared by the analytics endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    pub period: Option<String>,
    pub date: Option<NaiveDate>,
}

impl PeriodQuery {
    /// Parsed period (default month) and reference date (default today).
    pub fn resolve(&self, today: NaiveDate) -> Result<(Period, NaiveDate)> {
        let period = match self.period.as_deref() {
            None | Some("") => Period::default(),
            Some(tag) => tag.parse().map_err(AppError::BadRequest)?,
        };
        let reference = self.date.unwrap_or(today);
        if !is_supported_date(reference) {
            return Err(AppError::BadRequest(format!(
                "Unsupported reference date: {}",
                reference
            )));
        }
        Ok((period, reference))
    }
}

/// Statistics for the selected period.
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<StatsReport>> {
    let today = state.today();
    let (period, reference) = query.resolve(today)?;

    let workouts = WorkoutService::new(state.db.clone())
        .list(&user.user_id)
        .await?;
    let types = WorkoutTypeService::new(state.db.clone())
        .list(&user.user_id)
        .await?;

    let report = analytics::summarize(period, reference, today, &workouts, &types);

    tracing::debug!(
        user_id = %user.user_id,
        period = period.as_str(),
        reference = %reference,
        total_workouts = report.total_workouts,
        "Computed stats"
    );

    Ok(Json(report))
}

/// Weight series and summary for the selected period.
async fn get_weight_summary(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<WeightSummary>> {
    let (period, reference) = query.resolve(state.today())?;
    let entries = WeightService::new(state.db.clone())
        .list(&user.user_id)
        .await?;

    Ok(Json(analytics::summarize_weights(period, reference, &entries)))
}

// ─── Calendar ────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Month grid with one marker per logged workout.
async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarMonth>> {
    let today = state.today();
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month());
    if !(MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&year) {
        return Err(AppError::BadRequest(format!("Unsupported year: {}", year)));
    }

    let workouts = WorkoutService::new(state.db.clone())
        .list(&user.user_id)
        .await?;
    let types = WorkoutTypeService::new(state.db.clone())
        .list(&user.user_id)
        .await?;

    analytics::build_month(year, month, &workouts, &types)
        .map(Json)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid month: {}-{}", year, month)))
}
