// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tapago_tracker::config::Config;
use tapago_tracker::db::{FirestoreDb, Store};
use tapago_tracker::middleware::auth::create_jwt;
use tapago_tracker::routes::create_router;
use tapago_tracker::services::seed_default_types;
use tapago_tracker::AppState;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test database connection.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a mock Firestore connection (offline). Every operation fails.
#[allow(dead_code)]
pub fn test_db_offline() -> Store {
    Store::Firestore(FirestoreDb::new_mock())
}

/// Create a test app over a seeded in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub async fn create_test_app() -> (Router, Arc<AppState>) {
    let db = Store::memory();
    seed_default_types(&db)
        .await
        .expect("Failed to seed memory store");
    create_test_app_with(db)
}

/// Create a test app over the given store.
#[allow(dead_code)]
pub fn create_test_app_with(db: Store) -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::test_default(),
        db,
    });
    (create_router(state.clone()), state)
}

/// Session token for `user_id`, signed with the test key.
#[allow(dead_code)]
pub fn token_for(state: &AppState, user_id: &str) -> String {
    create_jwt(user_id, &state.config.jwt_signing_key).expect("Failed to sign test token")
}

/// Send an authenticated request with an optional JSON body.
/// Returns the status and the parsed body (`Null` when empty).
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    token: &str,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
