// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Store check and seeding endpoint tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use std::sync::Arc;
use tapago_tracker::config::Config;
use tapago_tracker::db::Store;
use tapago_tracker::routes::create_router;
use tapago_tracker::routes::seed::SEED_TOKEN_HEADER;
use tapago_tracker::AppState;
use tower::ServiceExt;

mod common;

async fn post_seed(app: &axum::Router, token: Option<&str>) -> StatusCode {
    let mut builder = Request::builder().method("POST").uri("/seed");
    if let Some(token) = token {
        builder = builder.header(SEED_TOKEN_HEADER, token);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

async fn check_store(app: &axum::Router) -> serde_json::Value {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_seed_requires_token() {
    let (app, _) = common::create_test_app_with(Store::memory());

    assert_eq!(post_seed(&app, None).await, StatusCode::UNAUTHORIZED);
    assert_eq!(post_seed(&app, Some("wrong")).await, StatusCode::UNAUTHORIZED);
    assert_eq!(check_store(&app).await["workout_types"], 0);
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let (app, state) = common::create_test_app_with(Store::memory());
    let token = state.config.seed_token.clone().unwrap();

    assert_eq!(post_seed(&app, Some(&token)).await, StatusCode::OK);
    let first = check_store(&app).await["workout_types"].clone();
    assert_eq!(post_seed(&app, Some(&token)).await, StatusCode::OK);
    let second = check_store(&app).await;

    assert_eq!(second["workout_types"], first);
    assert_eq!(second["backend"], "memory");
    assert_eq!(second["status"], "ok");
}

#[tokio::test]
async fn test_seed_disabled_without_configured_token() {
    let config = Config {
        seed_token: None,
        ..Config::test_default()
    };
    let app = create_router(Arc::new(AppState {
        config,
        db: Store::memory(),
    }));

    assert_eq!(
        post_seed(&app, Some("test_seed_token")).await,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_store_check_offline() {
    let (app, _) = common::create_test_app_with(common::test_db_offline());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
