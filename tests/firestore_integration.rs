// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running
//! (`FIRESTORE_EMULATOR_HOST`). They are skipped otherwise.
//!
//! Every test uses a fresh user id, so runs never collide.

use chrono::NaiveDate;
use tapago_tracker::db::Store;
use tapago_tracker::models::{WeightDraft, WorkoutDraft};
use tapago_tracker::services::{seed_default_types, WeightService, WorkoutService};

mod common;
use common::test_db;

/// Generate a unique user ID for test isolation.
fn unique_user_id() -> String {
    format!("it-{}", uuid::Uuid::new_v4())
}

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn workout(date: &str, custom_type: &str) -> WorkoutDraft {
    WorkoutDraft {
        date: d(date),
        type_id: None,
        custom_type: Some(custom_type.to_string()),
        notes: None,
        exercises: vec![],
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// WORKOUT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_workout_roundtrip_and_date_lookup() {
    require_emulator!();

    let db = Store::Firestore(test_db().await);
    let user_id = unique_user_id();

    let saved = db.find_workout_by_date(&user_id, d("2024-01-01")).await.unwrap();
    assert!(saved.is_none(), "No workout should exist before creation");

    let service = WorkoutService::new(db.clone());
    let outcome = service
        .save(&user_id, workout("2024-01-01", "Corrida"), false)
        .await
        .unwrap();
    assert!(outcome.created);

    let fetched = db
        .find_workout_by_date(&user_id, d("2024-01-01"))
        .await
        .unwrap()
        .expect("workout should be found by date");
    assert_eq!(fetched.id, outcome.record.id);
    assert_eq!(fetched.custom_type.as_deref(), Some("Corrida"));

    // Other users never see it
    let other = db.get_workout("someone-else", &fetched.id).await.unwrap();
    assert!(other.is_none());
}

#[tokio::test]
async fn test_same_date_stays_unique() {
    require_emulator!();

    let db = Store::Firestore(test_db().await);
    let user_id = unique_user_id();
    let service = WorkoutService::new(db.clone());

    service
        .save(&user_id, workout("2024-01-01", "Corrida"), false)
        .await
        .unwrap();
    let second = service
        .save(&user_id, workout("2024-01-01", "Natação"), false)
        .await
        .unwrap();
    assert!(!second.created);

    let all = service.list(&user_id).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].custom_type.as_deref(), Some("Natação"));

    service.delete(&user_id, &all[0].id).await.unwrap();
    assert!(service.list(&user_id).await.unwrap().is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// WORKOUT TYPE TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_seeding_is_idempotent() {
    require_emulator!();

    let db = Store::Firestore(test_db().await);
    let written = seed_default_types(&db).await.unwrap();
    seed_default_types(&db).await.unwrap();

    assert_eq!(db.ping().await.unwrap(), written);
    let visible = db.list_workout_types(&unique_user_id()).await.unwrap();
    assert_eq!(visible.len(), written);
}

// ═══════════════════════════════════════════════════════════════════════════
// WEIGHT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_weight_upsert_by_date() {
    require_emulator!();

    let db = Store::Firestore(test_db().await);
    let user_id = unique_user_id();
    let service = WeightService::new(db);

    let draft = |weight| WeightDraft {
        date: d("2024-01-01"),
        weight,
    };
    let (first, created) = service.save(&user_id, draft(70.0)).await.unwrap();
    assert!(created);
    let (second, created) = service.save(&user_id, draft(69.0)).await.unwrap();
    assert!(!created);
    assert_eq!(first.id, second.id);

    let entries = service.list(&user_id).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].weight, 69.0);
}
