// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tá Pago API Server
//!
//! Logs workouts, exercises and body weight, and serves the statistics
//! and calendar views computed from them.

use std::sync::Arc;
use tapago_tracker::{
    config::{Config, StorageBackend},
    db::{FirestoreDb, Store},
    services::seed_default_types,
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        backend = config.storage_backend.as_str(),
        utc_offset_minutes = config.utc_offset_minutes,
        "Starting Tá Pago API"
    );

    let db = match config.storage_backend {
        StorageBackend::Firestore => Store::Firestore(
            FirestoreDb::new(&config.gcp_project_id)
                .await
                .expect("Failed to connect to Firestore"),
        ),
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Store::memory()
        }
    };

    // Memory stores always start empty, so they always need the defaults.
    if config.seed_on_start || config.storage_backend == StorageBackend::Memory {
        seed_default_types(&db)
            .await
            .expect("Failed to seed default workout types");
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
    });

    // Build router
    let app = tapago_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tapago_tracker=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
