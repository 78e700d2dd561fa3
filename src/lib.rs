// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tá Pago: personal workout and body-weight tracker
//!
//! This crate provides the backend API: workout, exercise and weight logging
//! on top of a hosted document store, plus the analytics engine behind the
//! statistics and calendar views.

pub mod analytics;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use chrono::NaiveDate;
use config::Config;
use db::Store;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Store,
}

impl AppState {
    /// Today's date for users, in the configured timezone.
    pub fn today(&self) -> NaiveDate {
        time_utils::today(self.config.utc_offset_minutes)
    }
}
