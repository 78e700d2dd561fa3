// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Body-weight entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored weight entry. At most one exists per user per calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Document ID (UUID v4)
    pub id: String,
    /// Owning account
    pub user_id: String,
    /// Weight in kilograms
    pub weight: f64,
    pub date: NaiveDate,
    pub created_at: String,
}

/// Request body for recording a weight.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeightDraft {
    #[validate(custom(function = "crate::models::validate_supported_date"))]
    pub date: NaiveDate,
    #[validate(range(min = 20.0, max = 300.0))]
    pub weight: f64,
}
