// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout type descriptors and display-type resolution.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::WorkoutRecord;

/// Label for workouts whose type can no longer be resolved.
pub const FALLBACK_TYPE_NAME: &str = "Outro";
/// Glyph for the fallback bucket.
pub const FALLBACK_TYPE_ICON: &str = "🏅";
/// Color token for the fallback bucket.
pub const FALLBACK_TYPE_COLOR: &str = "#6B7280";
/// Glyph shown for free-text workout labels.
pub const CUSTOM_TYPE_ICON: &str = "✨";
/// Color token shown for free-text workout labels.
pub const CUSTOM_TYPE_COLOR: &str = "#8B5CF6";

/// A configurable workout type (e.g. "Peito", "Cardio").
///
/// Default descriptors are seeded once and shared by every user; they carry
/// no `user_id`. User-defined descriptors are owned by one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTypeDescriptor {
    /// Document ID
    pub id: String,
    /// Owner, absent for the seeded defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Whether this descriptor belongs to the seeded default set
    #[serde(default)]
    pub is_default: bool,
    /// Display name
    pub name: String,
    /// Display glyph
    pub icon: String,
    /// Display color token (`#RRGGBB`)
    pub color: String,
    /// Suggested exercises, in order
    #[serde(default)]
    pub exercises: Vec<ExerciseTemplate>,
}

impl WorkoutTypeDescriptor {
    /// Whether the given user may see this descriptor.
    pub fn is_visible_to(&self, user_id: &str) -> bool {
        self.is_default || self.user_id.as_deref() == Some(user_id)
    }
}

/// Exercise suggestion attached to a workout type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ExerciseTemplate {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(range(min = 1, max = 100))]
    pub sets: u32,
    #[validate(length(min = 1, max = 20))]
    pub reps: String,
}

/// Request body for creating or editing a user-defined workout type.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkoutTypeDraft {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(length(min = 1, max = 16))]
    pub icon: String,
    pub color: String,
    #[serde(default)]
    #[validate(nested)]
    pub exercises: Vec<ExerciseTemplate>,
}

/// Check for a `#RRGGBB` color token.
pub fn is_color_token(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// How a workout is labelled on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedType {
    pub name: String,
    pub icon: String,
    pub color: String,
}

/// Resolve the display type of a workout.
///
/// A free-text label wins over a descriptor reference. A reference to a
/// descriptor that no longer exists resolves to the fallback "Outro".
pub fn resolve_type(record: &WorkoutRecord, types: &[WorkoutTypeDescriptor]) -> ResolvedType {
    if let Some(custom) = record.custom_label() {
        return ResolvedType {
            name: custom.to_string(),
            icon: CUSTOM_TYPE_ICON.to_string(),
            color: CUSTOM_TYPE_COLOR.to_string(),
        };
    }

    record
        .type_id
        .as_deref()
        .and_then(|id| types.iter().find(|t| t.id == id))
        .map(|t| ResolvedType {
            name: t.name.clone(),
            icon: t.icon.clone(),
            color: t.color.clone(),
        })
        .unwrap_or_else(|| ResolvedType {
            name: FALLBACK_TYPE_NAME.to_string(),
            icon: FALLBACK_TYPE_ICON.to_string(),
            color: FALLBACK_TYPE_COLOR.to_string(),
        })
}
