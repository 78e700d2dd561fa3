// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reference data: the default workout types.

use crate::db::Store;
use crate::error::Result;
use crate::models::{ExerciseTemplate, WorkoutTypeDescriptor};

/// (id, name, icon, color, exercises as (name, sets, reps))
type DefaultType = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [(&'static str, u32, &'static str)],
);

const DEFAULT_TYPES: &[DefaultType] = &[
    (
        "default-peito",
        "Peito",
        "💪",
        "#EF4444",
        &[
            ("Supino reto", 4, "8-12"),
            ("Supino inclinado com halteres", 3, "10-12"),
            ("Crucifixo", 3, "12-15"),
        ],
    ),
    (
        "default-costas",
        "Costas",
        "🚣",
        "#3B82F6",
        &[
            ("Puxada frontal", 4, "8-12"),
            ("Remada curvada", 3, "10-12"),
            ("Remada baixa", 3, "12"),
        ],
    ),
    (
        "default-pernas",
        "Pernas",
        "🦵",
        "#F59E0B",
        &[
            ("Agachamento livre", 4, "8-10"),
            ("Leg press", 3, "10-12"),
            ("Cadeira extensora", 3, "12-15"),
            ("Mesa flexora", 3, "12-15"),
        ],
    ),
    (
        "default-ombros",
        "Ombros",
        "🏋️",
        "#EC4899",
        &[
            ("Desenvolvimento com halteres", 4, "8-12"),
            ("Elevação lateral", 3, "12-15"),
        ],
    ),
    (
        "default-bracos",
        "Braços",
        "🦾",
        "#14B8A6",
        &[
            ("Rosca direta", 3, "10-12"),
            ("Tríceps corda", 3, "10-12"),
        ],
    ),
    (
        "default-cardio",
        "Cardio",
        "🏃",
        "#22C55E",
        &[("Esteira", 1, "30 min")],
    ),
    (
        "default-abdomen",
        "Abdômen",
        "🔥",
        "#F97316",
        &[("Prancha", 3, "45s"), ("Abdominal supra", 3, "20")],
    ),
];

/// The fixed default workout types.
pub fn default_workout_types() -> Vec<WorkoutTypeDescriptor> {
    DEFAULT_TYPES
        .iter()
        .map(|(id, name, icon, color, exercises)| WorkoutTypeDescriptor {
            id: id.to_string(),
            user_id: None,
            is_default: true,
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            exercises: exercises
                .iter()
                .map(|(name, sets, reps)| ExerciseTemplate {
                    name: name.to_string(),
                    sets: *sets,
                    reps: reps.to_string(),
                })
                .collect(),
        })
        .collect()
}

/// Write the default workout types. Safe to repeat: ids are fixed.
///
/// Returns the number of descriptors written.
pub async fn seed_default_types(db: &Store) -> Result<usize> {
    let types = default_workout_types();
    db.set_workout_types(&types).await?;
    tracing::info!(
        count = types.len(),
        backend = db.backend_name(),
        "Seeded default workout types"
    );
    Ok(types.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::workout_type::is_color_token;
    use std::collections::HashSet;

    #[test]
    fn test_defaults_are_well_formed() {
        let types = default_workout_types();
        let ids: HashSet<&str> = types.iter().map(|t| t.id.as_str()).collect();

        assert_eq!(ids.len(), types.len());
        assert!(types.iter().all(|t| t.is_default && t.user_id.is_none()));
        assert!(types.iter().all(|t| is_color_token(&t.color)));
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let db = Store::memory();
        let first = seed_default_types(&db).await.unwrap();
        let second = seed_default_types(&db).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(db.ping().await.unwrap(), first);
    }
}
