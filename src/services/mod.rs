// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod seed;
pub mod weights;
pub mod workout_types;
pub mod workouts;

pub use seed::{default_workout_types, seed_default_types};
pub use weights::WeightService;
pub use workout_types::WorkoutTypeService;
pub use workouts::{SaveOutcome, WorkoutService};
