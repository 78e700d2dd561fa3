// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-local store used for tests and local development.

use dashmap::{mapref::entry::Entry, DashMap};
use std::sync::Arc;

use crate::models::{WeightEntry, WorkoutRecord, WorkoutTypeDescriptor};

/// In-memory document store keyed by document ID.
#[derive(Clone, Default)]
pub struct MemoryDb {
    workouts: Arc<DashMap<String, WorkoutRecord>>,
    workout_types: Arc<DashMap<String, WorkoutTypeDescriptor>>,
    weights: Arc<DashMap<String, WeightEntry>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Workouts ────────────────────────────────────────────────

    pub fn list_workouts(&self, user_id: &str) -> Vec<WorkoutRecord> {
        self.workouts
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn get_workout(&self, user_id: &str, id: &str) -> Option<WorkoutRecord> {
        self.workouts
            .get(id)
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
    }

    /// Insert unless `record.id` is taken; the check and write hold one shard lock.
    pub fn insert_workout(&self, record: &WorkoutRecord) -> bool {
        insert_new(&self.workouts, &record.id, record)
    }

    pub fn set_workout(&self, record: &WorkoutRecord) {
        self.workouts.insert(record.id.clone(), record.clone());
    }

    pub fn delete_workout(&self, id: &str) {
        self.workouts.remove(id);
    }

    // ─── Workout Types ───────────────────────────────────────────

    pub fn list_workout_types(&self, user_id: &str) -> Vec<WorkoutTypeDescriptor> {
        self.workout_types
            .iter()
            .filter(|entry| entry.is_visible_to(user_id))
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn get_workout_type(&self, id: &str) -> Option<WorkoutTypeDescriptor> {
        self.workout_types.get(id).map(|entry| entry.value().clone())
    }

    pub fn set_workout_type(&self, descriptor: &WorkoutTypeDescriptor) {
        self.workout_types
            .insert(descriptor.id.clone(), descriptor.clone());
    }

    pub fn delete_workout_type(&self, id: &str) {
        self.workout_types.remove(id);
    }

    pub fn count_default_types(&self) -> usize {
        self.workout_types
            .iter()
            .filter(|entry| entry.is_default)
            .count()
    }

    // ─── Weights ─────────────────────────────────────────────────

    pub fn list_weights(&self, user_id: &str) -> Vec<WeightEntry> {
        self.weights
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn get_weight(&self, user_id: &str, id: &str) -> Option<WeightEntry> {
        self.weights
            .get(id)
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
    }

    pub fn insert_weight(&self, entry: &WeightEntry) -> bool {
        insert_new(&self.weights, &entry.id, entry)
    }

    pub fn set_weight(&self, entry: &WeightEntry) {
        self.weights.insert(entry.id.clone(), entry.clone());
    }

    pub fn delete_weight(&self, id: &str) {
        self.weights.remove(id);
    }
}

fn insert_new<T: Clone>(map: &DashMap<String, T>, id: &str, value: &T) -> bool {
    match map.entry(id.to_string()) {
        Entry::Vacant(slot) => {
            slot.insert(value.clone());
            true
        }
        Entry::Occupied(_) => false,
    }
}
