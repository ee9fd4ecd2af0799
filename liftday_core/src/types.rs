//! Core domain types for the Liftday system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Workouts, exercises and sets
//! - Equipment labels
//! - The user profile
//! - Progress snapshots (forward-compatible stub)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Equipment
// ============================================================================

/// Equipment required by an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    None,
    BodyWeight,
    WeightVest30,
    Dumbbell25,
    Dumbbells25,
    Bench,
    Chair,
    ResistanceBand,
}

impl Equipment {
    /// Human-readable label as shown on the session screen
    pub fn label(&self) -> &'static str {
        match self {
            Equipment::None => "None",
            Equipment::BodyWeight => "Body weight",
            Equipment::WeightVest30 => "Weight vest 30lb",
            Equipment::Dumbbell25 => "25lb dumbbell",
            Equipment::Dumbbells25 => "25lb dumbbells",
            Equipment::Bench => "Bench",
            Equipment::Chair => "Chair",
            Equipment::ResistanceBand => "Resistance band",
        }
    }
}

// ============================================================================
// Sets and Exercises
// ============================================================================

/// What a single set consists of
///
/// A set is either rep-based (with an optional external load in pounds) or
/// duration-based (a timed hold or interval). The two are mutually
/// exclusive, so the distinction is a tagged enum rather than an optional
/// duration field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SetKind {
    /// Rep-based work (weight in pounds, 0 for bodyweight)
    Reps { reps: u32, weight: u32 },
    /// Timed/isometric work measured in seconds
    Timed { duration_seconds: u32 },
}

impl SetKind {
    /// Duration in seconds for timed sets, None for rep-based sets
    pub fn duration_seconds(&self) -> Option<u32> {
        match self {
            SetKind::Timed { duration_seconds } => Some(*duration_seconds),
            SetKind::Reps { .. } => None,
        }
    }
}

/// One unit of work within an exercise
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Set {
    pub id: String,
    pub kind: SetKind,
    pub completed: bool,
    pub notes: Option<String>,
}

/// A named movement within a workout
///
/// Set order is significant: it defines progression through the session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    pub equipment: Equipment,
    pub sets: Vec<Set>,
}

impl Exercise {
    /// True when any set in this exercise is duration-based
    pub fn has_timed_set(&self) -> bool {
        self.sets
            .iter()
            .any(|s| matches!(s.kind, SetKind::Timed { .. }))
    }

    /// Duration of the first timed set, if any
    pub fn first_timed_duration(&self) -> Option<u32> {
        self.sets.iter().find_map(|s| s.kind.duration_seconds())
    }
}

// ============================================================================
// Workouts
// ============================================================================

/// A named ordered collection of exercises
///
/// Workouts are immutable once seeded; an active session works on its own
/// copy of the set data and never writes back.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_seconds: u32,
    pub calories_burned: u32,
    pub exercises: Vec<Exercise>,
}

impl Workout {
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }
}

// ============================================================================
// User Profile
// ============================================================================

/// The user profile
///
/// Height is stored as total inches; display and editing use the
/// feet'inches" form (see `profile::format_height` / `profile::parse_height`).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Body weight in pounds
    pub weight: u32,
    /// Height in total inches
    pub height: u32,
    pub age: u32,
    pub goals: Option<String>,
}

// ============================================================================
// Progress (stub)
// ============================================================================

/// Per-set completion snapshot within a progress record
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SetProgress {
    pub id: String,
    pub reps: u32,
    pub weight: u32,
    pub completed: bool,
}

/// Per-exercise completion snapshot within a progress record
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExerciseProgress {
    pub id: String,
    pub sets: Vec<SetProgress>,
}

/// A recorded workout outcome
///
/// Defined for forward compatibility: no operation currently populates or
/// consumes progress records, but the shape is part of the store contract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Progress {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub workout_id: String,
    pub completed: bool,
    pub exercises: Vec<ExerciseProgress>,
}

impl Progress {
    /// Create an empty progress record for a workout
    pub fn new(workout_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            workout_id: workout_id.into(),
            completed: false,
            exercises: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_kind_duration() {
        let timed = SetKind::Timed {
            duration_seconds: 300,
        };
        let reps = SetKind::Reps { reps: 10, weight: 25 };

        assert_eq!(timed.duration_seconds(), Some(300));
        assert_eq!(reps.duration_seconds(), None);
    }

    #[test]
    fn test_exercise_timed_set_detection() {
        let exercise = Exercise {
            id: "plank".into(),
            name: "Plank".into(),
            description: "Core stabilization exercise".into(),
            equipment: Equipment::BodyWeight,
            sets: vec![
                Set {
                    id: "plank-1".into(),
                    kind: SetKind::Timed {
                        duration_seconds: 60,
                    },
                    completed: false,
                    notes: None,
                },
                Set {
                    id: "plank-2".into(),
                    kind: SetKind::Timed {
                        duration_seconds: 45,
                    },
                    completed: false,
                    notes: None,
                },
            ],
        };

        assert!(exercise.has_timed_set());
        assert_eq!(exercise.first_timed_duration(), Some(60));
    }

    #[test]
    fn test_rep_only_exercise_has_no_timed_duration() {
        let exercise = Exercise {
            id: "pushups".into(),
            name: "Push-Ups".into(),
            description: "Standard push-ups".into(),
            equipment: Equipment::BodyWeight,
            sets: vec![Set {
                id: "pushups-1".into(),
                kind: SetKind::Reps { reps: 12, weight: 0 },
                completed: false,
                notes: None,
            }],
        };

        assert!(!exercise.has_timed_set());
        assert_eq!(exercise.first_timed_duration(), None);
    }

    #[test]
    fn test_equipment_labels() {
        assert_eq!(Equipment::Dumbbells25.label(), "25lb dumbbells");
        assert_eq!(Equipment::WeightVest30.label(), "Weight vest 30lb");
        assert_eq!(Equipment::None.label(), "None");
    }

    #[test]
    fn test_set_kind_serde_roundtrip() {
        let kind = SetKind::Reps { reps: 8, weight: 30 };
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains("\"type\":\"reps\""));

        let parsed: SetKind = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, kind);
    }
}
