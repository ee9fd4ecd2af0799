//! Default workout catalog.
//!
//! This module provides the built-in weekly training plan: four training
//! days plus one active-recovery day. The catalog is seeded once per
//! process; sessions never mutate it.

use crate::types::*;
use once_cell::sync::Lazy;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// The complete catalog of seeded workouts
#[derive(Clone, Debug)]
pub struct Catalog {
    pub workouts: Vec<Workout>,
}

impl Catalog {
    /// Look up a workout by id
    pub fn workout(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for workout in &self.workouts {
            if workout.id.is_empty() {
                errors.push("Workout has empty ID".to_string());
            }
            if workout.name.is_empty() {
                errors.push(format!("Workout '{}' has empty name", workout.id));
            }
            if workout.exercises.is_empty() {
                errors.push(format!("Workout '{}' has no exercises", workout.id));
            }
            let duplicates = self
                .workouts
                .iter()
                .filter(|w| w.id == workout.id)
                .count();
            if duplicates > 1 {
                errors.push(format!("Duplicate workout ID '{}'", workout.id));
            }

            for exercise in &workout.exercises {
                if exercise.id.is_empty() {
                    errors.push(format!(
                        "Workout '{}' has an exercise with empty ID",
                        workout.id
                    ));
                }
                if exercise.sets.is_empty() {
                    errors.push(format!(
                        "Exercise '{}' in workout '{}' has no sets",
                        exercise.id, workout.id
                    ));
                }
                let ex_duplicates = workout
                    .exercises
                    .iter()
                    .filter(|e| e.id == exercise.id)
                    .count();
                if ex_duplicates > 1 {
                    errors.push(format!(
                        "Duplicate exercise ID '{}' in workout '{}'",
                        exercise.id, workout.id
                    ));
                }
            }
        }

        errors
    }
}

/// Get a reference to the cached default catalog
///
/// This function returns a reference to the pre-built catalog, avoiding
/// the overhead of rebuilding the full set tables on every operation.
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with the built-in weekly plan
///
/// **Note**: For production use, prefer `default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn rep_set(id: &str, reps: u32, weight: u32, notes: &str) -> Set {
    Set {
        id: id.into(),
        kind: SetKind::Reps { reps, weight },
        completed: false,
        notes: if notes.is_empty() {
            None
        } else {
            Some(notes.into())
        },
    }
}

fn timed_set(id: &str, duration_seconds: u32, notes: &str) -> Set {
    Set {
        id: id.into(),
        kind: SetKind::Timed { duration_seconds },
        completed: false,
        notes: if notes.is_empty() {
            None
        } else {
            Some(notes.into())
        },
    }
}

fn exercise(
    id: &str,
    name: &str,
    description: &str,
    equipment: Equipment,
    sets: Vec<Set>,
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        equipment,
        sets,
    }
}

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> Catalog {
    let mut workouts = Vec::new();

    // ========================================================================
    // Upper Body Push (Monday)
    // ========================================================================

    workouts.push(Workout {
        id: "upper-push".into(),
        name: "Upper Body Push".into(),
        description: "Focus on chest, shoulders, and triceps".into(),
        duration_seconds: 3600,
        calories_burned: 350,
        exercises: vec![
            exercise(
                "push-warmup",
                "Warm-Up: Dynamic Mobility",
                "Dynamic stretches to warm up the upper body",
                Equipment::None,
                vec![timed_set(
                    "push-warmup-1",
                    300,
                    "Arm circles, shoulder rolls, pushup position planks, etc.",
                )],
            ),
            exercise(
                "pushups",
                "Push-Ups",
                "Standard push-ups with proper form",
                Equipment::BodyWeight,
                vec![
                    rep_set("pushups-1", 12, 0, "Chest to ground, full lockout"),
                    rep_set("pushups-2", 10, 0, "Chest to ground, full lockout"),
                    rep_set("pushups-3", 8, 0, "Chest to ground, full lockout"),
                ],
            ),
            exercise(
                "weighted-pushups",
                "Weighted Push-Ups",
                "Push-ups with weight vest for added resistance",
                Equipment::WeightVest30,
                vec![
                    rep_set(
                        "weighted-pushups-1",
                        8,
                        30,
                        "If too difficult, use weight for partial set",
                    ),
                    rep_set("weighted-pushups-2", 8, 30, "Rest 90 seconds between sets"),
                ],
            ),
            exercise(
                "overhead-press",
                "Dumbbell Overhead Press",
                "Press weights overhead while standing",
                Equipment::Dumbbells25,
                vec![
                    rep_set("overhead-press-1", 10, 25, "Press directly overhead"),
                    rep_set("overhead-press-2", 10, 25, "Rest 60-90 seconds between sets"),
                    rep_set("overhead-press-3", 8, 25, "Maintain core stability"),
                ],
            ),
            exercise(
                "lateral-raises",
                "Dumbbell Lateral Raises",
                "Raise weights to sides to target medial deltoids",
                Equipment::Dumbbells25,
                vec![
                    rep_set("lateral-raises-1", 12, 25, "Raise to shoulder height"),
                    rep_set("lateral-raises-2", 12, 25, "Keep slight bend in elbows"),
                    rep_set("lateral-raises-3", 10, 25, "Control the movement"),
                ],
            ),
            exercise(
                "diamond-pushups",
                "Diamond Push-Ups",
                "Push-ups with hands close together forming a diamond shape",
                Equipment::BodyWeight,
                vec![
                    rep_set("diamond-pushups-1", 10, 0, "Keep elbows close to body"),
                    rep_set("diamond-pushups-2", 8, 0, "Focus on triceps"),
                ],
            ),
            exercise(
                "tricep-extensions",
                "Dumbbell Tricep Extensions",
                "Overhead tricep extensions with dumbbell",
                Equipment::Dumbbell25,
                vec![
                    rep_set("tricep-extensions-1", 12, 25, "Hold with both hands"),
                    rep_set("tricep-extensions-2", 10, 25, "Keep elbows pointing up"),
                ],
            ),
        ],
    });

    // ========================================================================
    // Lower Body (Tuesday)
    // ========================================================================

    workouts.push(Workout {
        id: "lower-body".into(),
        name: "Lower Body".into(),
        description: "Focus on quads, glutes, and hamstrings".into(),
        duration_seconds: 3000,
        calories_burned: 400,
        exercises: vec![
            exercise(
                "lower-warmup",
                "Warm-Up: Dynamic Mobility",
                "Dynamic stretches to warm up the lower body",
                Equipment::None,
                vec![timed_set(
                    "lower-warmup-1",
                    300,
                    "Leg swings, hip circles, bodyweight squats, etc.",
                )],
            ),
            exercise(
                "goblet-squats",
                "Goblet Squats",
                "Squat while holding dumbbell at chest height",
                Equipment::Dumbbell25,
                vec![
                    rep_set("goblet-squats-1", 15, 25, "Keep chest up, full depth"),
                    rep_set("goblet-squats-2", 15, 25, "Keep core engaged"),
                    rep_set("goblet-squats-3", 12, 25, "Drive through heels"),
                ],
            ),
            exercise(
                "weighted-lunges",
                "Weighted Lunges",
                "Forward lunges with dumbbells",
                Equipment::Dumbbells25,
                vec![
                    rep_set("weighted-lunges-1", 10, 25, "10 per leg"),
                    rep_set("weighted-lunges-2", 10, 25, "10 per leg"),
                    rep_set("weighted-lunges-3", 8, 25, "8 per leg"),
                ],
            ),
            exercise(
                "romanian-deadlifts",
                "Romanian Deadlifts",
                "Hip-hinge movement targeting hamstrings",
                Equipment::Dumbbells25,
                vec![
                    rep_set("romanian-deadlifts-1", 12, 25, "Keep back flat"),
                    rep_set("romanian-deadlifts-2", 12, 25, "Feel stretch in hamstrings"),
                    rep_set("romanian-deadlifts-3", 10, 25, "Hinge at hips"),
                ],
            ),
            exercise(
                "step-ups",
                "Weighted Step-Ups",
                "Step ups onto bench or stable platform with weights",
                Equipment::Dumbbells25,
                vec![
                    rep_set("step-ups-1", 10, 25, "10 per leg"),
                    rep_set("step-ups-2", 10, 25, "10 per leg"),
                ],
            ),
            exercise(
                "calf-raises",
                "Calf Raises",
                "Standing calf raises with weights",
                Equipment::Dumbbells25,
                vec![
                    rep_set("calf-raises-1", 15, 25, "Full range of motion"),
                    rep_set("calf-raises-2", 15, 25, "Full range of motion"),
                    rep_set("calf-raises-3", 15, 25, "Slow and controlled"),
                ],
            ),
        ],
    });

    // ========================================================================
    // Upper Body Pull (Thursday)
    // ========================================================================

    workouts.push(Workout {
        id: "upper-pull".into(),
        name: "Upper Body Pull".into(),
        description: "Focus on back, biceps, and core".into(),
        duration_seconds: 2700,
        calories_burned: 320,
        exercises: vec![
            exercise(
                "pull-warmup",
                "Warm-Up: Dynamic Mobility",
                "Dynamic stretches to warm up the upper body",
                Equipment::None,
                vec![timed_set(
                    "pull-warmup-1",
                    300,
                    "Arm circles, cat-cow, thoracic rotations, etc.",
                )],
            ),
            exercise(
                "dumbbell-rows",
                "Dumbbell Rows",
                "Bent-over dumbbell rows for back strength",
                Equipment::Dumbbells25,
                vec![
                    rep_set("dumbbell-rows-1", 12, 25, "Both arms simultaneously"),
                    rep_set("dumbbell-rows-2", 12, 25, "Squeeze shoulder blades"),
                    rep_set("dumbbell-rows-3", 10, 25, "Keep back flat"),
                ],
            ),
            exercise(
                "superman-hold",
                "Superman Hold",
                "Lying face down, raise arms and legs simultaneously",
                Equipment::BodyWeight,
                vec![
                    timed_set("superman-hold-1", 30, "30-second hold"),
                    timed_set("superman-hold-2", 30, "30-second hold"),
                    timed_set("superman-hold-3", 30, "30-second hold"),
                ],
            ),
            exercise(
                "dumbbell-curls",
                "Dumbbell Curls",
                "Standing dumbbell bicep curls",
                Equipment::Dumbbells25,
                vec![
                    rep_set("dumbbell-curls-1", 10, 25, "Alternating arms"),
                    rep_set("dumbbell-curls-2", 10, 25, "Focus on bicep contraction"),
                    rep_set("dumbbell-curls-3", 8, 25, "Full range of motion"),
                ],
            ),
            exercise(
                "hammer-curls",
                "Dumbbell Hammer Curls",
                "Bicep curls with neutral grip",
                Equipment::Dumbbells25,
                vec![
                    rep_set("hammer-curls-1", 10, 25, "Thumbs facing up"),
                    rep_set(
                        "hammer-curls-2",
                        10,
                        25,
                        "Targets brachialis and brachioradialis",
                    ),
                ],
            ),
            exercise(
                "plank",
                "Plank",
                "Core stabilization exercise",
                Equipment::BodyWeight,
                vec![
                    timed_set("plank-1", 60, "60-second hold"),
                    timed_set("plank-2", 45, "45-second hold"),
                    timed_set("plank-3", 30, "30-second hold"),
                ],
            ),
            exercise(
                "russian-twists",
                "Russian Twists",
                "Seated twisting motion for obliques",
                Equipment::Dumbbell25,
                vec![
                    rep_set("russian-twists-1", 20, 25, "10 per side"),
                    rep_set("russian-twists-2", 20, 25, "10 per side"),
                ],
            ),
        ],
    });

    // ========================================================================
    // Full Body + Conditioning (Friday)
    // ========================================================================

    workouts.push(Workout {
        id: "full-body".into(),
        name: "Full Body + Conditioning".into(),
        description: "Full body workout with conditioning elements".into(),
        duration_seconds: 3600,
        calories_burned: 450,
        exercises: vec![
            exercise(
                "full-warmup",
                "Warm-Up: Dynamic Mobility",
                "Dynamic stretches for full body",
                Equipment::None,
                vec![timed_set(
                    "full-warmup-1",
                    300,
                    "Jumping jacks, high knees, arm circles, etc.",
                )],
            ),
            exercise(
                "thrusters",
                "Thrusters",
                "Squat to overhead press combination",
                Equipment::Dumbbells25,
                vec![
                    rep_set("thrusters-1", 12, 25, "Squat deep, press overhead"),
                    rep_set("thrusters-2", 12, 25, "Explosive movement"),
                    rep_set("thrusters-3", 10, 25, "Full range of motion"),
                ],
            ),
            exercise(
                "renegade-rows",
                "Renegade Rows",
                "Plank position with rowing motion",
                Equipment::Dumbbells25,
                vec![
                    rep_set("renegade-rows-1", 16, 25, "8 per arm"),
                    rep_set("renegade-rows-2", 16, 25, "8 per arm"),
                ],
            ),
            exercise(
                "weighted-burpees",
                "Weighted Burpees",
                "Burpees with weight vest",
                Equipment::WeightVest30,
                vec![
                    rep_set("weighted-burpees-1", 10, 30, "Full burpee with jump"),
                    rep_set("weighted-burpees-2", 8, 30, "Full burpee with jump"),
                ],
            ),
            exercise(
                "walking-lunges",
                "Dumbbell Walking Lunges",
                "Walking lunges with dumbbells",
                Equipment::Dumbbells25,
                vec![
                    rep_set("walking-lunges-1", 20, 25, "10 per leg"),
                    rep_set("walking-lunges-2", 20, 25, "10 per leg"),
                ],
            ),
            exercise(
                "dumbbell-swings",
                "HIIT: Dumbbell Swing",
                "High-intensity kettlebell swing alternative",
                Equipment::Dumbbell25,
                vec![
                    rep_set("dumbbell-swings-1", 15, 25, "Use kettlebell swing form"),
                    rep_set("dumbbell-swings-2", 15, 25, "Explosive hip hinge"),
                    rep_set("dumbbell-swings-3", 15, 25, "Control the movement"),
                ],
            ),
            exercise(
                "mountain-climbers",
                "Mountain Climbers",
                "High-intensity core exercise",
                Equipment::BodyWeight,
                vec![
                    rep_set("mountain-climbers-1", 30, 0, "15 per leg, fast pace"),
                    rep_set("mountain-climbers-2", 30, 0, "15 per leg, fast pace"),
                ],
            ),
            exercise(
                "tabata-finisher",
                "Finisher: Tabata",
                "4-minute high-intensity interval training",
                Equipment::BodyWeight,
                vec![timed_set(
                    "tabata-finisher-1",
                    240,
                    "20 sec work, 10 sec rest x 8 rounds of bodyweight squats or push-ups",
                )],
            ),
        ],
    });

    // ========================================================================
    // Rest Day (Sunday, Wednesday, Saturday)
    // ========================================================================

    workouts.push(Workout {
        id: "rest-day".into(),
        name: "Rest Day".into(),
        description: "Active recovery day - light activity only".into(),
        duration_seconds: 1200,
        calories_burned: 100,
        exercises: vec![
            exercise(
                "light-walking",
                "Light Walking",
                "Easy pace walking for active recovery",
                Equipment::None,
                vec![timed_set(
                    "light-walking-1",
                    900,
                    "15 minutes at comfortable pace",
                )],
            ),
            exercise(
                "stretching",
                "Stretching Routine",
                "Full body stretching sequence",
                Equipment::None,
                vec![timed_set(
                    "stretching-1",
                    300,
                    "5 minutes of total body stretching",
                )],
            ),
        ],
    });

    Catalog { workouts }
}
