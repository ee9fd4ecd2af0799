//! Active workout session engine.
//!
//! An `ActiveSession` is the transient in-progress attempt at a workout.
//! It owns a working copy of the workout's set data (the edit buffer),
//! the current-exercise cursor, and the two countdown timers. Edits never
//! write back to the catalog; finishing or abandoning the session discards
//! the buffer.
//!
//! The engine is single-threaded and event-driven: every operation is a
//! synchronous total function, and the host drives the timers through
//! `tick()` (see the `timer` module).

use crate::error::{Error, Result};
use crate::store::AppStore;
use crate::timer::{Countdown, TickOutcome};
use crate::types::{SetKind, Workout};

/// Fixed rest countdown started whenever a set is marked complete
pub const REST_SECONDS: u32 = 60;

/// Default exercise timer length when an exercise has no timed set
pub const DEFAULT_TIMER_SECONDS: u32 = 60;

/// Editable working copy of one set: reps, weight and completion flag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetEntry {
    pub reps: u32,
    pub weight: u32,
    pub completed: bool,
}

/// Per-exercise session state
///
/// One record per exercise, in workout order, holding the set buffer
/// together with the timer display flag and the custom timer length. This
/// keeps the three per-exercise facts from drifting apart.
#[derive(Clone, Debug)]
pub struct ExerciseState {
    pub exercise_id: String,
    pub sets: Vec<SetEntry>,
    pub timer_visible: bool,
    pub custom_timer_seconds: u32,
}

impl ExerciseState {
    /// True iff every set in the buffer is completed
    ///
    /// An exercise with zero sets is vacuously complete.
    pub fn is_complete(&self) -> bool {
        self.sets.iter().all(|s| s.completed)
    }
}

/// Result of one session tick: both timers advance independently
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionTick {
    pub exercise: TickOutcome,
    pub rest: TickOutcome,
}

/// Outcome of a finish attempt
///
/// Finishing consumes the session; when the gate fails the session is
/// handed back untouched.
#[derive(Debug)]
#[must_use]
pub enum FinishOutcome {
    /// Buffer discarded, store's active workout cleared
    Finished,
    /// User declined the confirmation; state untouched
    Declined(ActiveSession),
    /// Not on the last exercise, or the last exercise is incomplete
    NotReady(ActiveSession),
}

/// The active workout session state machine
#[derive(Clone, Debug)]
pub struct ActiveSession {
    workout_id: String,
    exercise_index: usize,
    exercises: Vec<ExerciseState>,
    exercise_timer: Countdown,
    rest_timer: Countdown,
}

impl ActiveSession {
    /// Start a session for the given workout
    ///
    /// Seeds the edit buffer from the workout's exercises and sets. Timed
    /// sets carry no reps/weight and seed as zeros; the timer is shown by
    /// default only for exercises that have a timed set, with the custom
    /// timer length taken from the first timed set (60 seconds otherwise).
    ///
    /// A workout with no exercises is a precondition violation reported
    /// here rather than a crash later.
    pub fn start(workout: &Workout) -> Result<Self> {
        if workout.exercises.is_empty() {
            return Err(Error::EmptyWorkout(workout.id.clone()));
        }

        let exercises = workout
            .exercises
            .iter()
            .map(|exercise| {
                let sets = exercise
                    .sets
                    .iter()
                    .map(|set| match set.kind {
                        SetKind::Reps { reps, weight } => SetEntry {
                            reps,
                            weight,
                            completed: set.completed,
                        },
                        SetKind::Timed { .. } => SetEntry {
                            reps: 0,
                            weight: 0,
                            completed: set.completed,
                        },
                    })
                    .collect();

                ExerciseState {
                    exercise_id: exercise.id.clone(),
                    sets,
                    timer_visible: exercise.has_timed_set(),
                    custom_timer_seconds: exercise
                        .first_timed_duration()
                        .unwrap_or(DEFAULT_TIMER_SECONDS),
                }
            })
            .collect();

        tracing::info!(workout_id = %workout.id, "session started");

        Ok(Self {
            workout_id: workout.id.clone(),
            exercise_index: 0,
            exercises,
            exercise_timer: Countdown::idle(),
            rest_timer: Countdown::idle(),
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn workout_id(&self) -> &str {
        &self.workout_id
    }

    pub fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    pub fn current_exercise(&self) -> &ExerciseState {
        // exercise_index is clamped to a non-empty list for the whole
        // session lifetime
        &self.exercises[self.exercise_index]
    }

    pub fn exercise_state(&self, exercise_id: &str) -> Option<&ExerciseState> {
        self.exercises.iter().find(|e| e.exercise_id == exercise_id)
    }

    /// True iff every set of the current exercise is completed
    pub fn is_current_exercise_complete(&self) -> bool {
        self.current_exercise().is_complete()
    }

    /// Number of exercises whose buffer sets are all completed
    pub fn completed_exercise_count(&self) -> usize {
        self.exercises.iter().filter(|e| e.is_complete()).count()
    }

    /// Workout completion in percent; an empty session counts as 0, not NaN
    pub fn progress_percentage(&self) -> f64 {
        if self.exercises.is_empty() {
            return 0.0;
        }
        self.completed_exercise_count() as f64 / self.exercises.len() as f64 * 100.0
    }

    pub fn exercise_timer(&self) -> &Countdown {
        &self.exercise_timer
    }

    pub fn rest_timer(&self) -> &Countdown {
        &self.rest_timer
    }

    /// True when the finish gate is open: on the last exercise with every
    /// set completed
    pub fn can_finish(&self) -> bool {
        self.exercise_index == self.exercises.len() - 1 && self.is_current_exercise_complete()
    }

    // ── Set editing ──────────────────────────────────────────────────

    /// Flip the completion flag of one buffer entry
    ///
    /// Completing a set starts the fixed 60-second rest countdown;
    /// un-completing performs no side effect. Unknown ids and out-of-range
    /// indices are silent no-ops.
    pub fn toggle_set_completion(&mut self, exercise_id: &str, set_index: usize) {
        let Some(entry) = self.set_entry_mut(exercise_id, set_index) else {
            return;
        };

        entry.completed = !entry.completed;
        let now_complete = entry.completed;

        if now_complete {
            tracing::debug!(exercise_id, set_index, "set completed, starting rest");
            self.start_rest_timer();
        }
    }

    /// Overwrite the weight of one buffer entry
    pub fn update_weight(&mut self, exercise_id: &str, set_index: usize, weight: u32) {
        if let Some(entry) = self.set_entry_mut(exercise_id, set_index) {
            entry.weight = weight;
        }
    }

    /// Overwrite the reps of one buffer entry
    pub fn update_reps(&mut self, exercise_id: &str, set_index: usize, reps: u32) {
        if let Some(entry) = self.set_entry_mut(exercise_id, set_index) {
            entry.reps = reps;
        }
    }

    fn set_entry_mut(&mut self, exercise_id: &str, set_index: usize) -> Option<&mut SetEntry> {
        self.exercises
            .iter_mut()
            .find(|e| e.exercise_id == exercise_id)?
            .sets
            .get_mut(set_index)
    }

    // ── Navigation ───────────────────────────────────────────────────

    /// Move to the previous exercise, floored at the first
    ///
    /// Cancels a running exercise timer (the rest timer keeps going).
    /// Returns true when the cursor moved; the view should then scroll
    /// back to the top.
    pub fn previous_exercise(&mut self) -> bool {
        if self.exercise_index == 0 {
            return false;
        }
        self.exercise_index -= 1;
        self.exercise_timer.stop();
        tracing::debug!(index = self.exercise_index, "moved to previous exercise");
        true
    }

    /// Move to the next exercise, capped at the last
    ///
    /// Same timer-cancel and scroll-to-top contract as `previous_exercise`.
    pub fn next_exercise(&mut self) -> bool {
        if self.exercise_index + 1 >= self.exercises.len() {
            return false;
        }
        self.exercise_index += 1;
        self.exercise_timer.stop();
        tracing::debug!(index = self.exercise_index, "moved to next exercise");
        true
    }

    // ── Timers ───────────────────────────────────────────────────────

    /// Flip the timer display flag for an exercise
    ///
    /// Hiding the timer while its countdown is running stops and resets
    /// the countdown (it is not paused).
    pub fn toggle_timer_visibility(&mut self, exercise_id: &str) {
        let Some(exercise) = self
            .exercises
            .iter_mut()
            .find(|e| e.exercise_id == exercise_id)
        else {
            return;
        };

        exercise.timer_visible = !exercise.timer_visible;
        if !exercise.timer_visible {
            self.exercise_timer.stop();
        }
    }

    /// Set the custom exercise timer length for an exercise
    pub fn set_custom_timer_seconds(&mut self, exercise_id: &str, seconds: u32) {
        if let Some(exercise) = self
            .exercises
            .iter_mut()
            .find(|e| e.exercise_id == exercise_id)
        {
            exercise.custom_timer_seconds = seconds;
        }
    }

    /// Start the exercise countdown
    ///
    /// At most one exercise timer runs at a time; starting a new one
    /// cancels the old one first.
    pub fn start_exercise_timer(&mut self, seconds: u32) {
        tracing::debug!(seconds, "exercise timer started");
        self.exercise_timer.start(seconds);
    }

    /// Cancel the exercise countdown, discarding remaining time
    pub fn stop_exercise_timer(&mut self) {
        self.exercise_timer.stop();
    }

    /// Start the fixed 60-second rest countdown, replacing any running one
    pub fn start_rest_timer(&mut self) {
        self.rest_timer.start(REST_SECONDS);
    }

    /// Immediately cancel the rest countdown
    pub fn skip_rest_timer(&mut self) {
        self.rest_timer.stop();
    }

    /// Advance both countdowns by one second
    pub fn tick(&mut self) -> SessionTick {
        let exercise = self.exercise_timer.tick();
        let rest = self.rest_timer.tick();

        if exercise == TickOutcome::Finished {
            tracing::info!("exercise timer finished");
        }
        if rest == TickOutcome::Finished {
            tracing::info!("rest timer finished");
        }

        SessionTick { exercise, rest }
    }

    // ── Finish ───────────────────────────────────────────────────────

    /// Finish the workout
    ///
    /// Only reachable on the last exercise with every set completed, and
    /// gated behind explicit confirmation. On success the buffer is
    /// discarded and the store's active workout is cleared; otherwise the
    /// session is handed back unchanged.
    pub fn finish(self, confirmed: bool, store: &mut AppStore) -> FinishOutcome {
        if !self.can_finish() {
            return FinishOutcome::NotReady(self);
        }
        if !confirmed {
            tracing::debug!("finish declined");
            return FinishOutcome::Declined(self);
        }

        tracing::info!(workout_id = %self.workout_id, "workout finished");
        store.end_workout();
        FinishOutcome::Finished
    }
}
