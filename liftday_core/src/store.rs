//! Process-wide application state.
//!
//! The store owns the workout catalog, the user profile, progress history,
//! the active-workout reference, and the displayed week offset. It is
//! created once at startup and passed by handle to whatever consumes it -
//! there is no ambient singleton. All operations are synchronous total
//! functions; their effects are visible to all readers immediately.
//!
//! State is volatile by design: it is re-seeded from the default catalog
//! on every process start.

use crate::catalog::default_catalog;
use crate::profile::DEFAULT_HEIGHT_INCHES;
use crate::types::{Progress, User, Workout};

/// Application state holding the catalog and session-independent facts
#[derive(Clone, Debug)]
pub struct AppStore {
    workouts: Vec<Workout>,
    user: User,
    progress: Vec<Progress>,
    active_workout: Option<Workout>,
    current_week_offset: i32,
}

impl AppStore {
    /// Create a store seeded with the default catalog and user profile
    pub fn new() -> Self {
        Self {
            workouts: default_catalog().workouts.clone(),
            user: default_user(),
            progress: Vec::new(),
            active_workout: None,
            current_week_offset: 0,
        }
    }

    // ── Readers ──────────────────────────────────────────────────────

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn workout_by_id(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn progress(&self) -> &[Progress] {
        &self.progress
    }

    pub fn active_workout(&self) -> Option<&Workout> {
        self.active_workout.as_ref()
    }

    pub fn current_week_offset(&self) -> i32 {
        self.current_week_offset
    }

    // ── Writers ──────────────────────────────────────────────────────

    /// Replace the catalog wholesale
    pub fn set_workouts(&mut self, workouts: Vec<Workout>) {
        self.workouts = workouts;
    }

    /// Replace the user profile wholesale
    pub fn set_user(&mut self, user: User) {
        self.user = user;
    }

    /// Replace progress history wholesale
    pub fn set_progress(&mut self, progress: Vec<Progress>) {
        self.progress = progress;
    }

    /// Mark the given workout as active
    ///
    /// Does not create the session engine; that is the caller's step,
    /// triggered by the same user action.
    pub fn start_workout(&mut self, workout: Workout) {
        tracing::info!(workout_id = %workout.id, "starting workout");
        self.active_workout = Some(workout);
    }

    /// Clear the active-workout reference
    pub fn end_workout(&mut self) {
        if let Some(workout) = self.active_workout.take() {
            tracing::info!(workout_id = %workout.id, "ended workout");
        }
    }

    /// Store the displayed week offset (negative = past weeks, no bounds)
    pub fn set_current_week_offset(&mut self, offset: i32) {
        self.current_week_offset = offset;
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The seeded default user profile
pub fn default_user() -> User {
    User {
        id: "1".into(),
        name: "Peter".into(),
        weight: 180,
        height: DEFAULT_HEIGHT_INCHES,
        age: 35,
        goals: Some("Build strength and improve mobility".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_seeded() {
        let store = AppStore::new();
        assert_eq!(store.workouts().len(), 5);
        assert_eq!(store.user().name, "Peter");
        assert!(store.progress().is_empty());
        assert!(store.active_workout().is_none());
        assert_eq!(store.current_week_offset(), 0);
    }

    #[test]
    fn test_start_and_end_workout() {
        let mut store = AppStore::new();
        let workout = store.workout_by_id("upper-push").unwrap().clone();

        store.start_workout(workout);
        assert_eq!(store.active_workout().unwrap().id, "upper-push");

        store.end_workout();
        assert!(store.active_workout().is_none());

        // Ending twice is a no-op, not an error
        store.end_workout();
        assert!(store.active_workout().is_none());
    }

    #[test]
    fn test_week_offset_accepts_negative_values() {
        let mut store = AppStore::new();
        store.set_current_week_offset(-3);
        assert_eq!(store.current_week_offset(), -3);
        store.set_current_week_offset(12);
        assert_eq!(store.current_week_offset(), 12);
    }

    #[test]
    fn test_set_user_replaces_profile() {
        let mut store = AppStore::new();
        let mut user = store.user().clone();
        user.weight = 175;
        store.set_user(user);
        assert_eq!(store.user().weight, 175);
    }

    #[test]
    fn test_set_workouts_replaces_catalog() {
        let mut store = AppStore::new();
        store.set_workouts(Vec::new());
        assert!(store.workouts().is_empty());
        assert!(store.workout_by_id("upper-push").is_none());
    }
}
