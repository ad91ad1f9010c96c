//! The hydration store: single owner of profile, goal, intake and history.
//!
//! A store is created once per process and passed by reference to whatever
//! needs it. Reads go through the accessors; every mutation runs the pure
//! [`reduce`] step and then queues the new snapshot for the background writer.
//!
//! # Lifecycle
//!
//! 1. [`HydrationStore::new`] starts with defaults and `has_hydrated() == false`.
//! 2. [`HydrationStore::hydrate`] loads the stored record once, merges it over the
//!    current state and flips `has_hydrated()`. A missing, unreadable or corrupt
//!    record leaves the defaults in place.
//! 3. Mutations persist in the background; [`HydrationStore::flush`] waits for them.
//!
//! Mutations made before hydration are applied in memory but not written, so
//! they cannot overwrite the stored record before it is read. Once hydrated,
//! the merged state is written if anything changed in the meantime.

mod persister;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::Profile;
use crate::state::{reduce, today_key, Action, PersistedState, StatePatch};
use crate::storage::KeyValueStorage;

use persister::Persister;

/// Storage key the state is written under.
pub const STORE_KEY: &str = "hydration-store";

pub struct HydrationStore<S: KeyValueStorage> {
    storage: Arc<S>,
    key: String,
    state: PersistedState,
    has_hydrated: bool,
    /// A mutation happened before hydration and has not been written yet.
    unsaved: bool,
    persister: Persister,
}

impl<S: KeyValueStorage> HydrationStore<S> {
    /// Creates an un-hydrated store using [`STORE_KEY`].
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORE_KEY)
    }

    /// Creates an un-hydrated store that persists under `key`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        let storage = Arc::new(storage);
        let key = key.into();
        let persister = Persister::spawn(Arc::clone(&storage), key.clone());

        Self {
            storage,
            key,
            state: PersistedState::default(),
            has_hydrated: false,
            unsaved: false,
            persister,
        }
    }

    /// Creates a store and loads its stored record.
    pub async fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.hydrate().await;
        store
    }

    /// Loads the stored record and marks the store hydrated.
    ///
    /// Only the first call reads storage; later calls return immediately.
    pub async fn hydrate(&mut self) {
        if self.has_hydrated {
            return;
        }

        match self.storage.get(&self.key).await {
            Ok(Some(raw)) => match serde_json::from_str::<StatePatch>(&raw) {
                Ok(patch) => {
                    tracing::debug!("Rehydrated '{}'", self.key);
                    self.state.merge(patch);
                }
                Err(e) => {
                    tracing::warn!("Ignoring corrupt record '{}': {}", self.key, e);
                }
            },
            Ok(None) => {
                tracing::info!("No stored record '{}', starting with defaults", self.key);
            }
            Err(e) => {
                tracing::warn!("Failed to load '{}': {}", self.key, e);
            }
        }

        self.has_hydrated = true;

        if std::mem::take(&mut self.unsaved) {
            self.persist();
        }
    }

    pub fn has_hydrated(&self) -> bool {
        self.has_hydrated
    }

    /// The storage key this store persists under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current snapshot of the persisted fields.
    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    pub fn has_onboarded(&self) -> bool {
        self.state.has_onboarded
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.state.profile.as_ref()
    }

    pub fn daily_goal(&self) -> f64 {
        self.state.daily_goal
    }

    pub fn today_intake(&self) -> f64 {
        self.state.today_intake
    }

    pub fn history(&self) -> &BTreeMap<String, f64> {
        &self.state.history
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn remaining(&self) -> f64 {
        self.state.remaining()
    }

    pub fn history_range(&self, from: NaiveDate, to: NaiveDate) -> Vec<(NaiveDate, f64)> {
        self.state.history_range(from, to)
    }

    /// Replaces the profile, recomputes the goal and marks the user onboarded.
    pub fn set_profile(&mut self, profile: Profile) {
        self.dispatch(Action::SetProfile(profile));
    }

    /// Adds `ml` to today's intake (clamped at zero) and records it under today's key.
    pub fn add_water(&mut self, ml: f64) {
        self.dispatch(Action::AddWater {
            ml,
            date_key: today_key(),
        });
    }

    /// Zeroes today's intake. Today's history entry keeps its last value.
    pub fn reset_today(&mut self) {
        self.dispatch(Action::ResetToday);
    }

    /// Merges `patch` into the current state without validation.
    pub fn restore_state(&mut self, patch: StatePatch) {
        self.dispatch(Action::Restore(patch));
    }

    /// Applies `action` and queues the resulting snapshot.
    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.persist();
    }

    /// Waits for every queued snapshot to reach the storage adapter.
    pub async fn flush(&self) {
        self.persister.flush().await;
    }

    fn persist(&mut self) {
        if !self.has_hydrated {
            self.unsaved = true;
            return;
        }
        match serde_json::to_string(&self.state) {
            Ok(snapshot) => self.persister.write(snapshot),
            Err(e) => tracing::warn!("Failed to serialize '{}': {}", self.key, e),
        }
    }
}
