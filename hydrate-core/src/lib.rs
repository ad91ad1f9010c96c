//! Hydrate Core Library
//!
//! Profile, daily goal, intake and history state for Hydrate applications,
//! with asynchronous local persistence.

pub mod models;
pub mod state;
pub mod storage;
pub mod store;

pub use models::{calculate_daily_goal, ActivityLevel, Gender, Profile};
pub use state::{
    date_key, reduce, today_key, Action, PersistedState, StatePatch, DATE_KEY_FORMAT,
};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{HydrationStore, STORE_KEY};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
