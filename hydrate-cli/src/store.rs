//! Store wiring for the CLI: a file-backed store in the configured data directory.

use hydrate_core::{FileStorage, HydrationStore, KeyValueStorage, Profile};

use crate::config::Config;

pub type Store = HydrationStore<FileStorage>;

/// Opens the store and waits for the stored record to load.
pub async fn open_store(config: &Config) -> Store {
    let storage = FileStorage::new(config.data_dir.value.clone());
    tracing::debug!("Opening store in {}", storage.data_dir().display());
    HydrationStore::open(storage).await
}

/// Returns the current profile, or an error pointing at `hydrate onboard`.
pub fn require_profile<S: KeyValueStorage>(
    store: &HydrationStore<S>,
) -> Result<&Profile, Box<dyn std::error::Error>> {
    store
        .profile()
        .ok_or_else(|| "No profile yet. Run 'hydrate onboard' first.".into())
}
