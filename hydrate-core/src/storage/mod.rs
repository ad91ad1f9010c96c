//! Durable key-value storage used by the hydration store.
//!
//! The store only ever reads and writes whole string values under a single
//! key, so the adapter surface is two async calls.
//!
//! # Implementations
//!
//! - [`FileStorage`]: one `<key>.json` file per key in a data directory
//! - [`MemoryStorage`]: an in-process map shared between clones

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::future::Future;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Asynchronous durable string storage.
pub trait KeyValueStorage: Send + Sync + 'static {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Errors that can occur reading or writing a storage slot.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error for {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Keys become file names, so they are limited to a safe character set.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key() {
        assert!(validate_key("hydration-store").is_ok());
        assert!(validate_key("backup_2025.01").is_ok());
        assert!(validate_key("").is_err());
        assert!(validate_key("../escape").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key(".hidden").is_err());
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::Io {
            path: PathBuf::from("/tmp/x.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/x.json"));
        assert!(err.to_string().contains("denied"));

        let err = StorageError::InvalidKey("a/b".to_string());
        assert_eq!(err.to_string(), "Invalid storage key 'a/b'");
    }
}
