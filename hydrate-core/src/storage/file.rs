//! File-backed storage: each key is a JSON file in the data directory.

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::{validate_key, KeyValueStorage, StorageError};

#[derive(Clone, Debug)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the full path of the file holding `key`.
    pub fn path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KeyValueStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let path = self.path(key);

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io { path, source: e }),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        validate_key(key)?;

        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| StorageError::Io {
                path: self.data_dir.clone(),
                source: e,
            })?;

        // Write a sibling file, then rename it over the record
        let path = self.path(key);
        let tmp_path = self.data_dir.join(format!("{}.json.tmp", key));
        fs::write(&tmp_path, value)
            .await
            .map_err(|e| StorageError::Io {
                path: tmp_path.clone(),
                source: e,
            })?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| StorageError::Io { path, source: e })?;

        Ok(())
    }
}
