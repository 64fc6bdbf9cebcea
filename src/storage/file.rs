use std::fs;
use std::io::ErrorKind;

use tracing::debug;

use crate::error::{Result, VaultError};
use crate::storage::KeyValueStore;
use crate::types::*;

/// Directory-backed slots: slot `k` is the file `<dir>/k`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(VaultError::Storage(format!("read slot '{}': {}", key, e))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let storage_err = |e: std::io::Error| VaultError::Storage(format!("write slot '{}': {}", key, e));

        fs::create_dir_all(&self.dir).map_err(storage_err)?;

        // Atomic write: write to temp file, then rename
        let path = self.slot_path(key);
        let tmp_path = self.dir.join(format!("{}.tmp", key));
        fs::write(&tmp_path, value).map_err(storage_err)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(storage_err(e));
        }

        debug!(slot = key, bytes = value.len(), "slot written");
        Ok(())
    }
}
