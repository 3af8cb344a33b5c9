use crate::error::{GardenError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// String key-value persistence with a byte capacity.
///
/// `set` is all-or-nothing: on `CapacityExceeded` the previous value is untouched.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn delete(&mut self, key: &str) -> Result<()>;
}

fn check_capacity(size: usize, limit: usize) -> Result<()> {
    if size > limit {
        return Err(GardenError::CapacityExceeded { size, limit });
    }
    Ok(())
}

/// One JSON file per key inside a data directory.
pub struct FileStore {
    data_path: PathBuf,
    capacity: usize,
}

impl FileStore {
    pub fn new(data_path: &Path, capacity: usize) -> Self {
        Self {
            data_path: data_path.to_path_buf(),
            capacity,
        }
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\', '\0']) || key.contains("..") {
            return Err(GardenError::Validation(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.data_path.join(format!("{}.json", key)))
    }

    /// Atomically write content to a file using temp file + rename
    fn atomic_write(&self, target_path: &Path, content: &str) -> Result<()> {
        let target_dir = target_path
            .parent()
            .ok_or_else(|| GardenError::Storage("Target path has no parent directory".to_string()))?;

        // Same directory as the target so the rename stays atomic
        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| GardenError::Storage(format!("Failed to create temp file: {}", e)))?;

        use std::io::Write;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| GardenError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| GardenError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(target_path)
            .map_err(|e| GardenError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        check_capacity(value.len(), self.capacity)?;
        std::fs::create_dir_all(&self.data_path)?;
        self.atomic_write(&path, value)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// In-process store, used by tests and embedders without a filesystem.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    capacity: usize,
}

impl MemoryStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity,
        }
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(usize::MAX)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        check_capacity(value.len(), self.capacity)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
