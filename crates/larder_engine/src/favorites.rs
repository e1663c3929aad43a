use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use larder_core::MealId;
use log::warn;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed favorites data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Favorite meal ids persisted as one JSON array in a single file.
///
/// Every mutation reads the whole value, computes the new membership in
/// memory and writes the whole value back; the mutex serializes
/// overlapping toggles within the process. Last writer wins.
pub struct FavoritesStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FavoritesStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            guard: Mutex::new(()),
        }
    }

    /// Current membership in insertion order. Read failures degrade to the
    /// empty set.
    pub fn list(&self) -> Vec<MealId> {
        let _guard = self.guard.lock().expect("favorites lock");
        self.read_or_empty()
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.list().iter().any(|fav| fav == id)
    }

    /// Flips membership for `id`, persists the whole set and returns the
    /// new membership. On write failure the previous value stays on disk.
    pub fn toggle(&self, id: &str) -> Result<Vec<MealId>, StorageError> {
        let _guard = self.guard.lock().expect("favorites lock");
        let mut ids = self.read_or_empty();
        match ids.iter().position(|fav| fav == id) {
            Some(index) => {
                ids.remove(index);
            }
            None => ids.push(id.to_owned()),
        }
        self.write(&ids)?;
        Ok(ids)
    }

    fn read_or_empty(&self) -> Vec<MealId> {
        match read_ids(&self.path) {
            Ok(ids) => ids,
            Err(err) => {
                warn!("Failed to read favorites from {:?}: {}", self.path, err);
                Vec::new()
            }
        }
    }

    /// Atomically replace the file: write a temp file next to it, then
    /// rename into place.
    fn write(&self, ids: &[MealId]) -> Result<(), StorageError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let content = serde_json::to_string(ids)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace existing file if present to keep determinism.
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        tmp.persist(&self.path)
            .map_err(|err| StorageError::Io(err.error))?;
        Ok(())
    }
}

fn read_ids(path: &Path) -> Result<Vec<MealId>, StorageError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };
    Ok(serde_json::from_str(&content)?)
}
