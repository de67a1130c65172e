use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// A single named key-value slot. Implementations hold at most one
/// serialized record.
pub trait DraftSlot {
    /// Reads the slot. `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replaces the slot contents.
    fn write(&mut self, contents: &str) -> Result<()>;

    /// Removes the slot. Clearing an absent slot is not an error.
    fn clear(&mut self) -> Result<()>;
}

/// Production slot: one JSON file.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default location under the platform data directory, e.g.
    /// `~/.local/share/pardoc/par-draft.json` on Linux.
    pub fn in_data_dir() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "pardoc")
            .ok_or_else(|| StoreError::Store("no home directory available".to_string()))?;
        Ok(Self::new(dirs.data_dir().join("par-draft.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

impl DraftSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.ensure_parent()?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Test slot: no persistence.
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.contents = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_slot_round_trip() {
        let mut slot = MemorySlot::new();
        assert_eq!(slot.read().unwrap(), None);
        slot.write("{}").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("{}"));
        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn test_file_slot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("nested").join("draft.json"));
        assert_eq!(slot.read().unwrap(), None);
        slot.write("{\"a\":1}").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("{\"a\":1}"));
        slot.clear().unwrap();
        assert_eq!(slot.read().unwrap(), None);
    }

    #[test]
    fn test_file_slot_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(dir.path().join("draft.json"));
        slot.clear().unwrap();
        slot.clear().unwrap();
    }
}
