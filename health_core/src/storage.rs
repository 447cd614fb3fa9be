//! Persistence collaborators for the entry collection.
//!
//! The whole collection is stored under a single key and overwritten on
//! every mutation. The file-backed implementation locks the file while
//! reading and writes through a temp file that is renamed into place.

use crate::{Entry, Error, Result};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Key the collection is stored under
pub const STORAGE_KEY: &str = "healthData";

/// Durable key-value storage holding one serialized collection
pub trait EntryPersistence {
    /// Read the stored collection
    ///
    /// `Ok(None)` means nothing is stored; an unreadable or malformed
    /// payload is an error.
    fn load(&self) -> Result<Option<Vec<Entry>>>;

    /// Overwrite the stored collection
    fn save(&mut self, entries: &[Entry]) -> Result<()>;

    /// Delete the stored key
    fn remove(&mut self) -> Result<()>;
}

/// JSON file storage with file locking
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage at an explicit file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage for [`STORAGE_KEY`] inside a data directory
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(format!("{}.json", STORAGE_KEY)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_contents(&self) -> Result<String> {
        let file = File::open(&self.path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let read = std::io::BufReader::new(&file).read_to_string(&mut contents);
        file.unlock()?;
        read?;

        Ok(contents)
    }
}

impl EntryPersistence for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<Entry>>> {
        if !self.path.exists() {
            tracing::debug!("No stored entries at {:?}", self.path);
            return Ok(None);
        }

        let contents = self.read_contents()?;
        let entries: Vec<Entry> = serde_json::from_str(&contents)?;
        tracing::debug!("Read {} entries from {:?}", entries.len(), self.path);
        Ok(Some(entries))
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let parent = self.path.parent().ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "storage path missing parent",
            ))
        })?;
        std::fs::create_dir_all(parent)?;

        // Unique temp file in the same directory so the rename is atomic
        let temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            serde_json::to_writer(&mut writer, entries)?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved {} entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!("Removed stored entries at {:?}", self.path);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process storage holding the serialized payload
///
/// Useful for tests and for embedding without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    payload: Option<String>,
    writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a raw payload, well-formed or not
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            writes: 0,
        }
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Number of save/remove calls received
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl EntryPersistence for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<Entry>>> {
        match &self.payload {
            Some(payload) => Ok(Some(serde_json::from_str(payload)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.payload = Some(serde_json::to_string(entries)?);
        self.writes += 1;
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        self.payload = None;
        self.writes += 1;
        Ok(())
    }
}
