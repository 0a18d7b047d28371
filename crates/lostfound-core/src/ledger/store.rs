use super::reader::SnapshotReader;
use super::types::Snapshot;
use super::writer::SnapshotWriter;
use crate::Result;
use std::path::{Path, PathBuf};

/// Where a ledger keeps its snapshot
pub trait SnapshotStore {
    /// Load the stored snapshot, or `None` if nothing has been stored yet
    fn load(&mut self) -> Result<Option<Snapshot>>;

    /// Replace the stored snapshot with `snapshot`
    fn save(&mut self, snapshot: &Snapshot) -> Result<()>;
}

/// Snapshot kept in a single JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<Snapshot>> {
        if !self.path.try_exists()? {
            tracing::debug!("No ledger file at {}", self.path.display());
            return Ok(None);
        }
        SnapshotReader::from_file(&self.path).map(Some)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        SnapshotWriter::to_file(snapshot, &self.path)
    }
}

/// Snapshot kept in memory. Counts saves so callers can tell whether an
/// operation persisted anything.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<Snapshot>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            saves: 0,
        }
    }

    /// Last snapshot saved (or seeded)
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&mut self) -> Result<Option<Snapshot>> {
        if let Some(snapshot) = &self.snapshot {
            SnapshotReader::validate(snapshot)?;
        }
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.snapshot = Some(snapshot.clone());
        self.saves += 1;
        Ok(())
    }
}
