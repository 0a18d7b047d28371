use super::types::Snapshot;
use crate::{Error, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct SnapshotReader;

impl SnapshotReader {
    /// Read, parse and validate a ledger snapshot from the given path
    pub fn from_file(path: &Path) -> Result<Snapshot> {
        tracing::debug!("Reading ledger snapshot from: {}", path.display());

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let snapshot: Snapshot = serde_json::from_reader(reader)?;
        Self::validate(&snapshot)?;

        tracing::debug!(
            "Loaded ledger snapshot with {} items",
            snapshot.items.len()
        );

        Ok(snapshot)
    }

    /// Parse and validate a ledger snapshot from a JSON string
    pub fn from_str(content: &str) -> Result<Snapshot> {
        let snapshot: Snapshot = serde_json::from_str(content)?;
        Self::validate(&snapshot)?;
        Ok(snapshot)
    }

    /// Check the id invariants a snapshot must hold before the ledger uses it
    pub fn validate(snapshot: &Snapshot) -> Result<()> {
        if snapshot.next_id == 0 {
            return Err(Error::InvalidStructure(
                "next_id must be at least 1".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(snapshot.items.len());
        for (idx, item) in snapshot.items.iter().enumerate() {
            if item.id == 0 {
                return Err(Error::InvalidStructure(format!(
                    "Item at position {} has id 0",
                    idx
                )));
            }
            if !seen.insert(item.id) {
                return Err(Error::InvalidStructure(format!(
                    "Duplicate item id {}",
                    item.id
                )));
            }
            if item.id >= snapshot.next_id {
                return Err(Error::InvalidStructure(format!(
                    "Item id {} is not below next_id {}",
                    item.id, snapshot.next_id
                )));
            }
        }

        Ok(())
    }
}
