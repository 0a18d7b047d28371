use super::types::Snapshot;
use crate::{Error, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub struct SnapshotWriter;

impl SnapshotWriter {
    /// Write a snapshot to a file.
    ///
    /// The document is written to a temporary file next to `path` and then
    /// renamed over it, so readers see either the old or the new snapshot.
    pub fn to_file(snapshot: &Snapshot, path: &Path) -> Result<()> {
        tracing::debug!("Writing ledger snapshot to: {}", path.display());

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, snapshot).map_err(Error::Serialize)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;

        tracing::debug!(
            "Wrote ledger snapshot with {} items to {}",
            snapshot.items.len(),
            path.display()
        );

        Ok(())
    }

    /// Convert a snapshot to a JSON string
    pub fn to_string(snapshot: &Snapshot) -> Result<String> {
        serde_json::to_string_pretty(snapshot).map_err(Error::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Item, SnapshotReader};
    use chrono::NaiveDate;

    fn sample_snapshot() -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot.items.push(Item {
            id: 1,
            name: "Backpack".to_string(),
            category: "Other".to_string(),
            location: "Gym".to_string(),
            date_found: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            claimed: false,
            reporter: "Bob".to_string(),
        });
        snapshot.next_id = 2;
        snapshot.user_points.insert("Bob".to_string(), 10);
        snapshot
    }

    #[test]
    fn test_snapshot_to_string() {
        let json = SnapshotWriter::to_string(&Snapshot::default()).unwrap();
        assert!(json.contains("\"next_id\": 1"));
        assert!(json.contains("\"items\": []"));
    }

    #[test]
    fn test_serialize_error_names_the_write_side() {
        let source = serde_json::from_str::<Snapshot>("{").unwrap_err();
        let message = Error::Serialize(source).to_string();
        assert!(message.starts_with("Failed to serialize ledger snapshot"));
        assert!(!message.contains("Failed to parse"));
    }

    #[test]
    fn test_to_file_replaces_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "stale contents").unwrap();

        let snapshot = sample_snapshot();
        SnapshotWriter::to_file(&snapshot, &path).unwrap();

        let loaded = SnapshotReader::from_file(&path).unwrap();
        assert_eq!(loaded, snapshot);

        // Only the ledger file remains, no leftover temp files
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_to_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ledger.json");

        SnapshotWriter::to_file(&Snapshot::default(), &path).unwrap();
        assert!(path.exists());
    }
}
