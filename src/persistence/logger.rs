use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{PersistenceError, PersistenceResult};
use crate::storage::Entity;

/// In-memory list of entities mirrored to a single JSON file on demand.
///
/// Saving writes the whole list as a JSON array. Loading replaces the list with
/// the file contents.
#[derive(Debug)]
pub struct InventoryLogger<T> {
    log: Vec<T>,
    file_path: PathBuf,
}

impl<T> InventoryLogger<T>
where
    T: Entity + Serialize + DeserializeOwned + Clone,
{
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            log: Vec::new(),
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn add(&mut self, item: T) {
        tracing::debug!(id = %item.id(), "inventory log add");
        self.log.push(item);
    }

    pub fn get_all(&self) -> Vec<T> {
        self.log.clone()
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn save_to_file(&self) -> PersistenceResult<()> {
        let content =
            serde_json::to_string_pretty(&self.log).map_err(PersistenceError::Serialization)?;
        fs::write(&self.file_path, content).map_err(|source| PersistenceError::Io {
            path: self.file_path.clone(),
            source,
        })?;
        tracing::info!(
            items = self.log.len(),
            path = %self.file_path.display(),
            "inventory saved"
        );
        Ok(())
    }

    /// Returns the number of items loaded. A missing file counts as no data and
    /// leaves the in-memory list as it was.
    pub fn load_from_file(&mut self) -> PersistenceResult<usize> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %self.file_path.display(), "inventory file not found, nothing loaded");
                return Ok(0);
            }
            Err(source) => {
                return Err(PersistenceError::Io {
                    path: self.file_path.clone(),
                    source,
                })
            }
        };

        let items: Vec<T> =
            serde_json::from_str(&content).map_err(|source| PersistenceError::Deserialization {
                path: self.file_path.clone(),
                source,
            })?;
        self.log = items;
        tracing::info!(
            items = self.log.len(),
            path = %self.file_path.display(),
            "inventory loaded"
        );
        Ok(self.log.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InventoryItem;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn items() -> Vec<InventoryItem> {
        let day = |d| Utc.with_ymd_and_hms(2024, 5, d, 9, 30, 0).unwrap();
        vec![
            InventoryItem::new(1, "Stapler", 12, day(1)),
            InventoryItem::new(2, "Printer Paper", 40, day(2)),
            InventoryItem::new(3, "Whiteboard Marker", 25, day(3)),
        ]
    }

    #[test]
    fn test_save_then_load_restores_same_sequence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.json");

        let mut logger = InventoryLogger::new(&path);
        for item in items() {
            logger.add(item);
        }
        logger.save_to_file().unwrap();

        let mut reloaded: InventoryLogger<InventoryItem> = InventoryLogger::new(&path);
        assert_eq!(reloaded.load_from_file().unwrap(), 3);
        assert_eq!(reloaded.get_all(), items());
    }

    #[test]
    fn test_load_replaces_memory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.json");

        let mut logger = InventoryLogger::new(&path);
        logger.add(items()[0].clone());
        logger.save_to_file().unwrap();

        logger.clear();
        logger.add(items()[1].clone());
        logger.add(items()[2].clone());
        logger.load_from_file().unwrap();

        assert_eq!(logger.get_all(), vec![items()[0].clone()]);
    }

    #[test]
    fn test_missing_file_is_no_data() {
        let temp_dir = TempDir::new().unwrap();
        let mut logger = InventoryLogger::new(temp_dir.path().join("absent.json"));
        logger.add(items()[0].clone());

        assert_eq!(logger.load_from_file().unwrap(), 0);
        assert_eq!(logger.len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let mut logger: InventoryLogger<InventoryItem> = InventoryLogger::new(&path);
        let err = logger.load_from_file().unwrap_err();
        assert!(matches!(err, PersistenceError::Deserialization { .. }));
        assert!(logger.is_empty());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let logger: InventoryLogger<InventoryItem> =
            InventoryLogger::new(temp_dir.path().join("nope").join("inventory.json"));

        assert!(matches!(
            logger.save_to_file(),
            Err(PersistenceError::Io { .. })
        ));
    }
}
