//! Runtime configuration, resolved once at startup and passed to command handlers.

use std::fs;
use std::path::{Path, PathBuf};

const INVENTORY_FILE_NAME: &str = "inventory.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidInput(String),
    #[error("failed to create data directory {path}: {source}", path = path.display())]
    DataDirCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    data_dir: PathBuf,
}

impl AppConfig {
    pub fn new(data_dir: PathBuf) -> Result<Self, ConfigError> {
        if data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidInput(
                "data directory cannot be empty".into(),
            ));
        }
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn inventory_file(&self) -> PathBuf {
        self.data_dir.join(INVENTORY_FILE_NAME)
    }

    /// Creates the data directory if it does not exist yet.
    pub fn ensure_data_dir(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| ConfigError::DataDirCreation {
            path: self.data_dir.clone(),
            source,
        })
    }
}
