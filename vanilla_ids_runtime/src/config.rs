//! Migration configuration.
//!
//! Loaded from a JSON file. Every field is optional; missing fields take
//! the defaults below, unknown fields are rejected.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the tile and item records live in a registry-data document, and
/// how files are rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct MigrationConfig {
    /// Key of the tile record in the document.
    pub tiles_section: String,
    /// Key of the item record in the document.
    pub items_section: String,
    /// Keep `<file>.bak` before overwriting a migrated file.
    pub write_backup: bool,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            tiles_section: "tiles".to_string(),
            items_section: "items".to_string(),
            write_backup: true,
        }
    }
}

impl MigrationConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
