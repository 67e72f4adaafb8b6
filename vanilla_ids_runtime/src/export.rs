//! Table export — the frozen id table as a self-verifying JSON file.
//!
//! The export holds the kernel's canonical JSON and its hash, so tools can
//! tell which table a save was migrated with. No timestamps (determinism).

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use vanilla_ids::hashing::{canonical_hash, canonical_serialize};
use vanilla_ids::IdRegistry;

/// File name of the export inside its directory.
pub const EXPORT_FILE: &str = "id_table.json";

/// Export on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableExport {
    /// Mapping version at export time.
    pub scheme_version: u32,
    /// Canonical JSON of the registry (UTF-8).
    pub canonical_json: String,
    /// SHA-256 of the canonical JSON.
    pub hash: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("bad export file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build the export for a registry.
pub fn build_export(registry: &IdRegistry) -> TableExport {
    TableExport {
        scheme_version: vanilla_ids::SCHEME_VERSION,
        canonical_json: String::from_utf8_lossy(&canonical_serialize(registry)).into_owned(),
        hash: canonical_hash(registry),
    }
}

/// Write `id_table.json` into `dir`.
pub fn save_export(dir: &Path, registry: &IdRegistry) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;

    let export = build_export(registry);
    let path = dir.join(EXPORT_FILE);
    let content = serde_json::to_string(&export)?;

    let mut file = File::create(&path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    Ok(path)
}

/// Load the export from `dir`. Returns None if there is none.
pub fn load_export(dir: &Path) -> Result<Option<TableExport>, ExportError> {
    let path = dir.join(EXPORT_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(Some(serde_json::from_str(&content)?))
}

/// True if the stored hash matches the stored canonical JSON.
pub fn verify_export(export: &TableExport) -> bool {
    let digest = Sha256::digest(export.canonical_json.as_bytes());
    let computed: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    computed == export.hash
}

/// True if the export was produced from a table identical to `registry`.
pub fn matches_registry(export: &TableExport, registry: &IdRegistry) -> bool {
    export.scheme_version == vanilla_ids::SCHEME_VERSION && export.hash == canonical_hash(registry)
}
