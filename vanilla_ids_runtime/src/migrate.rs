//! Migration of registry-data documents to the current id scheme.
//!
//! All key decisions are delegated to the kernel's alias table; this module
//! only finds the records and handles the files.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{info, warn};

use vanilla_ids::{Category, IdRegistry};

use crate::config::MigrationConfig;
use crate::document::{read_document, write_document, DocumentError};
use crate::report::MigrationReport;

/// Rewrite the tile and item records of `document` in place.
///
/// Sections are validated before anything is rewritten, so an error leaves
/// the document untouched. Absent sections are skipped and reported.
pub fn migrate_document(
    registry: &IdRegistry,
    document: &mut Map<String, Value>,
    config: &MigrationConfig,
) -> Result<MigrationReport, DocumentError> {
    let sections = [
        (Category::Tile, config.tiles_section.as_str()),
        (Category::Item, config.items_section.as_str()),
    ];

    for (_, section) in sections {
        if let Some(value) = document.get(section) {
            if !value.is_object() {
                return Err(DocumentError::SectionNotObject(section.to_string()));
            }
        }
    }

    let mut report = MigrationReport::default();
    for (category, section) in sections {
        match document.get_mut(section) {
            Some(Value::Object(record)) => {
                let renames = registry.aliases().rewrite_keys(record, category);
                report.record(category, renames);
            }
            _ => {
                warn!(%category, section, "registry data has no such section; skipped");
                report.missing_sections.push(section.to_string());
            }
        }
    }
    Ok(report)
}

/// Migrate a registry-data file in place.
///
/// The file is rewritten only when at least one key changed. With
/// `write_backup` the original is first copied to `<file>.bak`.
pub fn migrate_file(
    registry: &IdRegistry,
    path: &Path,
    config: &MigrationConfig,
) -> Result<MigrationReport, DocumentError> {
    let mut document = read_document(path)?;
    let report = migrate_document(registry, &mut document, config)?;

    if report.is_noop() {
        info!(path = %path.display(), "registry data already current");
        return Ok(report);
    }

    if config.write_backup {
        fs::copy(path, backup_path(path))?;
    }
    write_document(path, &document)?;

    info!(path = %path.display(), "{}", report.summary());
    Ok(report)
}

/// `<file>.bak` next to `path`.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".bak");
    PathBuf::from(name)
}
