//! Migration reports — what a rewrite pass changed.

use serde::Serialize;

use vanilla_ids::{Category, KeyRename};

/// Renames performed on one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    pub tile_renames: Vec<KeyRename>,
    pub item_renames: Vec<KeyRename>,
    /// Configured sections that were not present in the document.
    pub missing_sections: Vec<String>,
}

impl MigrationReport {
    pub fn renames(&self, category: Category) -> &[KeyRename] {
        match category {
            Category::Tile => &self.tile_renames,
            Category::Item => &self.item_renames,
        }
    }

    pub fn record(&mut self, category: Category, renames: Vec<KeyRename>) {
        match category {
            Category::Tile => self.tile_renames.extend(renames),
            Category::Item => self.item_renames.extend(renames),
        }
    }

    pub fn total(&self) -> usize {
        self.tile_renames.len() + self.item_renames.len()
    }

    /// True when the document was already in the current scheme.
    pub fn is_noop(&self) -> bool {
        self.total() == 0
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        let mut s = format!(
            "{} tile key(s), {} item key(s) renamed",
            self.tile_renames.len(),
            self.item_renames.len()
        );
        if !self.missing_sections.is_empty() {
            s.push_str(&format!(
                "; missing section(s): {}",
                self.missing_sections.join(", ")
            ));
        }
        s
    }
}
