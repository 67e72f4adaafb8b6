/// Vanilla IDs — Legacy Alias Table
///
/// The legacy save format keyed tiles and items by `<name>_<handle>`, where
/// `<name>` is the object's display path minus its 5-character category
/// prefix. This table maps those keys back to current identifiers and
/// rewrites saved records that still use them.
///
/// The derivation is a compatibility contract with existing saves and
/// must not change.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::{AliasEntry, Category, Handle, KeyRename};
use crate::identifier::{Identifier, IdentifierError};
use crate::record::PersistedRecord;

/// Length of `tile.` / `item.`.
const DISPLAY_PREFIX_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AliasError {
    #[error("display path {display_path:?} of {category} {handle} is shorter than its prefix")]
    DisplayPathTooShort {
        category: Category,
        handle: Handle,
        display_path: String,
    },
    #[error("derived alias is not a valid identifier: {0}")]
    InvalidAlias(#[from] IdentifierError),
}

/// Compute the legacy save key for an object.
///
/// `display_path` is what the host reports for the object (`tile.stone`),
/// or `None` when it has none.
pub fn derive_alias(
    category: Category,
    display_path: Option<&str>,
    handle: Handle,
) -> Result<Identifier, AliasError> {
    let name = match display_path {
        None => category.placeholder(),
        Some(path) => path
            .get(DISPLAY_PREFIX_LEN..)
            .ok_or_else(|| AliasError::DisplayPathTooShort {
                category,
                handle,
                display_path: path.to_string(),
            })?,
    };
    Ok(Identifier::vanilla(&format!("{}_{}", name, handle))?)
}

/// Alias → current identifier, one table per category.
#[derive(Debug, Clone, Default)]
pub struct LegacyAliasTable {
    tiles: BTreeMap<Identifier, Identifier>,
    items: BTreeMap<Identifier, Identifier>,
}

impl LegacyAliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self, category: Category) -> &BTreeMap<Identifier, Identifier> {
        match category {
            Category::Tile => &self.tiles,
            Category::Item => &self.items,
        }
    }

    /// Record an alias. A repeated alias keeps the latest target.
    pub fn insert(&mut self, category: Category, alias: Identifier, current: Identifier) {
        let table = match category {
            Category::Tile => &mut self.tiles,
            Category::Item => &mut self.items,
        };
        table.insert(alias, current);
    }

    /// Current identifier for a legacy alias, if known.
    pub fn resolve(&self, category: Category, alias: &Identifier) -> Option<&Identifier> {
        self.table(category).get(alias)
    }

    pub fn contains(&self, category: Category, alias: &Identifier) -> bool {
        self.table(category).contains_key(alias)
    }

    /// Entries of one category, sorted by alias.
    pub fn iter(&self, category: Category) -> impl Iterator<Item = AliasEntry> + '_ {
        self.table(category).iter().map(move |(alias, current)| AliasEntry {
            alias: alias.clone(),
            category,
            current: current.clone(),
        })
    }

    pub fn len(&self, category: Category) -> usize {
        self.table(category).len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.items.is_empty()
    }

    /// Rename every legacy key of `category` found in `record` to its
    /// current identifier.
    ///
    /// A key matches an alias by its full form (`minecraft:stone_1`) or by
    /// its bare path (`stone_1`). Other keys are left alone, so a second
    /// pass over the same record renames nothing.
    pub fn rewrite_keys<R>(&self, record: &mut R, category: Category) -> Vec<KeyRename>
    where
        R: PersistedRecord + ?Sized,
    {
        let mut renames = Vec::new();
        for (alias, current) in self.table(category) {
            let to = current.to_string();
            for from in [alias.to_string(), alias.path().to_string()] {
                if record.rename_key(&from, &to) {
                    trace!(%category, from = %from, to = %to, "renamed legacy key");
                    renames.push(KeyRename {
                        from,
                        to: to.clone(),
                    });
                }
            }
        }
        renames
    }
}
