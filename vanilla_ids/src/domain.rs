/// Vanilla IDs — Core Domain Types
///
/// Pure data. Registration and rewrite logic live in `registry` and `alias`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifier::Identifier;

/// Legacy numeric id of a tile or item.
pub type Handle = u32;

/// Object category. Tiles and items keep separate tables because their
/// legacy handles may overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tile,
    Item,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Tile, Category::Item];

    /// Display-path prefix written by the legacy format (`tile.` / `item.`).
    pub fn display_prefix(self) -> &'static str {
        match self {
            Category::Tile => "tile.",
            Category::Item => "item.",
        }
    }

    /// Stand-in for an object that has no display path.
    pub fn placeholder(self) -> &'static str {
        match self {
            Category::Tile => "tile",
            Category::Item => "itemtype",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Tile => f.write_str("tile"),
            Category::Item => f.write_str("item"),
        }
    }
}

/// One registered legacy object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub handle: Handle,
    pub category: Category,
    pub id: Identifier,
    /// The save key the legacy format used for this object.
    pub alias: Identifier,
}

/// Legacy save key → current identifier, within one category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub alias: Identifier,
    pub category: Category,
    pub current: Identifier,
}

/// A key renamed by a rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRename {
    pub from: String,
    pub to: String,
}
