/// Vanilla IDs — Identifier Registry
///
/// Two phases:
///   1. `RegistryBuilder` — single-threaded, ordered registration.
///   2. `IdRegistry`      — frozen, read-only, shareable across threads.
///
/// Every registration also records the object's legacy alias, because the
/// display path it is derived from is only known at registration time.

use std::collections::BTreeMap;

use tracing::debug;

use crate::alias::{derive_alias, AliasError, LegacyAliasTable};
use crate::domain::{Category, Handle, RegistryEntry};
use crate::identifier::{Identifier, IdentifierError};

/// Fatal registration failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{category} {handle}: invalid identifier: {source}")]
    InvalidId {
        category: Category,
        handle: Handle,
        #[source]
        source: IdentifierError,
    },
    #[error("{category} {handle}: {source}")]
    Alias {
        category: Category,
        handle: Handle,
        #[source]
        source: AliasError,
    },
}

/// Mutable registry used while the registration sequence runs.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    tiles: BTreeMap<Handle, RegistryEntry>,
    items: BTreeMap<Handle, RegistryEntry>,
    aliases: LegacyAliasTable,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tile. Its alias goes into both the tile and the item alias
    /// tables, since a placed tile and its item form shared a save key.
    pub fn register_tile(
        &mut self,
        handle: Handle,
        display_path: Option<&str>,
        id: &str,
    ) -> Result<(), RegistryError> {
        self.register(Category::Tile, handle, display_path, id)
    }

    /// Register an item. Its alias goes into the item alias table only.
    pub fn register_item(
        &mut self,
        handle: Handle,
        display_path: Option<&str>,
        id: &str,
    ) -> Result<(), RegistryError> {
        self.register(Category::Item, handle, display_path, id)
    }

    /// Register one object. A repeated `(category, handle)` replaces the
    /// earlier mapping. Nothing is recorded if the id or alias is malformed.
    pub fn register(
        &mut self,
        category: Category,
        handle: Handle,
        display_path: Option<&str>,
        id: &str,
    ) -> Result<(), RegistryError> {
        let id = Identifier::parse(id).map_err(|source| RegistryError::InvalidId {
            category,
            handle,
            source,
        })?;
        let alias = derive_alias(category, display_path, handle).map_err(|source| {
            RegistryError::Alias {
                category,
                handle,
                source,
            }
        })?;

        if category == Category::Tile {
            self.aliases.insert(Category::Tile, alias.clone(), id.clone());
        }
        self.aliases.insert(Category::Item, alias.clone(), id.clone());

        let entries = match category {
            Category::Tile => &mut self.tiles,
            Category::Item => &mut self.items,
        };
        let entry = RegistryEntry {
            handle,
            category,
            id,
            alias,
        };
        if let Some(previous) = entries.insert(handle, entry) {
            debug!(
                %category,
                handle,
                previous = %previous.id,
                "registration replaced an earlier mapping"
            );
        }
        Ok(())
    }

    /// Finish registration. The returned registry is never mutated again.
    pub fn freeze(self) -> IdRegistry {
        IdRegistry {
            tiles: self.tiles,
            items: self.items,
            aliases: self.aliases,
        }
    }
}

/// Frozen identifier registry.
///
/// Read-only; `&IdRegistry` and `Arc<IdRegistry>` can be used from any
/// number of threads without locking.
#[derive(Debug, Clone)]
pub struct IdRegistry {
    tiles: BTreeMap<Handle, RegistryEntry>,
    items: BTreeMap<Handle, RegistryEntry>,
    aliases: LegacyAliasTable,
}

impl IdRegistry {
    fn table(&self, category: Category) -> &BTreeMap<Handle, RegistryEntry> {
        match category {
            Category::Tile => &self.tiles,
            Category::Item => &self.items,
        }
    }

    /// Current identifier of a legacy handle, or `None` if it was never
    /// registered in that category.
    pub fn lookup(&self, category: Category, handle: Handle) -> Option<&Identifier> {
        self.table(category).get(&handle).map(|entry| &entry.id)
    }

    pub fn lookup_tile(&self, handle: Handle) -> Option<&Identifier> {
        self.lookup(Category::Tile, handle)
    }

    /// Items only. For a tile's item form look up the tile instead.
    pub fn lookup_item(&self, handle: Handle) -> Option<&Identifier> {
        self.lookup(Category::Item, handle)
    }

    /// Map a possibly-legacy identifier to its current form; unknown
    /// identifiers come back unchanged.
    pub fn correct_legacy_id<'a>(&'a self, category: Category, id: &'a Identifier) -> &'a Identifier {
        self.aliases.resolve(category, id).unwrap_or(id)
    }

    pub fn correct_legacy_tile_id<'a>(&'a self, id: &'a Identifier) -> &'a Identifier {
        self.correct_legacy_id(Category::Tile, id)
    }

    pub fn correct_legacy_item_id<'a>(&'a self, id: &'a Identifier) -> &'a Identifier {
        self.correct_legacy_id(Category::Item, id)
    }

    pub fn aliases(&self) -> &LegacyAliasTable {
        &self.aliases
    }

    /// Registered entries of one category in ascending handle order.
    pub fn entries(&self, category: Category) -> impl Iterator<Item = &RegistryEntry> + '_ {
        self.table(category).values()
    }

    pub fn entry(&self, category: Category, handle: Handle) -> Option<&RegistryEntry> {
        self.table(category).get(&handle)
    }

    pub fn len(&self, category: Category) -> usize {
        self.table(category).len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn id(s: &str) -> Identifier {
        Identifier::parse(s).unwrap()
    }

    #[test]
    fn test_lookup_returns_registered_id() {
        let mut b = RegistryBuilder::new();
        b.register_tile(1, Some("tile.stone"), "stone").unwrap();
        b.register_item(256, Some("item.shovelIron"), "iron_shovel").unwrap();
        let reg = b.freeze();

        assert_eq!(reg.lookup_tile(1), Some(&id("minecraft:stone")));
        assert_eq!(reg.lookup_item(256), Some(&id("minecraft:iron_shovel")));
    }

    #[test]
    fn test_lookup_unregistered_is_none() {
        let mut b = RegistryBuilder::new();
        b.register_tile(1, Some("tile.stone"), "stone").unwrap();
        let reg = b.freeze();

        assert_eq!(reg.lookup_tile(0), None);
        assert_eq!(reg.lookup_tile(2), None);
        // Categories never fall through to each other.
        assert_eq!(reg.lookup_item(1), None);
    }

    #[test]
    fn test_overlapping_handles_stay_separate() {
        let mut b = RegistryBuilder::new();
        b.register_tile(5, Some("tile.wood"), "planks").unwrap();
        b.register_item(5, Some("item.thing"), "thing").unwrap();
        let reg = b.freeze();

        assert_eq!(reg.lookup_tile(5), Some(&id("planks")));
        assert_eq!(reg.lookup_item(5), Some(&id("thing")));
    }

    #[test]
    fn test_reregistration_last_write_wins() {
        let mut b = RegistryBuilder::new();
        b.register_item(323, Some("item.sign"), "sign").unwrap();
        b.register_item(323, Some("item.sign"), "oak_sign").unwrap();
        let reg = b.freeze();

        assert_eq!(reg.lookup_item(323), Some(&id("oak_sign")));
        assert_eq!(reg.len(Category::Item), 1);
        assert_eq!(
            reg.correct_legacy_item_id(&id("sign_323")),
            &id("oak_sign")
        );
    }

    #[test]
    fn test_tile_alias_goes_into_both_tables() {
        let mut b = RegistryBuilder::new();
        b.register_tile(5, Some("tile.wool"), "wool").unwrap();
        let reg = b.freeze();

        let alias = id("wool_5");
        assert_eq!(reg.aliases().resolve(Category::Tile, &alias), Some(&id("wool")));
        assert_eq!(reg.aliases().resolve(Category::Item, &alias), Some(&id("wool")));
    }

    #[test]
    fn test_item_alias_only_in_item_table() {
        let mut b = RegistryBuilder::new();
        b.register_item(5, Some("item.cloth"), "cloth").unwrap();
        let reg = b.freeze();

        let alias = id("cloth_5");
        assert!(reg.aliases().contains(Category::Item, &alias));
        assert!(!reg.aliases().contains(Category::Tile, &alias));
        assert_eq!(reg.aliases().len(Category::Tile), 0);
    }

    #[test]
    fn test_correct_legacy_id_identity_fallback() {
        let mut b = RegistryBuilder::new();
        b.register_tile(1, Some("tile.stone"), "stone").unwrap();
        let reg = b.freeze();

        assert_eq!(reg.correct_legacy_tile_id(&id("stone_1")), &id("stone"));
        let unknown = id("modid:copper_ore");
        assert_eq!(reg.correct_legacy_tile_id(&unknown), &unknown);
        // A current id is not an alias of itself.
        let current = id("stone");
        assert!(std::ptr::eq(reg.correct_legacy_tile_id(&current), &current));
    }

    #[test]
    fn test_invalid_id_fails_without_side_effects() {
        let mut b = RegistryBuilder::new();
        let err = b.register_tile(1, Some("tile.stone"), "bad id").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InvalidId {
                category: Category::Tile,
                handle: 1,
                ..
            }
        ));

        let err = b.register_item(300, Some("item"), "thing").unwrap_err();
        assert!(matches!(err, RegistryError::Alias { handle: 300, .. }));

        let reg = b.freeze();
        assert!(reg.is_empty());
        assert!(reg.aliases().is_empty());
    }

    #[test]
    fn test_frozen_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IdRegistry>();
    }

    #[test]
    fn test_rewrite_through_registry_aliases() {
        let mut b = RegistryBuilder::new();
        b.register_tile(1, Some("tile.stone"), "stone").unwrap();
        let reg = b.freeze();

        let mut rec: Map<String, Value> = Map::new();
        rec.insert("stone_1".to_string(), json!(1));
        reg.aliases().rewrite_keys(&mut rec, Category::Item);
        assert_eq!(Value::Object(rec), json!({"minecraft:stone": 1}));
    }
}
