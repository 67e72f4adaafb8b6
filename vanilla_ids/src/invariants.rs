/// Vanilla IDs — Invariant Checks
///
/// The registry accepts alias collisions (last registration wins), so these
/// checks are how a table is shown to be collision-free. `bootstrap` runs
/// them over the seed data; hosts registering extra objects can run them too.

use std::collections::BTreeMap;

use crate::domain::Category;
use crate::identifier::Identifier;
use crate::registry::IdRegistry;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("alias {alias} is derived by both {first} and {second} in the {category} table")]
    AliasCollision {
        category: Category,
        alias: Identifier,
        first: String,
        second: String,
    },
    #[error("alias {alias} in the {category} table is also a current identifier")]
    ChainedAlias {
        category: Category,
        alias: Identifier,
    },
    #[error("tile alias {alias} is missing from the item table")]
    TileAliasNotShared { alias: Identifier },
}

/// Run every check. Panics on the first failure.
pub fn validate_invariants(registry: &IdRegistry) {
    if let Err(violation) = try_validate_invariants(registry) {
        panic!("Invariant violation: {}", violation);
    }
}

/// Non-panicking variant of `validate_invariants`.
pub fn try_validate_invariants(registry: &IdRegistry) -> Result<(), InvariantViolation> {
    check_alias_collisions(registry)?;
    check_no_chained_aliases(registry)?;
    check_tile_aliases_shared(registry)?;
    Ok(())
}

/// Each table must be fed by distinct aliases. The item table also receives
/// every tile alias.
fn check_alias_collisions(registry: &IdRegistry) -> Result<(), InvariantViolation> {
    for category in Category::ALL {
        let mut sources: Vec<Category> = vec![Category::Tile];
        if category == Category::Item {
            sources.push(Category::Item);
        }

        let mut seen: BTreeMap<&Identifier, String> = BTreeMap::new();
        for source in sources {
            for entry in registry.entries(source) {
                let owner = format!("{} {}", source, entry.handle);
                if let Some(first) = seen.insert(&entry.alias, owner.clone()) {
                    return Err(InvariantViolation::AliasCollision {
                        category,
                        alias: entry.alias.clone(),
                        first,
                        second: owner,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Rewriting must not depend on alias order: no alias may also be a target.
fn check_no_chained_aliases(registry: &IdRegistry) -> Result<(), InvariantViolation> {
    let aliases = registry.aliases();
    for category in Category::ALL {
        for entry in aliases.iter(category) {
            if aliases.contains(category, &entry.current) {
                return Err(InvariantViolation::ChainedAlias {
                    category,
                    alias: entry.current,
                });
            }
        }
    }
    Ok(())
}

fn check_tile_aliases_shared(registry: &IdRegistry) -> Result<(), InvariantViolation> {
    let aliases = registry.aliases();
    for entry in aliases.iter(Category::Tile) {
        if !aliases.contains(Category::Item, &entry.alias) {
            return Err(InvariantViolation::TileAliasNotShared { alias: entry.alias });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;

    #[test]
    fn test_clean_registry_passes() {
        let mut b = RegistryBuilder::new();
        b.register_tile(1, Some("tile.stone"), "stone").unwrap();
        b.register_item(256, Some("item.shovelIron"), "iron_shovel").unwrap();
        assert_eq!(try_validate_invariants(&b.freeze()), Ok(()));
    }

    #[test]
    fn test_detects_collision_between_tile_and_item() {
        // Same handle and name in both categories: identical alias.
        let mut b = RegistryBuilder::new();
        b.register_tile(300, Some("tile.thing"), "thing_block").unwrap();
        b.register_item(300, Some("item.thing"), "thing_item").unwrap();
        let err = try_validate_invariants(&b.freeze()).unwrap_err();
        assert!(matches!(
            err,
            InvariantViolation::AliasCollision {
                category: Category::Item,
                ..
            }
        ));
    }

    #[test]
    fn test_detects_chained_alias() {
        // `a_1` maps to `b_2`, which is itself an alias.
        let mut b = RegistryBuilder::new();
        b.register_tile(1, Some("tile.a"), "b_2").unwrap();
        b.register_tile(2, Some("tile.b"), "b").unwrap();
        let err = try_validate_invariants(&b.freeze()).unwrap_err();
        assert!(matches!(err, InvariantViolation::ChainedAlias { .. }));
    }

    #[test]
    #[should_panic(expected = "Invariant violation")]
    fn test_validate_panics() {
        let mut b = RegistryBuilder::new();
        b.register_tile(1, Some("tile.a"), "b_2").unwrap();
        b.register_tile(2, Some("tile.b"), "b").unwrap();
        validate_invariants(&b.freeze());
    }
}
