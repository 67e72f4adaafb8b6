/// Vanilla IDs — Bootstrap
///
/// Replays the seed tables through the registration contract (all tiles,
/// then all items), freezes the result and validates it.
///
/// Call once at startup, before any saved data is read. The returned
/// registry is the only table consumers see.

use tracing::debug;

use crate::invariants::{try_validate_invariants, validate_invariants, InvariantViolation};
use crate::registry::{IdRegistry, RegistryBuilder, RegistryError};
use crate::seed::{SeedEntry, ITEMS, TILES};

/// Bootstrap failure: either a malformed row or a broken table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Registration(#[from] RegistryError),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// Build the vanilla registry. Panics if the seed data is malformed;
/// startup must not continue with a partial table.
pub fn bootstrap() -> IdRegistry {
    let registry = match register_all(RegistryBuilder::new(), TILES, ITEMS) {
        Ok(builder) => builder.freeze(),
        Err(e) => panic!("Vanilla id registration failed: {}", e),
    };
    validate_invariants(&registry);
    registry
}

/// Non-panicking variant of `bootstrap`.
pub fn try_bootstrap() -> Result<IdRegistry, BootstrapError> {
    let registry = register_all(RegistryBuilder::new(), TILES, ITEMS)?.freeze();
    try_validate_invariants(&registry)?;
    Ok(registry)
}

/// Replay `tiles` then `items` into `builder`, stopping at the first
/// malformed row.
pub fn register_all(
    mut builder: RegistryBuilder,
    tiles: &[SeedEntry],
    items: &[SeedEntry],
) -> Result<RegistryBuilder, RegistryError> {
    for e in tiles {
        builder.register_tile(e.handle, e.display_path, e.id)?;
    }
    for e in items {
        builder.register_item(e.handle, e.display_path, e.id)?;
    }
    debug!(tiles = tiles.len(), items = items.len(), "registered vanilla ids");
    Ok(builder)
}
