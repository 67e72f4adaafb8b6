/// Vanilla IDs — Canonical Hashing
///
/// Deterministic canonical serialization + SHA-256 fingerprint of a frozen
/// registry. Two registries hash equal iff they map the same handles and
/// aliases to the same identifiers.
///
/// Rules:
///   - Entries sorted by handle
///   - Aliases sorted by alias string (UTF-8 byte order)
///   - Top-level fields in fixed order
///   - UTF-8 JSON, no whitespace

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::Category;
use crate::registry::IdRegistry;
use crate::SCHEME_VERSION;

/// Canonical serialization of a registry to UTF-8 JSON bytes.
pub fn canonical_serialize(registry: &IdRegistry) -> Vec<u8> {
    build_canonical_value(registry).to_string().into_bytes()
}

/// SHA-256 of the canonical serialization. Lowercase hex.
pub fn canonical_hash(registry: &IdRegistry) -> String {
    hex_digest(&canonical_serialize(registry))
}

fn hex_digest(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Field order: scheme_version, tiles, items, tile_aliases, item_aliases.
fn build_canonical_value(registry: &IdRegistry) -> Value {
    let mut root = Map::new();
    root.insert(
        "scheme_version".to_string(),
        Value::Number(SCHEME_VERSION.into()),
    );
    root.insert("tiles".to_string(), entries_value(registry, Category::Tile));
    root.insert("items".to_string(), entries_value(registry, Category::Item));
    root.insert(
        "tile_aliases".to_string(),
        aliases_value(registry, Category::Tile),
    );
    root.insert(
        "item_aliases".to_string(),
        aliases_value(registry, Category::Item),
    );
    Value::Object(root)
}

fn entries_value(registry: &IdRegistry, category: Category) -> Value {
    // entries() is already in handle order
    let list = registry
        .entries(category)
        .map(|entry| {
            let mut m = Map::new();
            m.insert("handle".to_string(), Value::Number(entry.handle.into()));
            m.insert("id".to_string(), Value::String(entry.id.to_string()));
            Value::Object(m)
        })
        .collect();
    Value::Array(list)
}

fn aliases_value(registry: &IdRegistry, category: Category) -> Value {
    let mut pairs: Vec<(String, String)> = registry
        .aliases()
        .iter(category)
        .map(|entry| (entry.alias.to_string(), entry.current.to_string()))
        .collect();
    pairs.sort();

    let list = pairs
        .into_iter()
        .map(|(alias, id)| {
            let mut m = Map::new();
            m.insert("alias".to_string(), Value::String(alias));
            m.insert("id".to_string(), Value::String(id));
            Value::Object(m)
        })
        .collect();
    Value::Array(list)
}
