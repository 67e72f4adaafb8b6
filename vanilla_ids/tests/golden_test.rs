/// Golden tests over the vanilla seed tables.
///
/// The expected fingerprint pins the whole mapping. If it fails, a seed row
/// or the alias derivation changed, and saves written with the old table
/// will no longer migrate the same way.

use std::fs;

use serde_json::{Map, Value};

use vanilla_ids::hashing::canonical_hash;
use vanilla_ids::identifier::Identifier;
use vanilla_ids::invariants::try_validate_invariants;
use vanilla_ids::seed::{ITEMS, TILES};
use vanilla_ids::vanilla::bootstrap;
use vanilla_ids::{Category, SCHEME_VERSION};

fn load_record(path: &str) -> Map<String, Value> {
    let data = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));
    serde_json::from_str(&data).expect("Failed to parse record JSON")
}

fn keys(record: &Map<String, Value>) -> Vec<&str> {
    record.keys().map(|k| k.as_str()).collect()
}

fn id(s: &str) -> Identifier {
    Identifier::parse(s).unwrap()
}

#[test]
fn golden_fingerprint_matches() {
    let registry = bootstrap();
    let hash = canonical_hash(&registry);
    let expected = fs::read_to_string("tests/golden/expected_hash.txt")
        .expect("Failed to read expected_hash.txt")
        .trim()
        .to_string();
    assert_eq!(
        hash, expected,
        "GOLDEN TEST FAILED: the vanilla table fingerprint changed.\n\
         Got:      {}\n\
         Expected: {}",
        hash, expected
    );
}

#[test]
fn bootstrap_is_deterministic() {
    assert_eq!(canonical_hash(&bootstrap()), canonical_hash(&bootstrap()));
}

#[test]
fn every_seed_row_is_looked_up_exactly() {
    let registry = bootstrap();
    for e in TILES {
        assert_eq!(registry.lookup_tile(e.handle), Some(&id(e.id)), "tile {}", e.handle);
    }
    for e in ITEMS {
        assert_eq!(registry.lookup_item(e.handle), Some(&id(e.id)), "item {}", e.handle);
    }
}

#[test]
fn handles_outside_the_seed_are_not_found() {
    let registry = bootstrap();
    for handle in [0, 97, 255, 360, 2255, 2258, u32::MAX] {
        assert_eq!(registry.lookup_tile(handle), None);
        assert_eq!(registry.lookup_item(handle), None);
    }
    // Tile handles are not item handles.
    assert_eq!(registry.lookup_item(1), None);
}

#[test]
fn seed_aliases_are_collision_free() {
    let registry = bootstrap();
    assert_eq!(try_validate_invariants(&registry), Ok(()));
    assert_eq!(registry.aliases().len(Category::Tile), TILES.len());
    assert_eq!(
        registry.aliases().len(Category::Item),
        TILES.len() + ITEMS.len()
    );
}

#[test]
fn known_aliases_resolve() {
    let registry = bootstrap();
    assert_eq!(registry.correct_legacy_tile_id(&id("stone_1")), &id("stone"));
    assert_eq!(registry.correct_legacy_tile_id(&id("tile_36")), &id("moving_piston"));
    assert_eq!(registry.correct_legacy_item_id(&id("emerald_264")), &id("diamond"));
    // Tile aliases are valid item aliases too.
    assert_eq!(registry.correct_legacy_item_id(&id("cloth_35")), &id("wool"));
    let piston_head = registry.entry(Category::Tile, 34).unwrap();
    assert_eq!(piston_head.alias, id("tile_34"));
    // Item aliases are not tile aliases.
    let item_only = id("shovelIron_256");
    assert_eq!(registry.correct_legacy_tile_id(&item_only), &item_only);
}

#[test]
fn legacy_tile_record_migrates() {
    let registry = bootstrap();
    let mut record = load_record("tests/golden/legacy_tiles.json");
    let expected = load_record("tests/golden/migrated_tiles.json");

    let renames = registry.aliases().rewrite_keys(&mut record, Category::Tile);

    assert_eq!(renames.len(), 5);
    assert_eq!(keys(&record), keys(&expected));
    assert_eq!(record, expected);
}

#[test]
fn legacy_item_record_migrates() {
    let registry = bootstrap();
    let mut record = load_record("tests/golden/legacy_items.json");
    let expected = load_record("tests/golden/migrated_items.json");

    registry.aliases().rewrite_keys(&mut record, Category::Item);

    assert_eq!(keys(&record), keys(&expected));
    assert_eq!(record, expected);

    let again = registry.aliases().rewrite_keys(&mut record, Category::Item);
    assert!(again.is_empty());
    assert_eq!(record, expected);
}

#[test]
fn scheme_version_is_one() {
    assert_eq!(SCHEME_VERSION, 1, "SCHEME_VERSION is part of every fingerprint");
}
