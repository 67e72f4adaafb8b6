#![forbid(unsafe_code)]

//! Vanilla tile and item identifiers, and migration of legacy save keys.
//!
//! Build the table once with [`vanilla::bootstrap`], then share the frozen
//! [`IdRegistry`] with every reader. Saved registry records are migrated
//! in place with [`LegacyAliasTable::rewrite_keys`].

/// Version of the legacy → current mapping. Bumping it invalidates
/// every recorded fingerprint.
pub const SCHEME_VERSION: u32 = 1;

pub mod alias;
pub mod domain;
pub mod hashing;
pub mod identifier;
pub mod invariants;
pub mod record;
pub mod registry;
pub mod seed;
pub mod vanilla;

pub use alias::LegacyAliasTable;
pub use domain::{Category, Handle, KeyRename};
pub use identifier::{Identifier, IdentifierError, DEFAULT_NAMESPACE};
pub use record::PersistedRecord;
pub use registry::{IdRegistry, RegistryBuilder, RegistryError};
