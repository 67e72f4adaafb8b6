/// Vanilla IDs — Namespaced Identifiers
///
/// `namespace:path`, ASCII only. An Identifier is validated once at
/// construction and is immutable afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Namespace used when a string carries no `namespace:` prefix.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Rejected identifier input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("empty namespace in identifier {0:?}")]
    EmptyNamespace(String),
    #[error("empty path in identifier {0:?}")]
    EmptyPath(String),
    #[error("invalid character {ch:?} in identifier {input:?}")]
    InvalidCharacter { input: String, ch: char },
}

/// A namespaced identifier such as `minecraft:stone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    /// Build an identifier from its two parts.
    pub fn new(namespace: &str, path: &str) -> Result<Self, IdentifierError> {
        let full = format!("{}:{}", namespace, path);
        if namespace.is_empty() {
            return Err(IdentifierError::EmptyNamespace(full));
        }
        if path.is_empty() {
            return Err(IdentifierError::EmptyPath(full));
        }
        if let Some(ch) = namespace.chars().find(|&c| !is_namespace_char(c)) {
            return Err(IdentifierError::InvalidCharacter { input: full, ch });
        }
        if let Some(ch) = path.chars().find(|&c| !is_path_char(c)) {
            return Err(IdentifierError::InvalidCharacter { input: full, ch });
        }
        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Identifier in [`DEFAULT_NAMESPACE`].
    pub fn vanilla(path: &str) -> Result<Self, IdentifierError> {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    /// Parse `namespace:path`, or a bare `path` in the default namespace.
    /// Only the first `:` separates; any later `:` is rejected by the path check.
    pub fn parse(s: &str) -> Result<Self, IdentifierError> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::vanilla(s),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
