//! Namespaced identifiers (`namespace:key`), used for recipe references.

use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// Identifier scoped by a namespace, e.g. `minecraft:crafting_table`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamespacedKey {
    namespace: String,
    key: String,
}

impl NamespacedKey {
    pub const MINECRAFT: &'static str = "minecraft";

    /// Creates a key after checking both parts against the host's character set
    /// (`a-z`, `0-9`, `_`, `-`, `.`, plus `/` in the key).
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Result<Self, KeyError> {
        let namespace = namespace.into();
        let key = key.into();
        let namespace_ok = !namespace.is_empty() && namespace.chars().all(is_namespace_char);
        let key_ok = !key.is_empty() && key.chars().all(|c| is_namespace_char(c) || c == '/');
        if !namespace_ok || !key_ok {
            return Err(KeyError::InvalidCharacters(format!("{namespace}:{key}")));
        }
        Ok(Self { namespace, key })
    }

    /// Key in the `minecraft` namespace.
    pub fn minecraft(key: impl Into<String>) -> Result<Self, KeyError> {
        Self::new(Self::MINECRAFT, key)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

fn is_namespace_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-' | '.')
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

impl FromStr for NamespacedKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, key) = s
            .split_once(':')
            .ok_or_else(|| KeyError::MissingSeparator(s.to_owned()))?;
        Self::new(namespace, key)
    }
}
