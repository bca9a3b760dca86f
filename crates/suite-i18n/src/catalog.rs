//! Flat text catalogs keyed by dotted identifiers.
//!
//! Catalogs are written as nested YAML mappings and flattened on load, so
//! `status: { name: Name }` is looked up as `status.name`.

use std::collections::HashMap;

use serde_yaml::Value;
use thiserror::Error;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source is not valid YAML.
    #[error("failed to parse catalog: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// A value had a shape that cannot be used as display text.
    #[error("unsupported value at '{key}': {reason}")]
    Unsupported {
        /// Dotted key of the offending value.
        key: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

/// A specialized `Result` type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Text lookup by dotted key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parse a catalog from a YAML document.
    ///
    /// An empty document yields an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ParseError`] for invalid YAML and
    /// [`CatalogError::Unsupported`] for sequences, non-string keys, or a
    /// top-level value that is not a mapping.
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }

        let root: Value = serde_yaml::from_str(source)?;
        let mut entries = HashMap::new();
        match root {
            Value::Mapping(_) => flatten("", &root, &mut entries)?,
            Value::Null => {}
            _ => {
                return Err(CatalogError::Unsupported {
                    key: String::new(),
                    reason: "catalog root must be a mapping",
                });
            }
        }
        Ok(Self { entries })
    }

    /// Build a catalog from explicit key/text pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the text for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of keys in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) -> Result<()> {
    match value {
        Value::Mapping(map) => {
            for (k, v) in map {
                let segment = match k {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => {
                        return Err(CatalogError::Unsupported {
                            key: prefix.to_string(),
                            reason: "keys must be scalars",
                        });
                    }
                };
                let key = if prefix.is_empty() {
                    segment
                } else {
                    format!("{prefix}.{segment}")
                };
                flatten(&key, v, out)?;
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        Value::Null => {
            out.insert(prefix.to_string(), String::new());
        }
        Value::Sequence(_) => {
            return Err(CatalogError::Unsupported {
                key: prefix.to_string(),
                reason: "sequences are not display text",
            });
        }
        Value::Tagged(tagged) => flatten(prefix, &tagged.value, out)?,
    }
    Ok(())
}
