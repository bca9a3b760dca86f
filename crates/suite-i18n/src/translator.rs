//! Active-language text lookup with English fallback.

use suite_core::Language;
use tracing::debug;

use crate::catalog::{Catalog, Result};

const EN_SOURCE: &str = include_str!("../locales/en.yaml");
const ID_SOURCE: &str = include_str!("../locales/id.yaml");

/// Text lookup by dotted localization key.
///
/// This is the only interface the display layer depends on. Lookups never
/// fail: implementations fall back to something printable.
pub trait Localize {
    /// Returns the display text for `key`.
    fn text(&self, key: &str) -> String;
}

impl Localize for Catalog {
    fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}

/// Loads the built-in catalog for a language.
///
/// # Errors
///
/// Returns an error if the embedded catalog is malformed.
pub fn builtin_catalog(language: Language) -> Result<Catalog> {
    let source = match language {
        Language::English => EN_SOURCE,
        Language::Indonesian => ID_SOURCE,
    };
    Catalog::from_yaml(source)
}

/// Looks up text in the active language, then English, then echoes the key.
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    active: Catalog,
    fallback: Catalog,
}

impl Translator {
    /// Create a translator from explicit catalogs.
    pub fn new(language: Language, active: Catalog, fallback: Catalog) -> Self {
        Self {
            language,
            active,
            fallback,
        }
    }

    /// Create a translator backed by the built-in catalogs.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded catalog is malformed.
    pub fn builtin(language: Language) -> Result<Self> {
        let fallback = builtin_catalog(Language::English)?;
        let active = match language {
            Language::English => fallback.clone(),
            other => builtin_catalog(other)?,
        };
        Ok(Self::new(language, active, fallback))
    }

    /// The active language.
    pub fn language(&self) -> Language {
        self.language
    }
}

impl Localize for Translator {
    fn text(&self, key: &str) -> String {
        if let Some(text) = self.active.get(key) {
            return text.to_string();
        }
        if let Some(text) = self.fallback.get(key) {
            debug!(key, language = %self.language, "missing translation, using English");
            return text.to_string();
        }
        debug!(key, "unknown localization key");
        key.to_string()
    }
}
