//! Localized text for the suite console.
//!
//! Provides the [`Localize`] lookup trait, YAML-backed [`Catalog`]s, and a
//! [`Translator`] over the built-in English and Indonesian catalogs.

pub mod catalog;
pub mod translator;

pub use catalog::{Catalog, CatalogError};
pub use translator::{Localize, Translator, builtin_catalog};
