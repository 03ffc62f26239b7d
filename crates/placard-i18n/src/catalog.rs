//! Key→string catalogs with per-locale tables.
//!
//! A catalog holds the strings for one resource source. Entries live in a
//! default table plus any number of locale tables; lookups walk a caller
//! supplied locale chain before falling back to the default table.
//!
//! # File format
//!
//! Catalogs are TOML. Top-level string entries form the default table;
//! `[locale]` tables override per locale:
//!
//! ```toml
//! NoEventsFound = "No events found."
//! SaveSuccess = "Your changes have been saved."
//!
//! [de]
//! NoEventsFound = "Keine Veranstaltungen gefunden."
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::error::{I18nError, Result};

/// The strings of one resource source.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Entries not tied to a particular locale.
    default_entries: HashMap<String, String>,
    /// Per-locale overrides.
    locales: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry into the default table.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.default_entries.insert(key.into(), value.into());
    }

    /// Insert an entry into a locale table.
    pub fn insert_localized(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.locales
            .entry(locale.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Parse a catalog from TOML text.
    ///
    /// Top-level string entries land in the default table; top-level tables
    /// are locale tables. Any non-string entry value is rejected.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table = text
            .parse()
            .map_err(|e: toml::de::Error| I18nError::parse(e.message().to_string()))?;

        let mut catalog = Self::new();
        for (key, value) in table {
            match value {
                toml::Value::String(s) => {
                    catalog.default_entries.insert(key, s);
                }
                toml::Value::Table(locale_table) => {
                    let entries = catalog.locales.entry(key).or_default();
                    for (entry_key, entry_value) in locale_table {
                        match entry_value {
                            toml::Value::String(s) => {
                                entries.insert(entry_key, s);
                            }
                            _ => return Err(I18nError::invalid_entry(entry_key)),
                        }
                    }
                }
                _ => return Err(I18nError::invalid_entry(key)),
            }
        }

        tracing::trace!(
            target: "placard_i18n::catalog",
            default_entries = catalog.default_entries.len(),
            locales = catalog.locales.len(),
            "parsed catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| I18nError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Look up a key, trying each locale in `chain` before the default table.
    ///
    /// Returns `None` if no table provides the key.
    pub fn get(&self, chain: &[&str], key: &str) -> Option<&str> {
        for locale in chain {
            if let Some(value) = self.locales.get(*locale).and_then(|t| t.get(key)) {
                return Some(value.as_str());
            }
        }
        self.default_entries.get(key).map(String::as_str)
    }

    /// Iterate over the locale tags this catalog has tables for.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Whether the catalog has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.default_entries.is_empty() && self.locales.values().all(HashMap::is_empty)
    }
}
