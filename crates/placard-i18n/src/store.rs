//! Catalog store: resource sources, active locale, lookup.

use std::collections::HashMap;
use std::path::Path;

use crate::catalog::Catalog;
use crate::error::{I18nError, Result};
use crate::key::ResourceKey;

/// Maps resource-source identifiers to their catalogs and performs lookups
/// under the active display locale.
///
/// The lookup contract mirrors what hosting shells expect from a string
/// service: a missing *entry* falls back to the key itself, while a missing
/// *source* is an error, because a declared source nobody mounted is a
/// configuration bug rather than a missing translation.
///
/// # Example
///
/// ```
/// use placard_i18n::{Catalog, CatalogStore, ResourceKey};
///
/// let mut catalog = Catalog::new();
/// catalog.insert("NoEventsFound", "No events found.");
/// catalog.insert_localized("de", "NoEventsFound", "Keine Veranstaltungen gefunden.");
///
/// let mut store = CatalogStore::with_locale("de");
/// store.mount("catalogs/events.toml", catalog);
///
/// let key = ResourceKey::new("NoEventsFound");
/// assert_eq!(
///     store.lookup(&key, "catalogs/events.toml")?,
///     "Keine Veranstaltungen gefunden."
/// );
/// # Ok::<(), placard_i18n::I18nError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogStore {
    catalogs: HashMap<String, Catalog>,
    /// Active display locale, e.g. `"de-AT"`.
    locale: String,
    /// Locales tried, in order, after the active locale and its language
    /// prefix.
    fallback_chain: Vec<String>,
}

impl CatalogStore {
    /// Create a store using the system display locale.
    ///
    /// Falls back to `"en"` when the system locale cannot be detected.
    pub fn new() -> Self {
        let locale = sys_locale::get_locale().unwrap_or_else(|| String::from("en"));
        Self::with_locale(locale)
    }

    /// Create a store with an explicit active locale.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            catalogs: HashMap::new(),
            locale: locale.into(),
            fallback_chain: vec![String::from("en")],
        }
    }

    /// The active display locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Change the active display locale.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    /// Set the fallback chain tried after the active locale.
    pub fn set_fallback_chain(&mut self, chain: Vec<String>) {
        self.fallback_chain = chain;
    }

    /// Mount a catalog under a resource-source identifier.
    pub fn mount(&mut self, source: impl Into<String>, catalog: Catalog) {
        let source = source.into();
        tracing::trace!(target: "placard_i18n::store", %source, "mounted catalog");
        self.catalogs.insert(source, catalog);
    }

    /// Load a catalog file and mount it under its path as the source
    /// identifier.
    pub fn load_source(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let catalog = Catalog::load(path)?;
        self.mount(path.to_string_lossy().into_owned(), catalog);
        Ok(())
    }

    /// Check whether a catalog is mounted for a source identifier.
    pub fn is_mounted(&self, source: &str) -> bool {
        self.catalogs.contains_key(source)
    }

    /// Look up the display string for `key` in the catalog mounted under
    /// `source`.
    ///
    /// Walks the active locale, its bare language tag, then the fallback
    /// chain, then the catalog's default table. A missing entry returns the
    /// key verbatim; an unmounted source is an error.
    pub fn lookup(&self, key: &ResourceKey, source: &str) -> Result<String> {
        let catalog = self
            .catalogs
            .get(source)
            .ok_or_else(|| I18nError::unknown_source(source))?;

        let chain = self.locale_chain();
        match catalog.get(&chain, key.as_str()) {
            Some(value) => Ok(value.to_string()),
            None => {
                tracing::debug!(
                    target: "placard_i18n::store",
                    %key,
                    %source,
                    "no catalog entry for key, returning key verbatim"
                );
                Ok(key.as_str().to_string())
            }
        }
    }

    /// The ordered list of locale tags a lookup walks.
    fn locale_chain(&self) -> Vec<&str> {
        let mut chain = vec![self.locale.as_str()];
        // "de-AT" also tries "de" before any fallback.
        if let Some((language, _)) = self.locale.split_once(['-', '_']) {
            if !chain.contains(&language) {
                chain.push(language);
            }
        }
        for fallback in &self.fallback_chain {
            if !chain.contains(&fallback.as_str()) {
                chain.push(fallback);
            }
        }
        chain
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert("NoEventsFound", "No events found.");
        catalog.insert("SaveSuccess", "Your changes have been saved.");
        catalog.insert_localized("de", "NoEventsFound", "Keine Veranstaltungen gefunden.");
        catalog
    }

    #[test]
    fn lookup_uses_active_locale() {
        let mut store = CatalogStore::with_locale("de");
        store.mount("events", sample_catalog());

        let key = ResourceKey::new("NoEventsFound");
        assert_eq!(
            store.lookup(&key, "events").unwrap(),
            "Keine Veranstaltungen gefunden."
        );
    }

    #[test]
    fn regional_locale_tries_bare_language() {
        let mut store = CatalogStore::with_locale("de-AT");
        store.mount("events", sample_catalog());

        let key = ResourceKey::new("NoEventsFound");
        assert_eq!(
            store.lookup(&key, "events").unwrap(),
            "Keine Veranstaltungen gefunden."
        );
    }

    #[test]
    fn falls_back_to_default_table() {
        let mut store = CatalogStore::with_locale("de");
        store.mount("events", sample_catalog());

        let key = ResourceKey::new("SaveSuccess");
        assert_eq!(
            store.lookup(&key, "events").unwrap(),
            "Your changes have been saved."
        );
    }

    #[test]
    fn missing_entry_returns_key_verbatim() {
        let mut store = CatalogStore::with_locale("en");
        store.mount("events", sample_catalog());

        let key = ResourceKey::new("NotInCatalog");
        assert_eq!(store.lookup(&key, "events").unwrap(), "NotInCatalog");
    }

    #[test]
    fn unknown_source_is_an_error() {
        let store = CatalogStore::with_locale("en");
        let key = ResourceKey::new("NoEventsFound");
        let result = store.lookup(&key, "not-mounted");
        assert!(matches!(result, Err(I18nError::UnknownSource { .. })));
    }

    #[test]
    fn fallback_chain_is_honored() {
        let mut catalog = Catalog::new();
        catalog.insert_localized("fr", "Greeting", "Bonjour");

        let mut store = CatalogStore::with_locale("de");
        store.set_fallback_chain(vec![String::from("fr")]);
        store.mount("greetings", catalog);

        let key = ResourceKey::new("Greeting");
        assert_eq!(store.lookup(&key, "greetings").unwrap(), "Bonjour");
    }

    #[test]
    fn set_locale_changes_resolution() {
        let mut store = CatalogStore::with_locale("en");
        store.mount("events", sample_catalog());

        let key = ResourceKey::new("NoEventsFound");
        assert_eq!(store.lookup(&key, "events").unwrap(), "No events found.");

        store.set_locale("de");
        assert_eq!(
            store.lookup(&key, "events").unwrap(),
            "Keine Veranstaltungen gefunden."
        );
    }

    #[test]
    fn load_source_mounts_under_path() {
        use std::io::Write as _;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Greeting = \"Hello\"\n").unwrap();

        let mut store = CatalogStore::with_locale("en");
        store.load_source(file.path()).unwrap();

        let source = file.path().to_string_lossy().into_owned();
        assert!(store.is_mounted(&source));

        let key = ResourceKey::new("Greeting");
        assert_eq!(store.lookup(&key, &source).unwrap(), "Hello");
    }
}
