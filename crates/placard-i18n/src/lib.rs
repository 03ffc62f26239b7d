//! Resource catalogs for Placard.
//!
//! A *resource source* is a catalog of key→string mappings located by a
//! path/identifier. This crate provides:
//!
//! - **[`Catalog`]**: the strings of one source, with per-locale tables,
//!   parsed from TOML or built in memory
//! - **[`CatalogStore`]**: mounts catalogs under source identifiers and
//!   answers lookups under the active display locale
//! - **[`ResourceKey`]**: opaque identifier naming one entry within a source
//!
//! Pluralization, interpolation, and text shaping are deliberately out of
//! scope; entries are plain strings.
//!
//! # Example
//!
//! ```
//! use placard_i18n::{Catalog, CatalogStore, ResourceKey};
//!
//! let catalog = Catalog::from_toml_str(r#"
//! NoEventsFound = "No events found."
//!
//! [de]
//! NoEventsFound = "Keine Veranstaltungen gefunden."
//! "#)?;
//!
//! let mut store = CatalogStore::with_locale("de");
//! store.mount("catalogs/events.toml", catalog);
//!
//! let key = ResourceKey::new("NoEventsFound");
//! assert_eq!(
//!     store.lookup(&key, "catalogs/events.toml")?,
//!     "Keine Veranstaltungen gefunden."
//! );
//! # Ok::<(), placard_i18n::I18nError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod key;
pub mod store;

pub use catalog::Catalog;
pub use error::{I18nError, Result};
pub use key::ResourceKey;
pub use store::CatalogStore;
