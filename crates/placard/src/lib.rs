//! Placard - a status message control with hierarchical resource-text
//! resolution.
//!
//! A [`StatusMessage`] displays an error, warning, success, or informational
//! message inside a hosting container. Its text is either set directly or
//! named by a [`ResourceKey`](placard_i18n::ResourceKey); in the latter case
//! the control resolves the key by climbing the container tree to the nearest
//! ancestor that declares a resource source (see [`resolve_text`]).
//!
//! # Example
//!
//! ```
//! use placard::prelude::*;
//!
//! let tree = SharedContainerTree::new();
//! let module = tree.register_module("events", "events-catalog");
//! let panel = tree.register_region("detail_panel");
//! tree.set_parent(panel, Some(module))?;
//!
//! let mut catalog = Catalog::new();
//! catalog.insert("NoEventsFound", "No events found.");
//! let mut catalogs = CatalogStore::with_locale("en");
//! catalogs.mount("events-catalog", catalog);
//!
//! let mut message = StatusMessage::new(&tree, panel)?;
//! message.set_kind(MessageKind::Warning);
//! message.set_resource_key("NoEventsFound");
//! message.prepare(&catalogs)?;
//!
//! let rendered = message.render().expect("visible message renders");
//! assert_eq!(rendered.text, "No events found.");
//! assert_eq!(rendered.class_attribute, "placard-message placard-message-warning");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod message;
pub mod prelude;
pub mod resolve;

pub use message::{MessageKind, Rendered, StatusMessage};
pub use resolve::{ResolveError, resolve_text};

/// Container tree module.
pub mod container {
    pub use placard_core::*;
}

/// Resource catalog module.
pub mod i18n {
    pub use placard_i18n::*;
}
