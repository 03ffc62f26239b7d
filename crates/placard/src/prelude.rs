//! Prelude module for Placard.
//!
//! Re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use placard::prelude::*;
//! ```

// ============================================================================
// Container Tree
// ============================================================================

pub use placard_core::{ContainerId, ContainerKind, ContainerTree, SharedContainerTree};

// ============================================================================
// Resource Catalogs
// ============================================================================

pub use placard_i18n::{Catalog, CatalogStore, ResourceKey};

// ============================================================================
// Status Messages
// ============================================================================

pub use crate::message::{MessageKind, Rendered, StatusMessage};
pub use crate::resolve::{ResolveError, resolve_text};
