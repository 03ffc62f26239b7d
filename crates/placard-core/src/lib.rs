//! Core systems for Placard.
//!
//! This crate provides the foundational components of the Placard status
//! message toolkit:
//!
//! - **Container Tree**: Parent-child ownership, container kinds, naming
//! - **Resource Sources**: Per-container declarations locating string catalogs
//! - **Visibility**: Per-container state with ancestor-aware propagation
//!
//! # Container Tree Example
//!
//! ```
//! use placard_core::{ContainerKind, ContainerTree};
//!
//! let mut tree = ContainerTree::new();
//!
//! // A module is the top-level content unit; it always carries its
//! // designated resource source.
//! let module = tree.register_module("events", "catalogs/events.toml");
//! let panel = tree.register_region("detail_panel");
//! tree.set_parent(panel, Some(module))?;
//!
//! assert_eq!(tree.kind(module)?, ContainerKind::Module);
//! assert_eq!(tree.ancestors(panel)?, vec![module]);
//! # Ok::<(), placard_core::ContainerError>(())
//! ```

pub mod container;
pub mod error;
pub mod logging;

pub use container::{ContainerId, ContainerKind, ContainerTree, SharedContainerTree};
pub use error::{ContainerError, ContainerResult};
