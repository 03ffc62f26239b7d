//! Container tree for Placard.
//!
//! Provides the container model the rest of the toolkit hangs off of:
//! - Unique container identifiers via arena-based storage
//! - Parent-child ownership relationships with cascade removal
//! - Container kinds, with [`ContainerKind::Module`] as the distinguished
//!   top-level content unit
//! - Per-container resource-source declarations for localized text lookup
//! - Visibility state with ancestor-aware effective visibility
//!
//! # Key Types
//!
//! - [`ContainerId`] - Unique stable identifier for each container
//! - [`ContainerKind`] - Module, region, or leaf control
//! - [`ContainerTree`] - The tree itself
//! - [`SharedContainerTree`] - Thread-safe, cloneable handle to a tree

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

use crate::error::{ContainerError, ContainerResult};

new_key_type! {
    /// A unique identifier for a container in the tree.
    ///
    /// `ContainerId`s are stable handles that remain valid as the tree
    /// changes shape. They become invalid when the container is removed.
    pub struct ContainerId;
}

impl ContainerId {
    /// Convert the ContainerId to a raw u64 value.
    ///
    /// Useful for interop with external systems that need a numeric ID.
    /// The raw value can be converted back using [`ContainerId::from_raw`].
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a ContainerId from a raw u64 value.
    ///
    /// Note: this does not check that the ID exists in any tree.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

/// The kind of a container in the tree.
///
/// The kind drives resource-text resolution: a [`Module`](Self::Module)
/// parent terminates the ancestor search with its designated resource
/// source, while a [`Region`](Self::Region) only participates if it has
/// explicitly declared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Top-level content unit. Registered together with its designated
    /// resource source.
    Module,
    /// A layout region. Regions nest arbitrarily deep and may declare a
    /// resource source for the subtree below them.
    Region,
    /// A leaf control.
    Control,
}

impl ContainerKind {
    /// The kind as a static string, for logging and debug output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Module => "Module",
            Self::Region => "Region",
            Self::Control => "Control",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Internal data stored for each container.
struct ContainerData {
    /// Human-readable name for debugging and tree dumps.
    name: String,
    /// The container's kind.
    kind: ContainerKind,
    /// Parent container (if any).
    parent: Option<ContainerId>,
    /// Child containers (owned).
    children: Vec<ContainerId>,
    /// Declared resource source, a path/identifier locating a catalog of
    /// localized strings. Always `Some` for modules.
    resource_source: Option<String>,
    /// Whether the container is visible (its own state, not considering
    /// ancestors).
    visible: bool,
}

impl ContainerData {
    fn new(kind: ContainerKind, name: String, resource_source: Option<String>) -> Self {
        Self {
            name,
            kind,
            parent: None,
            children: Vec::new(),
            resource_source,
            visible: true,
        }
    }
}

/// A rooted tree of nested containers.
///
/// Uses arena-based storage via SlotMap for stable container IDs and
/// efficient parent-child relationship management.
///
/// # Related Types
///
/// - [`SharedContainerTree`] - Thread-safe cloneable handle
/// - [`ContainerId`] - Keys into this tree
pub struct ContainerTree {
    containers: SlotMap<ContainerId, ContainerData>,
}

impl ContainerTree {
    /// Create a new empty container tree.
    pub fn new() -> Self {
        Self {
            containers: SlotMap::with_key(),
        }
    }

    /// Register a module, the top-level content unit.
    ///
    /// A module always carries its designated resource source, so it is
    /// supplied at registration and can never be absent.
    pub fn register_module(
        &mut self,
        name: impl Into<String>,
        resource_source: impl Into<String>,
    ) -> ContainerId {
        self.register(ContainerKind::Module, name.into(), Some(resource_source.into()))
    }

    /// Register a layout region.
    ///
    /// Regions start without a resource source; declare one with
    /// [`set_resource_source`](Self::set_resource_source).
    pub fn register_region(&mut self, name: impl Into<String>) -> ContainerId {
        self.register(ContainerKind::Region, name.into(), None)
    }

    /// Register a leaf control.
    pub fn register_control(&mut self, name: impl Into<String>) -> ContainerId {
        self.register(ContainerKind::Control, name.into(), None)
    }

    fn register(
        &mut self,
        kind: ContainerKind,
        name: String,
        resource_source: Option<String>,
    ) -> ContainerId {
        let id = self
            .containers
            .insert(ContainerData::new(kind, name, resource_source));
        tracing::trace!(target: "placard_core::container", ?id, %kind, "registered container");
        id
    }

    /// Remove a container and all its children from the tree.
    ///
    /// Removing a parent also removes all of its descendants.
    #[tracing::instrument(skip(self), target = "placard_core::container", level = "trace")]
    pub fn remove(&mut self, id: ContainerId) -> ContainerResult<()> {
        let descendants = self.collect_descendants(id)?;
        tracing::trace!(
            target: "placard_core::container",
            ?id,
            descendant_count = descendants.len(),
            "removing container subtree"
        );

        // Detach from the parent's children list.
        if let Some(data) = self.containers.get(id) {
            if let Some(parent_id) = data.parent {
                if let Some(parent_data) = self.containers.get_mut(parent_id) {
                    parent_data.children.retain(|&child| child != id);
                }
            }
        }

        for child_id in descendants {
            self.containers.remove(child_id);
        }
        self.containers.remove(id);

        Ok(())
    }

    /// Collect all descendant IDs in depth-first order (children before parents).
    fn collect_descendants(&self, id: ContainerId) -> ContainerResult<Vec<ContainerId>> {
        let mut result = Vec::new();
        self.collect_descendants_recursive(id, &mut result)?;
        Ok(result)
    }

    fn collect_descendants_recursive(
        &self,
        id: ContainerId,
        result: &mut Vec<ContainerId>,
    ) -> ContainerResult<()> {
        let data = self
            .containers
            .get(id)
            .ok_or(ContainerError::InvalidContainerId)?;
        for &child_id in &data.children {
            self.collect_descendants_recursive(child_id, result)?;
            result.push(child_id);
        }
        Ok(())
    }

    /// Check if a container exists in the tree.
    pub fn contains(&self, id: ContainerId) -> bool {
        self.containers.contains_key(id)
    }

    /// Set the parent of a container.
    ///
    /// This handles removing from the old parent and adding to the new
    /// parent. Passing `None` makes the container a root.
    pub fn set_parent(
        &mut self,
        id: ContainerId,
        new_parent: Option<ContainerId>,
    ) -> ContainerResult<()> {
        if !self.containers.contains_key(id) {
            return Err(ContainerError::InvalidContainerId);
        }

        if let Some(parent_id) = new_parent {
            if !self.containers.contains_key(parent_id) {
                return Err(ContainerError::InvalidContainerId);
            }
            if self.is_ancestor_of(id, parent_id)? {
                return Err(ContainerError::CircularParentage);
            }
        }

        // Remove from the old parent.
        let old_parent = self.containers.get(id).and_then(|d| d.parent);
        if let Some(old_parent_id) = old_parent {
            if let Some(parent_data) = self.containers.get_mut(old_parent_id) {
                parent_data.children.retain(|&child| child != id);
            }
        }

        if let Some(data) = self.containers.get_mut(id) {
            data.parent = new_parent;
        }

        if let Some(parent_id) = new_parent {
            if let Some(parent_data) = self.containers.get_mut(parent_id) {
                parent_data.children.push(id);
            }
        }

        Ok(())
    }

    /// Check if `potential_ancestor` is an ancestor of `id`.
    fn is_ancestor_of(
        &self,
        potential_ancestor: ContainerId,
        id: ContainerId,
    ) -> ContainerResult<bool> {
        let mut current = Some(id);
        while let Some(current_id) = current {
            if current_id == potential_ancestor {
                return Ok(true);
            }
            current = self.containers.get(current_id).and_then(|d| d.parent);
        }
        Ok(false)
    }

    /// Get the parent of a container.
    pub fn parent(&self, id: ContainerId) -> ContainerResult<Option<ContainerId>> {
        self.containers
            .get(id)
            .map(|d| d.parent)
            .ok_or(ContainerError::InvalidContainerId)
    }

    /// Get the children of a container.
    pub fn children(&self, id: ContainerId) -> ContainerResult<&[ContainerId]> {
        self.containers
            .get(id)
            .map(|d| d.children.as_slice())
            .ok_or(ContainerError::InvalidContainerId)
    }

    /// Get the kind of a container.
    pub fn kind(&self, id: ContainerId) -> ContainerResult<ContainerKind> {
        self.containers
            .get(id)
            .map(|d| d.kind)
            .ok_or(ContainerError::InvalidContainerId)
    }

    /// Get the container's name.
    pub fn name(&self, id: ContainerId) -> ContainerResult<&str> {
        self.containers
            .get(id)
            .map(|d| d.name.as_str())
            .ok_or(ContainerError::InvalidContainerId)
    }

    /// Set the container's name.
    pub fn set_name(&mut self, id: ContainerId, name: impl Into<String>) -> ContainerResult<()> {
        self.containers
            .get_mut(id)
            .map(|d| d.name = name.into())
            .ok_or(ContainerError::InvalidContainerId)
    }

    /// Get the container's declared resource source, if any.
    ///
    /// Always `Some` for modules.
    pub fn resource_source(&self, id: ContainerId) -> ContainerResult<Option<&str>> {
        self.containers
            .get(id)
            .map(|d| d.resource_source.as_deref())
            .ok_or(ContainerError::InvalidContainerId)
    }

    /// Declare a resource source on a container.
    ///
    /// The nearest declaring ancestor wins during resource-text resolution,
    /// so declaring a source on a region scopes a catalog to its subtree.
    pub fn set_resource_source(
        &mut self,
        id: ContainerId,
        source: impl Into<String>,
    ) -> ContainerResult<()> {
        let data = self
            .containers
            .get_mut(id)
            .ok_or(ContainerError::InvalidContainerId)?;
        let source = source.into();
        tracing::trace!(target: "placard_core::container", ?id, %source, "declared resource source");
        data.resource_source = Some(source);
        Ok(())
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if a container is visible (its own state, not considering
    /// ancestors).
    pub fn is_visible(&self, id: ContainerId) -> ContainerResult<bool> {
        self.containers
            .get(id)
            .map(|d| d.visible)
            .ok_or(ContainerError::InvalidContainerId)
    }

    /// Set the visible state of a container.
    pub fn set_visible(&mut self, id: ContainerId, visible: bool) -> ContainerResult<()> {
        self.containers
            .get_mut(id)
            .map(|d| d.visible = visible)
            .ok_or(ContainerError::InvalidContainerId)
    }

    /// Check if a container is effectively visible (itself and all
    /// ancestors are visible).
    ///
    /// Returns `false` if the container or any ancestor is hidden.
    pub fn is_effectively_visible(&self, id: ContainerId) -> ContainerResult<bool> {
        let data = self
            .containers
            .get(id)
            .ok_or(ContainerError::InvalidContainerId)?;

        if !data.visible {
            return Ok(false);
        }

        let mut current = data.parent;
        while let Some(current_id) = current {
            match self.containers.get(current_id) {
                Some(ancestor) => {
                    if !ancestor.visible {
                        return Ok(false);
                    }
                    current = ancestor.parent;
                }
                None => break,
            }
        }

        Ok(true)
    }

    // =========================================================================
    // Tree Traversal
    // =========================================================================

    /// Get all ancestors of a container from immediate parent to root.
    pub fn ancestors(&self, id: ContainerId) -> ContainerResult<Vec<ContainerId>> {
        if !self.containers.contains_key(id) {
            return Err(ContainerError::InvalidContainerId);
        }

        let mut result = Vec::new();
        let mut current = self.containers.get(id).and_then(|d| d.parent);

        while let Some(current_id) = current {
            result.push(current_id);
            current = self.containers.get(current_id).and_then(|d| d.parent);
        }

        Ok(result)
    }

    /// Iterate over all root containers (containers with no parent).
    pub fn roots(&self) -> impl Iterator<Item = ContainerId> + '_ {
        self.containers
            .iter()
            .filter(|(_, data)| data.parent.is_none())
            .map(|(id, _)| id)
    }

    /// Get the number of containers in the tree.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Check if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    // =========================================================================
    // Debug / Diagnostics
    // =========================================================================

    /// Debug dump of a container subtree.
    pub fn dump_tree(&self, id: ContainerId) -> ContainerResult<String> {
        let mut output = String::new();
        self.dump_tree_recursive(id, 0, &mut output)?;
        Ok(output)
    }

    fn dump_tree_recursive(
        &self,
        id: ContainerId,
        depth: usize,
        output: &mut String,
    ) -> ContainerResult<()> {
        use std::fmt::Write as _;

        let data = self
            .containers
            .get(id)
            .ok_or(ContainerError::InvalidContainerId)?;
        let indent = "  ".repeat(depth);
        let name_display = if data.name.is_empty() {
            "(unnamed)"
        } else {
            &data.name
        };
        let _ = write!(output, "{}{} ({})", indent, name_display, data.kind);
        if let Some(source) = &data.resource_source {
            let _ = write!(output, " [source: {source}]");
        }
        output.push('\n');
        for &child_id in &data.children {
            self.dump_tree_recursive(child_id, depth + 1, output)?;
        }
        Ok(())
    }
}

impl Default for ContainerTree {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe, cloneable handle to a [`ContainerTree`].
///
/// Clones share the same underlying tree. Each render cycle typically owns
/// one tree; controls hold a clone of the handle so they can deregister
/// themselves on drop.
#[derive(Clone)]
pub struct SharedContainerTree {
    inner: Arc<RwLock<ContainerTree>>,
}

impl SharedContainerTree {
    /// Create a handle to a new empty tree.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(ContainerTree::new())),
        }
    }

    /// Register a module with its designated resource source.
    pub fn register_module(
        &self,
        name: impl Into<String>,
        resource_source: impl Into<String>,
    ) -> ContainerId {
        self.inner.write().register_module(name, resource_source)
    }

    /// Register a layout region.
    pub fn register_region(&self, name: impl Into<String>) -> ContainerId {
        self.inner.write().register_region(name)
    }

    /// Register a leaf control.
    pub fn register_control(&self, name: impl Into<String>) -> ContainerId {
        self.inner.write().register_control(name)
    }

    /// Remove a container and its children.
    pub fn remove(&self, id: ContainerId) -> ContainerResult<()> {
        self.inner.write().remove(id)
    }

    /// Check if a container exists.
    pub fn contains(&self, id: ContainerId) -> bool {
        self.inner.read().contains(id)
    }

    /// Set the parent of a container.
    pub fn set_parent(&self, id: ContainerId, parent: Option<ContainerId>) -> ContainerResult<()> {
        self.inner.write().set_parent(id, parent)
    }

    /// Get the parent of a container.
    pub fn parent(&self, id: ContainerId) -> ContainerResult<Option<ContainerId>> {
        self.inner.read().parent(id)
    }

    /// Get the children of a container (returns an owned Vec for thread safety).
    pub fn children(&self, id: ContainerId) -> ContainerResult<Vec<ContainerId>> {
        self.inner.read().children(id).map(|c| c.to_vec())
    }

    /// Get the kind of a container.
    pub fn kind(&self, id: ContainerId) -> ContainerResult<ContainerKind> {
        self.inner.read().kind(id)
    }

    /// Get the container's name.
    pub fn name(&self, id: ContainerId) -> ContainerResult<String> {
        self.inner.read().name(id).map(|s| s.to_string())
    }

    /// Set the container's name.
    pub fn set_name(&self, id: ContainerId, name: impl Into<String>) -> ContainerResult<()> {
        self.inner.write().set_name(id, name)
    }

    /// Get the container's declared resource source, if any.
    pub fn resource_source(&self, id: ContainerId) -> ContainerResult<Option<String>> {
        self.inner
            .read()
            .resource_source(id)
            .map(|s| s.map(str::to_string))
    }

    /// Declare a resource source on a container.
    pub fn set_resource_source(
        &self,
        id: ContainerId,
        source: impl Into<String>,
    ) -> ContainerResult<()> {
        self.inner.write().set_resource_source(id, source)
    }

    /// Check if a container is visible (own state only).
    pub fn is_visible(&self, id: ContainerId) -> ContainerResult<bool> {
        self.inner.read().is_visible(id)
    }

    /// Set the visible state of a container.
    pub fn set_visible(&self, id: ContainerId, visible: bool) -> ContainerResult<()> {
        self.inner.write().set_visible(id, visible)
    }

    /// Check if a container is effectively visible (itself and all ancestors).
    pub fn is_effectively_visible(&self, id: ContainerId) -> ContainerResult<bool> {
        self.inner.read().is_effectively_visible(id)
    }

    /// Get all ancestors of a container from immediate parent to root.
    pub fn ancestors(&self, id: ContainerId) -> ContainerResult<Vec<ContainerId>> {
        self.inner.read().ancestors(id)
    }

    /// Get the number of containers in the tree.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Access the tree with a read lock for complex operations.
    pub fn with_read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ContainerTree) -> R,
    {
        f(&self.inner.read())
    }

    /// Access the tree with a write lock for complex operations.
    pub fn with_write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ContainerTree) -> R,
    {
        f(&mut self.inner.write())
    }
}

impl Default for SharedContainerTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_contains() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "catalogs/events.toml");
        let region = tree.register_region("panel");
        assert!(tree.contains(module));
        assert!(tree.contains(region));
        assert_eq!(tree.kind(module), Ok(ContainerKind::Module));
        assert_eq!(tree.kind(region), Ok(ContainerKind::Region));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn module_always_has_resource_source() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "catalogs/events.toml");
        assert_eq!(
            tree.resource_source(module).unwrap(),
            Some("catalogs/events.toml")
        );
    }

    #[test]
    fn region_declares_resource_source() {
        let mut tree = ContainerTree::new();
        let region = tree.register_region("panel");
        assert_eq!(tree.resource_source(region).unwrap(), None);

        tree.set_resource_source(region, "catalogs/panel.toml").unwrap();
        assert_eq!(
            tree.resource_source(region).unwrap(),
            Some("catalogs/panel.toml")
        );
    }

    #[test]
    fn parent_child_bookkeeping() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "catalogs/events.toml");
        let region = tree.register_region("panel");

        tree.set_parent(region, Some(module)).unwrap();

        assert_eq!(tree.parent(region).unwrap(), Some(module));
        assert!(tree.children(module).unwrap().contains(&region));
    }

    #[test]
    fn reparenting_moves_child() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "catalogs/events.toml");
        let left = tree.register_region("left");
        let right = tree.register_region("right");
        let control = tree.register_control("message");

        tree.set_parent(left, Some(module)).unwrap();
        tree.set_parent(right, Some(module)).unwrap();
        tree.set_parent(control, Some(left)).unwrap();

        tree.set_parent(control, Some(right)).unwrap();

        assert!(!tree.children(left).unwrap().contains(&control));
        assert!(tree.children(right).unwrap().contains(&control));
        assert_eq!(tree.parent(control).unwrap(), Some(right));
    }

    #[test]
    fn circular_parentage_rejected() {
        let mut tree = ContainerTree::new();
        let outer = tree.register_region("outer");
        let inner = tree.register_region("inner");

        tree.set_parent(inner, Some(outer)).unwrap();

        let result = tree.set_parent(outer, Some(inner));
        assert_eq!(result, Err(ContainerError::CircularParentage));
    }

    #[test]
    fn self_parentage_rejected() {
        let mut tree = ContainerTree::new();
        let region = tree.register_region("panel");
        let result = tree.set_parent(region, Some(region));
        assert_eq!(result, Err(ContainerError::CircularParentage));
    }

    #[test]
    fn cascade_remove() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "catalogs/events.toml");
        let region = tree.register_region("panel");
        let control = tree.register_control("message");

        tree.set_parent(region, Some(module)).unwrap();
        tree.set_parent(control, Some(region)).unwrap();

        tree.remove(region).unwrap();

        assert!(tree.contains(module));
        assert!(!tree.contains(region));
        assert!(!tree.contains(control));
        assert!(tree.children(module).unwrap().is_empty());
    }

    #[test]
    fn invalid_id_after_removal() {
        let mut tree = ContainerTree::new();
        let region = tree.register_region("panel");
        tree.remove(region).unwrap();
        assert_eq!(tree.parent(region), Err(ContainerError::InvalidContainerId));
    }

    #[test]
    fn ancestors_from_parent_to_root() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "catalogs/events.toml");
        let region = tree.register_region("panel");
        let control = tree.register_control("message");

        tree.set_parent(region, Some(module)).unwrap();
        tree.set_parent(control, Some(region)).unwrap();

        let ancestors = tree.ancestors(control).unwrap();
        assert_eq!(ancestors, vec![region, module]);
    }

    #[test]
    fn effective_visibility_considers_ancestors() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "catalogs/events.toml");
        let region = tree.register_region("panel");
        let control = tree.register_control("message");

        tree.set_parent(region, Some(module)).unwrap();
        tree.set_parent(control, Some(region)).unwrap();

        assert!(tree.is_effectively_visible(control).unwrap());

        tree.set_visible(region, false).unwrap();
        assert!(tree.is_visible(control).unwrap());
        assert!(!tree.is_effectively_visible(control).unwrap());

        tree.set_visible(region, true).unwrap();
        assert!(tree.is_effectively_visible(control).unwrap());
    }

    #[test]
    fn roots_iterates_parentless_containers() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "catalogs/events.toml");
        let region = tree.register_region("panel");
        tree.set_parent(region, Some(module)).unwrap();

        let roots: Vec<_> = tree.roots().collect();
        assert_eq!(roots, vec![module]);
    }

    #[test]
    fn dump_tree_shows_names_kinds_and_sources() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "catalogs/events.toml");
        let region = tree.register_region("panel");
        tree.set_parent(region, Some(module)).unwrap();

        let dump = tree.dump_tree(module).unwrap();
        assert!(dump.contains("events (Module) [source: catalogs/events.toml]"));
        assert!(dump.contains("  panel (Region)"));
    }

    #[test]
    fn container_id_raw_round_trip() {
        let mut tree = ContainerTree::new();
        let region = tree.register_region("panel");
        assert_eq!(ContainerId::from_raw(region.as_raw()), region);
    }

    #[test]
    fn shared_tree_clones_share_state() {
        let tree = SharedContainerTree::new();
        let module = tree.register_module("events", "catalogs/events.toml");

        let handle = tree.clone();
        let region = handle.register_region("panel");
        handle.set_parent(region, Some(module)).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.parent(region).unwrap(), Some(module));
    }
}
