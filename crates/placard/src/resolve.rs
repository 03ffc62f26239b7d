//! Resource-text resolution by ancestor search.
//!
//! A message control dropped into an arbitrarily deep nesting of layout
//! regions does not need to be told which resource catalog to use: the
//! resolver climbs the container tree and the nearest ancestor that can
//! answer "where do your resource strings live" wins. A module-level parent
//! terminates the search immediately with its designated source.

use placard_core::{ContainerError, ContainerId, ContainerKind, ContainerTree};
use placard_i18n::{CatalogStore, I18nError, ResourceKey};

/// Errors from resource-text resolution.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The tree was climbed to its root without finding a resource source.
    #[error("no ancestor declares a resource source for key '{key}'")]
    Exhausted {
        /// The key that could not be resolved.
        key: ResourceKey,
    },

    /// The starting container is not in the tree.
    #[error(transparent)]
    Container(#[from] ContainerError),

    /// The catalog lookup failed; propagated verbatim.
    #[error(transparent)]
    Catalog(#[from] I18nError),
}

/// Resolve a resource key into display text, starting from `start`.
///
/// The search climbs one ancestor at a time:
///
/// 1. A [`Module`](ContainerKind::Module) parent terminates the search with
///    its designated resource source.
/// 2. Otherwise, a parent that declares a resource source terminates the
///    search with that source.
/// 3. Otherwise, the search recurses from the parent.
///
/// The module check precedes the declaration check at every level. Reaching
/// the root without finding a source fails with
/// [`ResolveError::Exhausted`]; callers preferring to display the raw key
/// can recover with `unwrap_or_else`.
///
/// The walk is read-only and bounded by the tree depth; missing-entry
/// fallback is owned by the [`CatalogStore`], not interpreted here.
#[tracing::instrument(skip(tree, catalogs), target = "placard::resolve", level = "trace")]
pub fn resolve_text(
    tree: &ContainerTree,
    catalogs: &CatalogStore,
    key: &ResourceKey,
    start: ContainerId,
) -> Result<String, ResolveError> {
    let Some(parent) = tree.parent(start)? else {
        tracing::debug!(target: "placard::resolve", %key, "reached root without a resource source");
        return Err(ResolveError::Exhausted { key: key.clone() });
    };

    if tree.kind(parent)? == ContainerKind::Module {
        // Module level: the designated source terminates the search.
        let Some(source) = tree.resource_source(parent)? else {
            return Err(ResolveError::Exhausted { key: key.clone() });
        };
        tracing::trace!(target: "placard::resolve", %key, source, "resolved at module level");
        return Ok(catalogs.lookup(key, source)?);
    }

    match tree.resource_source(parent)? {
        Some(source) => {
            tracing::trace!(target: "placard::resolve", %key, source, "resolved at declaring ancestor");
            Ok(catalogs.lookup(key, source)?)
        }
        // Drill up to the next level.
        None => resolve_text(tree, catalogs, key, parent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placard_i18n::Catalog;

    fn store_with(entries: &[(&str, &str, &str)]) -> CatalogStore {
        // (source, key, value); each source listed once
        let mut store = CatalogStore::with_locale("en");
        for (source, key, value) in entries {
            let mut catalog = Catalog::new();
            catalog.insert(*key, *value);
            store.mount(*source, catalog);
        }
        store
    }

    #[test]
    fn nearest_declaring_ancestor_wins() {
        // A → B → C, both A and B declare; B is nearer to C.
        let mut tree = ContainerTree::new();
        let a = tree.register_region("a");
        let b = tree.register_region("b");
        let c = tree.register_control("c");
        tree.set_parent(b, Some(a)).unwrap();
        tree.set_parent(c, Some(b)).unwrap();
        tree.set_resource_source(a, "pathA").unwrap();
        tree.set_resource_source(b, "pathB").unwrap();

        let store = store_with(&[
            ("pathA", "greeting", "hello from A"),
            ("pathB", "greeting", "hello from B"),
        ]);

        let key = ResourceKey::new("greeting");
        let text = resolve_text(&tree, &store, &key, c).unwrap();
        assert_eq!(text, "hello from B");
    }

    #[test]
    fn climbs_past_silent_regions() {
        // module → outer → inner → control; only the module can answer.
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "module-source");
        let outer = tree.register_region("outer");
        let inner = tree.register_region("inner");
        let control = tree.register_control("message");
        tree.set_parent(outer, Some(module)).unwrap();
        tree.set_parent(inner, Some(outer)).unwrap();
        tree.set_parent(control, Some(inner)).unwrap();

        let store = store_with(&[("module-source", "k", "resolved")]);

        let key = ResourceKey::new("k");
        assert_eq!(resolve_text(&tree, &store, &key, control).unwrap(), "resolved");
    }

    #[test]
    fn module_parent_terminates_at_depth_one() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "module-source");
        let control = tree.register_control("message");
        tree.set_parent(control, Some(module)).unwrap();

        let store = store_with(&[("module-source", "k", "from module")]);

        let key = ResourceKey::new("k");
        assert_eq!(
            resolve_text(&tree, &store, &key, control).unwrap(),
            "from module"
        );
    }

    #[test]
    fn declaring_region_shadows_module_above() {
        // module → panel (declares) → control; the nearer panel wins.
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "module-source");
        let panel = tree.register_region("panel");
        let control = tree.register_control("message");
        tree.set_parent(panel, Some(module)).unwrap();
        tree.set_parent(control, Some(panel)).unwrap();
        tree.set_resource_source(panel, "panel-source").unwrap();

        let store = store_with(&[
            ("module-source", "k", "from module"),
            ("panel-source", "k", "from panel"),
        ]);

        let key = ResourceKey::new("k");
        assert_eq!(
            resolve_text(&tree, &store, &key, control).unwrap(),
            "from panel"
        );
    }

    #[test]
    fn root_without_source_is_exhausted() {
        let mut tree = ContainerTree::new();
        let outer = tree.register_region("outer");
        let control = tree.register_control("message");
        tree.set_parent(control, Some(outer)).unwrap();

        let store = CatalogStore::with_locale("en");
        let key = ResourceKey::new("k");
        let result = resolve_text(&tree, &store, &key, control);
        assert!(matches!(result, Err(ResolveError::Exhausted { .. })));
    }

    #[test]
    fn parentless_start_is_exhausted() {
        let mut tree = ContainerTree::new();
        let control = tree.register_control("message");

        let store = CatalogStore::with_locale("en");
        let key = ResourceKey::new("k");
        let result = resolve_text(&tree, &store, &key, control);
        assert!(matches!(result, Err(ResolveError::Exhausted { .. })));
    }

    #[test]
    fn removed_start_is_container_error() {
        let mut tree = ContainerTree::new();
        let control = tree.register_control("message");
        tree.remove(control).unwrap();

        let store = CatalogStore::with_locale("en");
        let key = ResourceKey::new("k");
        let result = resolve_text(&tree, &store, &key, control);
        assert!(matches!(
            result,
            Err(ResolveError::Container(ContainerError::InvalidContainerId))
        ));
    }

    #[test]
    fn unmounted_source_propagates_catalog_error() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "never-mounted");
        let control = tree.register_control("message");
        tree.set_parent(control, Some(module)).unwrap();

        let store = CatalogStore::with_locale("en");
        let key = ResourceKey::new("k");
        let result = resolve_text(&tree, &store, &key, control);
        assert!(matches!(
            result,
            Err(ResolveError::Catalog(I18nError::UnknownSource { .. }))
        ));
    }

    #[test]
    fn missing_entry_falls_back_to_key() {
        let mut tree = ContainerTree::new();
        let module = tree.register_module("events", "module-source");
        let control = tree.register_control("message");
        tree.set_parent(control, Some(module)).unwrap();

        let store = store_with(&[("module-source", "other", "value")]);

        let key = ResourceKey::new("NotInCatalog");
        assert_eq!(
            resolve_text(&tree, &store, &key, control).unwrap(),
            "NotInCatalog"
        );
    }
}
