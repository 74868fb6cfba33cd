//! ViewRegistry - Runtime Table of View Units
//!
//! Units are keyed by the identity they produce. Registering a unit with an
//! identity that is already present replaces the previous one.

use std::sync::Arc;

use ahash::AHashMap;

use crate::components::leaf::{HomeBanner, Sidebar, Topbar, ViewUnit};
use crate::domain::config::ContentConfig;
use crate::domain::view_node::ViewId;
use crate::error::{Error, Result};

/// Registered view units keyed by identity
#[derive(Clone, Default)]
pub struct ViewRegistry {
    units: AHashMap<ViewId, Arc<dyn ViewUnit>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the stock home, topbar and sidebar units
    pub fn with_defaults(content: &ContentConfig) -> Self {
        let mut registry = Self::new();
        registry.register(HomeBanner::from_config(content));
        registry.register(Topbar::from_config(content));
        registry.register(Sidebar::from_config(content));
        registry
    }

    /// Register a unit, returning the one it replaced
    pub fn register(&mut self, unit: impl ViewUnit + 'static) -> Option<Arc<dyn ViewUnit>> {
        self.register_shared(Arc::new(unit))
    }

    pub fn register_shared(&mut self, unit: Arc<dyn ViewUnit>) -> Option<Arc<dyn ViewUnit>> {
        let id = unit.id();
        let replaced = self.units.insert(id, unit);
        if replaced.is_some() {
            tracing::debug!(unit = %id, "Replaced registered view unit");
        }
        replaced
    }

    pub fn remove(&mut self, id: ViewId) -> Option<Arc<dyn ViewUnit>> {
        self.units.remove(&id)
    }

    /// Look up the unit producing `id`
    pub fn resolve(&self, id: ViewId) -> Result<Arc<dyn ViewUnit>> {
        self.units
            .get(&id)
            .cloned()
            .ok_or(Error::MissingCollaborator { unit: id })
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.units.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::leaf::unit_fn;
    use crate::domain::view_node::ViewNode;

    #[test]
    fn defaults_cover_every_leaf() {
        let registry = ViewRegistry::with_defaults(&ContentConfig::default());
        assert_eq!(registry.len(), 3);
        for id in ViewId::leaves() {
            assert!(registry.contains(*id));
        }
    }

    #[test]
    fn resolve_missing_unit_fails() {
        let registry = ViewRegistry::new();
        let err = registry.resolve(ViewId::Sidebar).err();
        assert!(matches!(
            err,
            Some(Error::MissingCollaborator {
                unit: ViewId::Sidebar
            })
        ));
    }

    #[test]
    fn register_replaces_same_identity() {
        let mut registry = ViewRegistry::new();
        assert!(registry.register(Topbar::with_title("First")).is_none());
        assert!(registry.register(Topbar::with_title("Second")).is_some());
        assert_eq!(registry.len(), 1);

        let node = registry.resolve(ViewId::Topbar).expect("registered").produce();
        assert_eq!(node.label(), Some("Second"));
    }

    #[test]
    fn shared_units_register_under_their_id() {
        let unit: Arc<dyn ViewUnit> = Arc::new(Sidebar::with_title("Menu"));
        let mut registry = ViewRegistry::new();

        assert!(registry.register_shared(unit.clone()).is_none());
        let resolved = registry.resolve(ViewId::Sidebar).expect("registered");
        assert!(Arc::ptr_eq(&resolved, &unit));
        assert!(registry.register_shared(unit).is_some());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn closures_register_under_their_id() {
        let mut registry = ViewRegistry::new();
        registry.register(unit_fn(ViewId::Home, || ViewNode::leaf(ViewId::Home)));
        assert!(registry.contains(ViewId::Home));
        assert!(registry.remove(ViewId::Home).is_some());
        assert!(registry.is_empty());
    }
}
