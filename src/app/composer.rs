//! RootComposer - Assembles the Shell View Tree
//!
//! The composer owns one producer per leaf region and builds
//! `app[home, container[topbar, sidebar]]` on every pass. Producers are
//! handed in explicitly, either as constructor arguments or resolved from a
//! [`ViewRegistry`] up front, so a pass never looks anything up.
//!
//! ```text
//! app
//! ├── home
//! └── container
//!     ├── topbar
//!     └── sidebar
//! ```

use std::sync::Arc;

use crate::app::registry::ViewRegistry;
use crate::components::layout::LayoutContainer;
use crate::components::leaf::ViewUnit;
use crate::domain::view_node::{ViewId, ViewNode};
use crate::error::{Error, Result};

/// Entry point producing the root view node
#[derive(Clone)]
pub struct RootComposer {
    home: Arc<dyn ViewUnit>,
    topbar: Arc<dyn ViewUnit>,
    sidebar: Arc<dyn ViewUnit>,
}

impl RootComposer {
    /// Wire the three leaves, checking each one produces the region of its slot
    ///
    /// A unit in the wrong slot leaves that slot's region unsupplied, which is
    /// reported as the missing collaborator for the slot.
    pub fn new(
        home: impl ViewUnit + 'static,
        topbar: impl ViewUnit + 'static,
        sidebar: impl ViewUnit + 'static,
    ) -> Result<Self> {
        Ok(Self {
            home: slot(ViewId::Home, Arc::new(home))?,
            topbar: slot(ViewId::Topbar, Arc::new(topbar))?,
            sidebar: slot(ViewId::Sidebar, Arc::new(sidebar))?,
        })
    }

    /// Resolve every leaf from `registry`, failing on the first one missing
    pub fn from_registry(registry: &ViewRegistry) -> Result<Self> {
        let resolve = |id: ViewId| {
            registry.resolve(id).inspect_err(|_| {
                tracing::error!(unit = %id, "Missing view collaborator");
            })
        };

        Ok(Self {
            home: slot(ViewId::Home, resolve(ViewId::Home)?)?,
            topbar: slot(ViewId::Topbar, resolve(ViewId::Topbar)?)?,
            sidebar: slot(ViewId::Sidebar, resolve(ViewId::Sidebar)?)?,
        })
    }

    /// Build one tree from `registry` without keeping the composer around
    pub fn compose_from(registry: &ViewRegistry) -> Result<ViewNode> {
        Ok(Self::from_registry(registry)?.compose())
    }

    /// Run one composition pass
    pub fn compose(&self) -> ViewNode {
        let home = produce_leaf(ViewId::Home, &self.home);
        let topbar = produce_leaf(ViewId::Topbar, &self.topbar);
        let sidebar = produce_leaf(ViewId::Sidebar, &self.sidebar);

        let container = LayoutContainer::wrap([topbar, sidebar]);
        let root = ViewNode::branch(ViewId::App, vec![home, container]);

        tracing::debug!(nodes = root.node_count(), depth = root.depth(), "Composed view tree");
        root
    }
}

fn slot(expected: ViewId, unit: Arc<dyn ViewUnit>) -> Result<Arc<dyn ViewUnit>> {
    if unit.id() != expected {
        tracing::error!(unit = %expected, supplied = %unit.id(), "View unit in the wrong slot");
        return Err(Error::MissingCollaborator { unit: expected });
    }
    Ok(unit)
}

/// Produce the node for a leaf slot, reducing anything else to a bare leaf
fn produce_leaf(expected: ViewId, unit: &Arc<dyn ViewUnit>) -> ViewNode {
    let node = unit.produce();
    if node.id() == expected && node.is_leaf() {
        return node;
    }
    tracing::warn!(
        unit = %expected,
        produced = %node.id(),
        children = node.children().len(),
        "Leaf unit broke its contract, keeping a childless node"
    );
    node.into_leaf(expected)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::components::leaf::{HomeBanner, Sidebar, Topbar, unit_fn};
    use crate::domain::config::ContentConfig;

    fn composer() -> RootComposer {
        RootComposer::new(
            HomeBanner::with_title("Welcome"),
            Topbar::with_title("Navigation"),
            Sidebar::with_title("Menu"),
        )
        .expect("leaves in their slots")
    }

    fn shape(node: &ViewNode) -> String {
        if node.is_leaf() {
            return node.id().to_string();
        }
        let children: Vec<_> = node.children().iter().map(shape).collect();
        format!("{}[{}]", node.id(), children.join(", "))
    }

    #[test]
    fn composes_home_then_container() {
        let tree = composer().compose();

        assert_eq!(shape(&tree), "app[home, container[topbar, sidebar]]");
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.children()[0].label(), Some("Welcome"));
    }

    #[test]
    fn repeated_passes_are_equal() {
        let composer = composer();
        let first = composer.compose();
        let second = composer.compose();

        assert_eq!(first, second);
        assert!(!std::ptr::eq(first.children().as_ptr(), second.children().as_ptr()));
    }

    #[test]
    fn each_leaf_is_produced_once_per_pass() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let composer = RootComposer::new(
            unit_fn(ViewId::Home, move || {
                counter.fetch_add(1, Ordering::SeqCst);
                ViewNode::leaf(ViewId::Home)
            }),
            Topbar::new(),
            Sidebar::new(),
        )
        .expect("leaves in their slots");

        composer.compose();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        composer.compose();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn registry_and_constructor_agree() {
        let content = ContentConfig::default();
        let from_registry =
            RootComposer::compose_from(&ViewRegistry::with_defaults(&content)).expect("compose");
        let direct = RootComposer::new(
            HomeBanner::from_config(&content),
            Topbar::from_config(&content),
            Sidebar::from_config(&content),
        )
        .expect("leaves in their slots")
        .compose();

        assert_eq!(from_registry, direct);
    }

    #[test]
    fn missing_sidebar_returns_no_tree() {
        let mut registry = ViewRegistry::with_defaults(&ContentConfig::default());
        registry.remove(ViewId::Sidebar);

        let result = RootComposer::compose_from(&registry);
        assert!(matches!(
            result,
            Err(Error::MissingCollaborator {
                unit: ViewId::Sidebar
            })
        ));
    }

    #[test]
    fn first_missing_leaf_is_reported() {
        let mut registry = ViewRegistry::new();
        registry.register(Sidebar::new());

        let err = RootComposer::from_registry(&registry).err();
        assert!(matches!(
            err,
            Some(Error::MissingCollaborator { unit: ViewId::Home })
        ));
    }

    #[test]
    fn swapped_slots_are_rejected() {
        let result = RootComposer::new(Sidebar::new(), Topbar::new(), HomeBanner::new());
        assert!(matches!(
            result.err(),
            Some(Error::MissingCollaborator { unit: ViewId::Home })
        ));

        let result = RootComposer::new(HomeBanner::new(), Sidebar::new(), Topbar::new());
        assert!(matches!(
            result.err(),
            Some(Error::MissingCollaborator {
                unit: ViewId::Topbar
            })
        ));
    }

    #[test]
    fn closure_unit_with_wrong_id_is_rejected() {
        let result = RootComposer::new(
            HomeBanner::new(),
            Topbar::new(),
            unit_fn(ViewId::Topbar, || ViewNode::leaf(ViewId::Topbar)),
        );
        assert!(matches!(
            result.err(),
            Some(Error::MissingCollaborator {
                unit: ViewId::Sidebar
            })
        ));
    }

    #[test]
    fn leaf_producing_a_container_is_flattened() {
        let composer = RootComposer::new(
            HomeBanner::new(),
            unit_fn(ViewId::Topbar, || {
                LayoutContainer::wrap([ViewNode::leaf(ViewId::Home), ViewNode::leaf(ViewId::Sidebar)])
                    .with_label("x")
            }),
            Sidebar::new(),
        )
        .expect("leaves in their slots");

        let tree = composer.compose();

        assert_eq!(tree.depth(), 3);
        assert_eq!(shape(&tree), "app[home, container[topbar, sidebar]]");
        let topbar = &tree.children()[1].children()[0];
        assert_eq!(*topbar, ViewNode::leaf(ViewId::Topbar));
    }

    #[test]
    fn leaf_producing_another_identity_keeps_its_slot() {
        let composer = RootComposer::new(
            unit_fn(ViewId::Home, || ViewNode::leaf(ViewId::Sidebar).with_label("Hi")),
            Topbar::new(),
            Sidebar::new(),
        )
        .expect("leaves in their slots");

        let tree = composer.compose();
        let home = &tree.children()[0];
        assert_eq!(home.id(), ViewId::Home);
        assert_eq!(home.label(), Some("Hi"));
    }

    #[test]
    fn parallel_passes_are_independent() {
        let composer = composer();
        let expected = composer.compose();

        let trees: Vec<ViewNode> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4).map(|_| s.spawn(|| composer.compose())).collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("compose thread panicked"))
                .collect()
        });

        assert_eq!(trees.len(), 4);
        assert!(trees.iter().all(|tree| *tree == expected));
    }
}
