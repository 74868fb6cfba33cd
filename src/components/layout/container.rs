//! Layout Container
//!
//! Groups already-built nodes under one wrapping node. The container adds no
//! content of its own and keeps children exactly in the order they were added.

use crate::domain::view_node::{ViewId, ViewNode};

/// Builder for a container node
#[derive(Debug, Clone, Default)]
pub struct LayoutContainer {
    children: Vec<ViewNode>,
}

impl LayoutContainer {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Wrap `children` in one container node
    pub fn wrap(children: impl IntoIterator<Item = ViewNode>) -> ViewNode {
        Self::new().children(children).build()
    }

    pub fn child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ViewNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> ViewNode {
        ViewNode::branch(ViewId::Container, self.children)
    }
}
