//! ViewNode - Immutable View Tree
//!
//! A `ViewNode` describes one renderable region and its ordered children.
//! Nodes are built fresh for every composition pass and never mutated after
//! construction; renderers only get read access.

use std::fmt;

use serde::Serialize;

/// Identity of a region in the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    /// Root of the tree
    App,
    /// Home banner
    Home,
    /// Layout container grouping the navigation regions
    Container,
    /// Top navigation bar
    Topbar,
    /// Sidebar
    Sidebar,
}

impl ViewId {
    /// Class name used when the tree is serialized to markup
    pub fn class_name(&self) -> &'static str {
        match self {
            ViewId::App => "app",
            ViewId::Home => "home",
            ViewId::Container => "container",
            ViewId::Topbar => "topbar",
            ViewId::Sidebar => "sidebar",
        }
    }

    /// Whether this identity wraps other nodes instead of producing content
    pub fn is_container(&self) -> bool {
        matches!(self, ViewId::App | ViewId::Container)
    }

    /// Leaf identities in declaration order
    pub fn leaves() -> &'static [ViewId] {
        &[ViewId::Home, ViewId::Topbar, ViewId::Sidebar]
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// One node of the view tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewNode {
    id: ViewId,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ViewNode>,
}

impl ViewNode {
    /// Create a childless node
    pub fn leaf(id: ViewId) -> Self {
        Self {
            id,
            label: None,
            children: Vec::new(),
        }
    }

    /// Attach text content to a leaf; containers never carry a label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        if !self.id.is_container() {
            self.label = Some(label.into());
        }
        self
    }

    /// Reduce this node to a childless leaf with identity `id`
    ///
    /// The label is kept only when `id` is a leaf identity.
    pub(crate) fn into_leaf(self, id: ViewId) -> Self {
        let label = self.label.filter(|_| !id.is_container());
        Self {
            id,
            label,
            children: Vec::new(),
        }
    }

    /// Create a node wrapping `children`, keeping their order
    pub(crate) fn branch(id: ViewId, children: Vec<ViewNode>) -> Self {
        Self {
            id,
            label: None,
            children,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn children(&self) -> &[ViewNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels in the tree rooted here (a leaf has depth 1)
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(ViewNode::depth).max().unwrap_or(0)
    }

    /// Total number of nodes in the tree rooted here
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// First node with the given identity, in pre-order
    pub fn find(&self, id: ViewId) -> Option<&ViewNode> {
        self.walk().find(|node| node.id == id)
    }

    /// Pre-order traversal starting at this node
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Serialize the tree to pretty JSON
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Pre-order iterator over a view tree
pub struct Walk<'a> {
    stack: Vec<&'a ViewNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a ViewNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Reversed so the first child is visited next
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
