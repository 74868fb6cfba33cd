//! Leaf View Units
//!
//! Self-contained producers of childless view nodes. Each unit is an
//! external collaborator from the composer's point of view: the composer only
//! asks it for a node and never inspects how the content was obtained.

mod home;
mod sidebar;
mod topbar;

pub use home::HomeBanner;
pub use sidebar::Sidebar;
pub use topbar::Topbar;

use crate::domain::view_node::{ViewId, ViewNode};

/// A producer of one view region
///
/// Implementations must be side-effect free and return a node whose identity
/// equals [`ViewUnit::id`]. Leaf units return nodes without children.
pub trait ViewUnit: Send + Sync {
    /// Identity of the region this unit produces
    fn id(&self) -> ViewId;

    /// Build a fresh node for the current render pass
    fn produce(&self) -> ViewNode;
}

/// Leaf unit backed by a closure
pub struct FnUnit<F> {
    id: ViewId,
    produce: F,
}

/// Adapt a closure into a [`ViewUnit`]
pub fn unit_fn<F>(id: ViewId, produce: F) -> FnUnit<F>
where
    F: Fn() -> ViewNode + Send + Sync,
{
    FnUnit { id, produce }
}

impl<F> ViewUnit for FnUnit<F>
where
    F: Fn() -> ViewNode + Send + Sync,
{
    fn id(&self) -> ViewId {
        self.id
    }

    fn produce(&self) -> ViewNode {
        (self.produce)()
    }
}

/// Build a leaf node, dropping blank content
pub(crate) fn leaf_node(id: ViewId, title: Option<&str>) -> ViewNode {
    match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => ViewNode::leaf(id).with_label(title),
        None => ViewNode::leaf(id),
    }
}

/// Normalize configured content: blank strings mean "no content"
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
