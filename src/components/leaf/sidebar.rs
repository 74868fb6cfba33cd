//! Sidebar

use crate::components::leaf::{ViewUnit, leaf_node, non_blank};
use crate::domain::config::ContentConfig;
use crate::domain::view_node::{ViewId, ViewNode};

/// Sidebar unit
#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    title: Option<String>,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    pub fn from_config(content: &ContentConfig) -> Self {
        Self {
            title: non_blank(&content.sidebar_title),
        }
    }
}

impl ViewUnit for Sidebar {
    fn id(&self) -> ViewId {
        ViewId::Sidebar
    }

    fn produce(&self) -> ViewNode {
        leaf_node(ViewId::Sidebar, self.title.as_deref())
    }
}
