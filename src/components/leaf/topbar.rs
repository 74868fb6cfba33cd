//! Topbar
//!
//! Top navigation bar. No content source ships with the shell for this
//! region, so callers always pass one in explicitly.

use crate::components::leaf::{ViewUnit, leaf_node, non_blank};
use crate::domain::config::ContentConfig;
use crate::domain::view_node::{ViewId, ViewNode};

/// Top navigation bar unit
#[derive(Debug, Clone, Default)]
pub struct Topbar {
    title: Option<String>,
}

impl Topbar {
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
            title: non_blank(&content.topbar_title),
        }
    }
}

impl ViewUnit for Topbar {
    fn id(&self) -> ViewId {
        ViewId::Topbar
    }

    fn produce(&self) -> ViewNode {
        leaf_node(ViewId::Topbar, self.title.as_deref())
    }
}
