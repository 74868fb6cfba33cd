//! Home Banner
//!
//! The banner region shown above the navigation container.

use crate::components::leaf::{ViewUnit, leaf_node, non_blank};
use crate::domain::config::ContentConfig;
use crate::domain::view_node::{ViewId, ViewNode};

/// Home banner unit
#[derive(Debug, Clone, Default)]
pub struct HomeBanner {
    title: Option<String>,
}

impl HomeBanner {
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
            title: non_blank(&content.home_title),
        }
    }
}

impl ViewUnit for HomeBanner {
    fn id(&self) -> ViewId {
        ViewId::Home
    }

    fn produce(&self) -> ViewNode {
        leaf_node(ViewId::Home, self.title.as_deref())
    }
}
