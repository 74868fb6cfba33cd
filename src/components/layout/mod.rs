//! Layout Components
//!
//! Nodes that only group other nodes.

pub mod container;

pub use container::LayoutContainer;
