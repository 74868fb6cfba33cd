//! Application Layer
//!
//! Composition of the view tree, the unit registry, and the window that
//! paints it.

pub mod application;
pub mod composer;
pub mod registry;
pub mod workspace;
