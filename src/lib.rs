//! App Shell Library
//!
//! Declarative assembly of a static view tree: a home banner followed by a
//! layout container that groups the top bar and the sidebar. Leaf units are
//! injected explicitly; the composer only arranges what it is given.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod render;
pub mod theme;
pub mod utils;
