//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI: the view tree and the shell configuration.

pub mod config;
pub mod view_node;
