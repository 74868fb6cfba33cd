//! Renderers
//!
//! Consumers of composed view trees that don't need a window.
//! The GPUI painter lives in [`crate::app::workspace`].

pub mod markup;

pub use markup::to_markup;
