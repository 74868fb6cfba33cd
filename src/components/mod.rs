//! Components - View Units
//!
//! Pure view producers that don't depend on GPUI or do I/O.

pub mod layout;
pub mod leaf;
