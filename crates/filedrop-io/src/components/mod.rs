//! Dioxus UI components for filedrop.
//!
//! Provides the drop-zone component.

mod drop_zone;

pub use drop_zone::{FileDrop, ZoneStatus};
