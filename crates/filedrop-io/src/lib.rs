//! filedrop-io: Browser bindings and Dioxus component library.
//!
//! Adapts DOM drag events and `DataTransfer` objects to the
//! `filedrop-core` traits, applies CSS-class feedback to drop-zone
//! elements, attaches native listeners, and provides a reusable
//! [`FileDrop`] component for Dioxus applications.

pub mod binding;
pub mod components;
pub mod style;
pub mod transfer;

pub use binding::{BindError, FileDropBinding};
pub use components::{FileDrop, ZoneStatus};
pub use style::{DropZoneClasses, DropZoneStyle};
pub use transfer::{WebDragSignal, WebTransfer};
