//! filedrop-core: Drop-zone state machine and file validation (sans-IO).
//!
//! Tracks a drag hovering over a drop zone, validates the dropped file's
//! metadata (extension and byte size) against a [`ValidationConfig`], and
//! reports the outcome as a [`DropEvent`].
//!
//! This crate has **no I/O dependencies** -- file contents are never read,
//! and the host surface is reached only through the [`DragSignal`],
//! [`Transfer`] and [`DropZoneFeedback`] traits. Browser bindings live in
//! `filedrop-io`.

pub mod controller;
pub mod state;
pub mod types;

pub use controller::{
    DragDropController, DragPhase, DragSignal, DragStatus, DropEvent, DropZoneFeedback, FileOf,
};
pub use state::{DropState, Transfer};
pub use types::{
    AcceptedFile, DropError, FileDescriptor, RejectedFile, RejectionReason, ValidationConfig,
};
