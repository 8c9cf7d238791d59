//! Pending-transfer tracking and validation for a single drop zone.
//!
//! [`DropState`] owns the one transfer slot a drop zone has. The slot is
//! filled when a drag starts hovering, read when the drag is dropped, and
//! cleared on leave or after the drop is processed. It does not decide
//! *when* those things happen: that is the controller's job.

use crate::types::{DropError, FileDescriptor, RejectionReason, ValidationConfig};

/// A host's in-progress drag payload (a browser `DataTransfer`, a list of
/// paths, ...).
pub trait Transfer {
    /// The host's file reference handed back to callers.
    type File;

    /// Metadata and handle of the first file carried by the transfer.
    ///
    /// Returns `None` when the transfer carries no file data, e.g. a drag
    /// of plain text or a link.
    fn first_file(&self) -> Option<FileDescriptor<Self::File>>;
}

/// Tracks the transfer currently dragged over a drop zone.
#[derive(Debug, Clone)]
pub struct DropState<T> {
    config: ValidationConfig,
    pending: Option<T>,
}

impl<T> Default for DropState<T> {
    fn default() -> Self {
        Self {
            config: ValidationConfig::permit_all(),
            pending: None,
        }
    }
}

impl<T: Transfer> DropState<T> {
    /// Create an empty state validating against `config`.
    #[must_use]
    pub const fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            pending: None,
        }
    }

    /// The configuration drops are validated against.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Replace the validation configuration.
    ///
    /// Takes effect for the next [`validate`](Self::validate) call.
    pub fn set_config(&mut self, config: ValidationConfig) {
        self.config = config;
    }

    /// Record `transfer` as the pending transfer.
    ///
    /// The caller must not begin a transfer while one is pending. This is
    /// checked in debug builds only.
    pub fn begin_transfer(&mut self, transfer: T) {
        debug_assert!(
            self.pending.is_none(),
            "begin_transfer called while a transfer is pending"
        );
        self.pending = Some(transfer);
    }

    /// Returns `true` while a transfer is pending.
    #[must_use]
    pub const fn has_pending_transfer(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending transfer, if any.
    #[must_use]
    pub const fn pending_transfer(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Clear the pending transfer. Calling this with nothing pending is a no-op.
    pub fn end_transfer(&mut self) {
        self.pending = None;
    }

    /// Read the file carried by the pending transfer.
    ///
    /// # Errors
    ///
    /// Returns [`DropError::NoFileAvailable`] if no transfer is pending or
    /// the transfer carries no file.
    pub fn extract_file_descriptor(&self) -> Result<FileDescriptor<T::File>, DropError> {
        self.pending
            .as_ref()
            .and_then(Transfer::first_file)
            .ok_or(DropError::NoFileAvailable)
    }

    /// Validate `descriptor` against the current configuration.
    ///
    /// Returns `None` if the file is accepted. When the file is both the
    /// wrong type and too large, [`RejectionReason::UnsupportedType`] is
    /// reported.
    #[must_use]
    pub fn validate(&self, descriptor: &FileDescriptor<T::File>) -> Option<RejectionReason> {
        self.config.check(&descriptor.name, descriptor.size_bytes)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Transfer stub: `Some((name, size))` carries one file.
    #[derive(Debug, Clone)]
    struct Stub(Option<(&'static str, u64)>);

    impl Transfer for Stub {
        type File = &'static str;

        fn first_file(&self) -> Option<FileDescriptor<Self::File>> {
            self.0.map(|(name, size)| FileDescriptor::new(name, size, name))
        }
    }

    fn state() -> DropState<Stub> {
        DropState::new(ValidationConfig::new(["png", "jpg"], Some(1_000_000)))
    }

    #[test]
    fn new_state_has_no_transfer() {
        let state = state();
        assert!(!state.has_pending_transfer());
        assert!(state.pending_transfer().is_none());
    }

    #[test]
    fn begin_then_end_transfer() {
        let mut state = state();
        state.begin_transfer(Stub(None));
        assert!(state.has_pending_transfer());

        state.end_transfer();
        assert!(!state.has_pending_transfer());
    }

    #[test]
    fn end_transfer_is_idempotent() {
        let mut state = state();
        state.begin_transfer(Stub(Some(("a.png", 1))));
        state.end_transfer();
        state.end_transfer();
        assert!(!state.has_pending_transfer());

        // Never-started state too.
        let mut fresh = DropState::<Stub>::default();
        fresh.end_transfer();
        assert!(!fresh.has_pending_transfer());
    }

    #[test]
    fn extract_without_transfer_fails() {
        assert_eq!(
            state().extract_file_descriptor(),
            Err(DropError::NoFileAvailable)
        );
    }

    #[test]
    fn extract_from_fileless_transfer_fails() {
        let mut state = state();
        state.begin_transfer(Stub(None));
        assert_eq!(
            state.extract_file_descriptor(),
            Err(DropError::NoFileAvailable)
        );
    }

    #[test]
    fn extract_reads_file_metadata() {
        let mut state = state();
        state.begin_transfer(Stub(Some(("photo.PNG", 500_000))));
        let descriptor = state.extract_file_descriptor().unwrap();
        assert_eq!(descriptor.name, "photo.PNG");
        assert_eq!(descriptor.size_bytes, 500_000);
        assert_eq!(descriptor.raw, "photo.PNG");
    }

    #[test]
    fn validate_uses_current_config() {
        let mut state = state();
        let descriptor = FileDescriptor::new("doc.pdf", 100, "doc.pdf");
        assert_eq!(
            state.validate(&descriptor),
            Some(RejectionReason::UnsupportedType)
        );

        state.set_config(ValidationConfig::permit_all());
        assert_eq!(state.validate(&descriptor), None);
    }

    #[test]
    fn validate_reports_size_after_type() {
        let state = state();
        assert_eq!(
            state.validate(&FileDescriptor::new("photo.png", 5_000_000, "")),
            Some(RejectionReason::ExceedsMaxSize)
        );
        assert_eq!(
            state.validate(&FileDescriptor::new("doc.pdf", 5_000_000, "")),
            Some(RejectionReason::UnsupportedType)
        );
    }
}
