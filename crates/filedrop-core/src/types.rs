//! Shared types for drop-zone validation.

use serde::{Deserialize, Serialize};

/// Caller-supplied constraints a dropped file must satisfy.
///
/// Both constraints are optional: an empty `supported_file_types` list
/// accepts every extension, and a missing `maximum_size_bytes` accepts
/// every size. [`ValidationConfig::default`] therefore permits all files.
///
/// Deserializes from the camelCase shape used by host configuration:
///
/// ```
/// let config: filedrop_core::ValidationConfig =
///     serde_json::from_str(r#"{"supportedFileTypes": ["png"], "maximumSizeBytes": 1024}"#)
///         .unwrap();
/// assert!(config.accepts_extension("PNG"));
/// assert_eq!(config.maximum_size_bytes, Some(1024));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Accepted file-name extensions, without the leading dot.
    ///
    /// Matching is case-insensitive, including non-ASCII letters
    /// (`"ÄBC"` matches `x.äbc`). A leading dot on an entry
    /// (`".png"`) is tolerated and ignored.
    pub supported_file_types: Vec<String>,

    /// Largest accepted file size in bytes, inclusive. `None` means no limit.
    pub maximum_size_bytes: Option<u64>,
}

impl ValidationConfig {
    /// Create a configuration from an extension list and an optional size limit.
    #[must_use]
    pub fn new<I, S>(supported_file_types: I, maximum_size_bytes: Option<u64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported_file_types: supported_file_types.into_iter().map(Into::into).collect(),
            maximum_size_bytes,
        }
    }

    /// A configuration that accepts every file.
    #[must_use]
    pub const fn permit_all() -> Self {
        Self {
            supported_file_types: Vec::new(),
            maximum_size_bytes: None,
        }
    }

    /// Returns `true` when no extension restriction is configured.
    #[must_use]
    pub const fn accepts_any_type(&self) -> bool {
        self.supported_file_types.is_empty()
    }

    /// Check a bare extension (no dot) against the configured list.
    #[must_use]
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.accepts_any_type()
            || self
                .supported_file_types
                .iter()
                .any(|allowed| same_extension(allowed.trim_start_matches('.'), extension))
    }

    /// Check a file name against the configured extension list.
    ///
    /// The extension is the text after the last `.`. A name without a dot
    /// has no extension and fails whenever a restriction is configured.
    #[must_use]
    pub fn accepts_name(&self, name: &str) -> bool {
        if self.accepts_any_type() {
            return true;
        }
        extension_of(name).is_some_and(|ext| self.accepts_extension(ext))
    }

    /// Check a byte size against the configured limit.
    #[must_use]
    pub fn accepts_size(&self, size_bytes: u64) -> bool {
        self.maximum_size_bytes
            .is_none_or(|limit| size_bytes <= limit)
    }

    /// Validate a file's metadata, returning why it was rejected.
    ///
    /// Returns `None` when both checks pass. Both checks always run, but
    /// only one reason is reported: see [`RejectionReason::PRECEDENCE`].
    #[must_use]
    pub fn check(&self, name: &str, size_bytes: u64) -> Option<RejectionReason> {
        let type_ok = self.accepts_name(name);
        let size_ok = self.accepts_size(size_bytes);
        RejectionReason::PRECEDENCE
            .into_iter()
            .find(|reason| match reason {
                RejectionReason::UnsupportedType => !type_ok,
                RejectionReason::ExceedsMaxSize => !size_ok,
            })
    }
}

/// Case-insensitive extension comparison using Unicode lowercase mapping.
fn same_extension(allowed: &str, extension: &str) -> bool {
    if allowed.is_ascii() && extension.is_ascii() {
        return allowed.eq_ignore_ascii_case(extension);
    }
    allowed.to_lowercase() == extension.to_lowercase()
}

/// Text after the last `.` in `name`, if there is a dot.
#[must_use]
pub fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Why a dropped file was refused.
///
/// An accepted file has no reason; validation returns
/// `Option<RejectionReason>` and `None` means accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionReason {
    /// The file's extension is missing or not in the configured list.
    UnsupportedType,
    /// The file is larger than the configured maximum.
    ExceedsMaxSize,
}

impl RejectionReason {
    /// Order in which reasons win when a file fails several checks.
    ///
    /// This order is fixed: a file that is both the wrong type and too
    /// large is always reported as [`UnsupportedType`](Self::UnsupportedType).
    pub const PRECEDENCE: [Self; 2] = [Self::UnsupportedType, Self::ExceedsMaxSize];
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedType => f.write_str("unsupported file type"),
            Self::ExceedsMaxSize => f.write_str("file exceeds maximum size"),
        }
    }
}

/// Metadata of the file carried by a drop, plus the host's file handle.
///
/// Only lives for the processing of one drop. `raw` is never read; it is
/// handed back to the caller inside the accepted or rejected result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor<F> {
    /// File name as reported by the host, including any extension.
    pub name: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Host file reference.
    pub raw: F,
}

impl<F> FileDescriptor<F> {
    /// Create a new descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, size_bytes: u64, raw: F) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            raw,
        }
    }

    /// Extension of [`name`](Self::name), if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        extension_of(&self.name)
    }
}

/// A dropped file that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedFile<F> {
    /// The validated file.
    pub file: FileDescriptor<F>,
}

impl<F> AcceptedFile<F> {
    /// Consumes the result and returns the host file reference.
    #[must_use]
    pub fn into_raw(self) -> F {
        self.file.raw
    }
}

/// A dropped file that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFile<F> {
    /// The refused file.
    pub file: FileDescriptor<F>,
    /// Why the file was refused.
    pub reason: RejectionReason,
}

impl<F> RejectedFile<F> {
    /// Consumes the result and returns the host file reference.
    #[must_use]
    pub fn into_raw(self) -> F {
        self.file.raw
    }
}

/// Errors that can occur while processing a drop.
///
/// None of these are fatal: the controller has already returned to idle
/// and suppressed the host's default handling when one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    /// The drop carried no file, e.g. dragged text or a link.
    #[error("no file available in the dropped transfer")]
    NoFileAvailable,
}
