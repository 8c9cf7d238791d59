//! Visual feedback on a drop-zone element via CSS classes.
//!
//! [`DropZoneStyle`] is the browser [`DropZoneFeedback`] sink: it toggles
//! one class while a drag hovers and leaves an outcome class after a drop,
//! so styling stays in the page's stylesheet.

use filedrop_core::DropZoneFeedback;
use serde::{Deserialize, Serialize};

/// Class names applied to the drop-zone element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropZoneClasses {
    /// Present while a drag hovers over the zone.
    pub hover: String,
    /// Present after the last drop was accepted.
    pub accepted: String,
    /// Present after the last drop was rejected.
    pub rejected: String,
}

impl DropZoneClasses {
    /// Default hover class.
    pub const DEFAULT_HOVER: &'static str = "filedrop-hover";
    /// Default accepted class.
    pub const DEFAULT_ACCEPTED: &'static str = "filedrop-accepted";
    /// Default rejected class.
    pub const DEFAULT_REJECTED: &'static str = "filedrop-rejected";
}

impl Default for DropZoneClasses {
    fn default() -> Self {
        Self {
            hover: Self::DEFAULT_HOVER.to_owned(),
            accepted: Self::DEFAULT_ACCEPTED.to_owned(),
            rejected: Self::DEFAULT_REJECTED.to_owned(),
        }
    }
}

/// Applies [`DropZoneClasses`] to an element as the drop zone changes state.
///
/// Starting a new hover clears the previous outcome class.
#[derive(Debug, Clone)]
pub struct DropZoneStyle {
    element: web_sys::Element,
    classes: DropZoneClasses,
}

impl DropZoneStyle {
    /// Style `element` with `classes`.
    #[must_use]
    pub const fn new(element: web_sys::Element, classes: DropZoneClasses) -> Self {
        Self { element, classes }
    }

    fn add(&self, class: &str) {
        if let Err(e) = self.element.class_list().add_1(class) {
            web_sys::console::warn_1(
                &format!("failed to add drop-zone class {class:?}: {e:?}").into(),
            );
        }
    }

    fn remove(&self, class: &str) {
        if let Err(e) = self.element.class_list().remove_1(class) {
            web_sys::console::warn_1(
                &format!("failed to remove drop-zone class {class:?}: {e:?}").into(),
            );
        }
    }
}

impl DropZoneFeedback for DropZoneStyle {
    fn on_hover_start(&mut self) {
        self.remove(&self.classes.accepted);
        self.remove(&self.classes.rejected);
        self.add(&self.classes.hover);
    }

    fn on_hover_end(&mut self) {
        self.remove(&self.classes.hover);
    }

    fn on_file_accepted(&mut self) {
        self.remove(&self.classes.rejected);
        self.add(&self.classes.accepted);
    }

    fn on_file_rejected(&mut self) {
        self.remove(&self.classes.accepted);
        self.add(&self.classes.rejected);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_classes_use_filedrop_prefix() {
        let classes = DropZoneClasses::default();
        assert_eq!(classes.hover, "filedrop-hover");
        assert_eq!(classes.accepted, "filedrop-accepted");
        assert_eq!(classes.rejected, "filedrop-rejected");
    }

    #[test]
    fn classes_deserialize_with_missing_fields_defaulted() {
        let classes: DropZoneClasses =
            serde_json::from_str(r#"{"hover": "is-dragging"}"#).unwrap();
        assert_eq!(classes.hover, "is-dragging");
        assert_eq!(classes.accepted, DropZoneClasses::DEFAULT_ACCEPTED);
        assert_eq!(classes.rejected, DropZoneClasses::DEFAULT_REJECTED);

        let classes: DropZoneClasses = serde_json::from_str("{}").unwrap();
        assert_eq!(classes, DropZoneClasses::default());
    }

    #[test]
    fn classes_serialize_as_camel_case_object() {
        let json = serde_json::to_value(DropZoneClasses::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hover": "filedrop-hover",
                "accepted": "filedrop-accepted",
                "rejected": "filedrop-rejected",
            })
        );
    }
}
