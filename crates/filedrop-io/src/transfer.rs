//! DOM drag events and `DataTransfer` objects as core signals.
//!
//! Hosts deliver the transfer object in one of two shapes: directly on
//! the event (`event.dataTransfer`), or one level down when the event was
//! wrapped by another library (`event.originalEvent.dataTransfer`). Both
//! are read by [`data_transfer_of`].
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use filedrop_core::{DragSignal, FileDescriptor, Transfer};
use wasm_bindgen::{JsCast, JsValue};

/// A native drag event delivered to a drop zone.
#[derive(Debug, Clone)]
pub struct WebDragSignal {
    event: web_sys::Event,
}

impl WebDragSignal {
    /// Wrap a DOM event.
    #[must_use]
    pub const fn new(event: web_sys::Event) -> Self {
        Self { event }
    }

    /// The wrapped DOM event.
    #[must_use]
    pub const fn event(&self) -> &web_sys::Event {
        &self.event
    }
}

impl DragSignal for WebDragSignal {
    type Anchor = web_sys::Element;
    type Transfer = WebTransfer;

    fn transfer(&self) -> Option<WebTransfer> {
        data_transfer_of(&self.event).map(WebTransfer)
    }

    fn suppress_default(&self) {
        self.event.prevent_default();
        self.event.stop_propagation();
    }
}

/// A browser `DataTransfer` carried by a drag event.
#[derive(Debug, Clone)]
pub struct WebTransfer(pub web_sys::DataTransfer);

impl Transfer for WebTransfer {
    type File = web_sys::File;

    fn first_file(&self) -> Option<FileDescriptor<web_sys::File>> {
        let file = self.0.files()?.get(0)?;
        Some(FileDescriptor::new(file.name(), blob_size(file.size()), file))
    }
}

/// Convert a `Blob.size` (a JS number) to a byte count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // sizes are non-negative integers below 2^53
fn blob_size(size: f64) -> u64 {
    size.max(0.0) as u64
}

/// Read the `DataTransfer` from a drag event payload.
///
/// Tries `payload.dataTransfer` first, then
/// `payload.originalEvent.dataTransfer`. Returns `None` when neither
/// holds a `DataTransfer`.
#[must_use]
pub fn data_transfer_of(payload: &JsValue) -> Option<web_sys::DataTransfer> {
    read_data_transfer(payload).or_else(|| {
        let inner = get_property(payload, "originalEvent")?;
        read_data_transfer(&inner)
    })
}

fn read_data_transfer(value: &JsValue) -> Option<web_sys::DataTransfer> {
    get_property(value, "dataTransfer")?
        .dyn_into::<web_sys::DataTransfer>()
        .ok()
}

/// `value[name]`, or `None` for non-objects and missing properties.
fn get_property(value: &JsValue, name: &str) -> Option<JsValue> {
    if !value.is_object() {
        return None;
    }
    js_sys::Reflect::get(value, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Leave filter for [`WebDragSignal`]s.
///
/// Browsers fire `dragleave` when the pointer crosses from the drop zone
/// onto one of its own children. Such a leave is false when the element
/// being entered (`relatedTarget`) is the anchor or inside it.
///
/// This is wider than matching the anchor's element reference alone: a
/// leave into any descendant of the anchor is also flagged, so moving
/// across nested content keeps the hover alive. Browsers that report no
/// `relatedTarget` for drag events make every leave real.
#[must_use]
pub fn is_leave_within_anchor(signal: &WebDragSignal, anchor: &web_sys::Element) -> bool {
    signal
        .event
        .dyn_ref::<web_sys::MouseEvent>()
        .and_then(web_sys::MouseEvent::related_target)
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| anchor.contains(Some(&node)))
}
