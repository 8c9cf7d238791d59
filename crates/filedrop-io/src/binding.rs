//! Native drag-and-drop listeners on a DOM element.
//!
//! [`FileDropBinding`] turns any element into a drop zone without a UI
//! framework: it registers `dragover`, `dragleave` and `drop` listeners
//! that drive a [`DragDropController`], styles the element through
//! [`DropZoneStyle`], and removes the listeners again when dropped.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use std::cell::RefCell;
use std::rc::Rc;

use filedrop_core::{
    DragDropController, DragPhase, DragSignal, DragStatus, DropEvent, ValidationConfig,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::style::{DropZoneClasses, DropZoneStyle};
use crate::transfer::{WebDragSignal, is_leave_within_anchor};

/// Errors that can occur when binding a drop zone.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),

    /// The binding was used from inside one of its own event callbacks.
    #[error("drop zone is busy dispatching an event")]
    Busy,
}

impl From<JsValue> for BindError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

type Controller = Rc<RefCell<DragDropController<WebDragSignal>>>;
type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// Drag-and-drop listeners attached to one element.
///
/// Keep the binding alive for as long as the element should accept
/// drops; dropping it detaches the listeners.
pub struct FileDropBinding {
    element: web_sys::Element,
    controller: Controller,
    listeners: Vec<(DragPhase, Listener)>,
}

impl std::fmt::Debug for FileDropBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDropBinding")
            .field("element", &self.element)
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

impl FileDropBinding {
    /// Make `element` a drop zone validating against `config`.
    ///
    /// `on_event` receives hover and drop notifications. The controller is
    /// borrowed while it runs, so calls back into this binding from there
    /// fail with [`BindError::Busy`].
    ///
    /// # Errors
    ///
    /// Returns [`BindError::JsError`] if a listener cannot be registered.
    /// Listeners registered before the failure are removed again.
    pub fn attach(
        element: web_sys::Element,
        config: ValidationConfig,
        classes: DropZoneClasses,
        on_event: impl FnMut(DropEvent<web_sys::File>) + 'static,
    ) -> Result<Self, BindError> {
        let controller = DragDropController::new(element.clone(), config)
            .on_event(on_event)
            .with_feedback(DropZoneStyle::new(element.clone(), classes))
            .with_leave_filter(is_leave_within_anchor);

        let mut binding = Self {
            element,
            controller: Rc::new(RefCell::new(controller)),
            listeners: Vec::with_capacity(DragPhase::ALL.len()),
        };

        for phase in DragPhase::ALL {
            let listener = make_listener(Rc::clone(&binding.controller), phase);
            // On error `binding` is dropped here, detaching earlier listeners.
            binding.element.add_event_listener_with_callback(
                phase.event_type(),
                listener.as_ref().unchecked_ref(),
            )?;
            binding.listeners.push((phase, listener));
        }

        Ok(binding)
    }

    /// Replace the validation configuration for subsequent drops.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Busy`] when called from the event callback.
    pub fn set_config(&self, config: ValidationConfig) -> Result<(), BindError> {
        self.controller
            .try_borrow_mut()
            .map_err(|_| BindError::Busy)?
            .set_config(config);
        Ok(())
    }

    /// Current drag state of the zone.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::Busy`] when called from the event callback.
    pub fn status(&self) -> Result<DragStatus, BindError> {
        Ok(self
            .controller
            .try_borrow()
            .map_err(|_| BindError::Busy)?
            .status())
    }

    /// The element acting as drop zone.
    #[must_use]
    pub const fn element(&self) -> &web_sys::Element {
        &self.element
    }
}

impl Drop for FileDropBinding {
    fn drop(&mut self) {
        for (phase, listener) in self.listeners.drain(..) {
            if let Err(e) = self.element.remove_event_listener_with_callback(
                phase.event_type(),
                listener.as_ref().unchecked_ref(),
            ) {
                web_sys::console::warn_1(
                    &format!("failed to remove {} listener: {e:?}", phase.event_type()).into(),
                );
            }
        }
    }
}

/// Build the DOM callback for one phase.
fn make_listener(controller: Controller, phase: DragPhase) -> Listener {
    Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let signal = WebDragSignal::new(event);
        let Ok(mut controller) = controller.try_borrow_mut() else {
            // Re-entrant dispatch from inside a listener callback.
            signal.suppress_default();
            web_sys::console::warn_1(
                &format!("ignored re-entrant {} event", phase.event_type()).into(),
            );
            return;
        };
        if let Err(e) = controller.handle(phase, &signal) {
            web_sys::console::debug_1(&format!("drop ignored: {e}").into());
        }
    })
}
