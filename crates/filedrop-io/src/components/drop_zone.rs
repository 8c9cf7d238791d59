//! Drop-zone component with hover tracking and file validation.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use filedrop_core::{
    AcceptedFile, DragDropController, DragPhase, DragSignal, DropEvent, DropZoneFeedback,
    FileDescriptor, RejectedFile, Transfer, ValidationConfig,
};

use crate::style::DropZoneClasses;

/// What the drop zone is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneStatus {
    /// Waiting for a drag.
    #[default]
    Idle,
    /// A drag hovers over the zone.
    Hovering,
    /// The last drop was accepted.
    Accepted,
    /// The last drop was rejected.
    Rejected,
}

/// A Dioxus drag event as a core signal.
///
/// Dioxus attaches listeners to the zone itself, so there is no anchor
/// element to compare leave targets against.
struct DioxusDrag(DragEvent);

impl DragSignal for DioxusDrag {
    type Anchor = ();
    type Transfer = DioxusFiles;

    fn transfer(&self) -> Option<DioxusFiles> {
        Some(DioxusFiles(self.0.files()))
    }

    fn suppress_default(&self) {
        self.0.prevent_default();
        self.0.stop_propagation();
    }
}

/// The files carried by a Dioxus drag event.
///
/// Empty while hovering in most browsers; populated on drop.
struct DioxusFiles(Vec<FileData>);

impl Transfer for DioxusFiles {
    type File = FileData;

    fn first_file(&self) -> Option<FileDescriptor<FileData>> {
        self.0
            .first()
            .map(|file| FileDescriptor::new(file.name(), file.size(), file.clone()))
    }
}

/// Feeds controller transitions into the component's status signal.
struct StatusFeedback(Signal<ZoneStatus>);

impl DropZoneFeedback for StatusFeedback {
    fn on_hover_start(&mut self) {
        self.0.set(ZoneStatus::Hovering);
    }

    fn on_hover_end(&mut self) {
        self.0.set(ZoneStatus::Idle);
    }

    fn on_file_accepted(&mut self) {
        self.0.set(ZoneStatus::Accepted);
    }

    fn on_file_rejected(&mut self) {
        self.0.set(ZoneStatus::Rejected);
    }
}

type Controller = Rc<RefCell<DragDropController<DioxusDrag>>>;

/// Props for the [`FileDrop`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileDropProps {
    /// Accepted extensions without the leading dot. Empty accepts all types.
    #[props(default)]
    supported_file_types: Vec<String>,

    /// Largest accepted file size in bytes. Absent means no limit.
    maximum_size_bytes: Option<u64>,

    /// Called when a drag starts hovering over the zone.
    #[props(default)]
    on_hover_start: EventHandler<()>,

    /// Called when a hover ends, by leaving or dropping.
    #[props(default)]
    on_hover_end: EventHandler<()>,

    /// Called with a dropped file that passed validation.
    on_file_dropped: EventHandler<AcceptedFile<FileData>>,

    /// Called with a dropped file that failed validation and the reason.
    #[props(default)]
    on_file_rejected: EventHandler<RejectedFile<FileData>>,

    /// Content rendered inside the zone.
    children: Element,
}

/// A drag-and-drop zone validating dropped files.
///
/// The zone carries the `filedrop-zone` class plus the default
/// [`DropZoneClasses`] name for its current [`ZoneStatus`], alongside
/// Tailwind utility classes.
///
/// Files are checked by extension and size only; their contents are
/// never read. The accepted or rejected file handle is passed to the
/// matching callback. Configuration props are re-applied on every render
/// and take effect from the next drop.
///
/// No leave filter is installed: each time the pointer crosses onto a
/// child element of the zone, callers receive an `on_hover_end` followed
/// by an `on_hover_start`. Use [`FileDropBinding`](crate::FileDropBinding)
/// when those pairs must be suppressed.
#[component]
pub fn FileDrop(props: FileDropProps) -> Element {
    let status = use_signal(ZoneStatus::default);
    let config = ValidationConfig::new(
        props.supported_file_types.iter().cloned(),
        props.maximum_size_bytes,
    );

    let controller: Controller = use_hook(|| {
        let FileDropProps {
            on_hover_start,
            on_hover_end,
            on_file_dropped,
            on_file_rejected,
            ..
        } = props.clone();
        let controller = DragDropController::new((), config.clone())
            .on_event(move |event| match event {
                DropEvent::HoverStart => on_hover_start.call(()),
                DropEvent::HoverEnd => on_hover_end.call(()),
                DropEvent::FileDropped(accepted) => on_file_dropped.call(accepted),
                DropEvent::FileRejected(rejected) => on_file_rejected.call(rejected),
            })
            .with_feedback(StatusFeedback(status));
        Rc::new(RefCell::new(controller))
    });

    if let Ok(mut current) = controller.try_borrow_mut() {
        if current.config() != &config {
            current.set_config(config);
        }
    }

    let on_enter = handler(&controller, DragPhase::Enter);
    let on_leave = handler(&controller, DragPhase::Leave);
    let on_drop = handler(&controller, DragPhase::Drop);

    let (status_class, border_class) = match status() {
        ZoneStatus::Hovering => (
            DropZoneClasses::DEFAULT_HOVER,
            "border-[var(--border-accent)] bg-[var(--surface-active)]",
        ),
        ZoneStatus::Accepted => (
            DropZoneClasses::DEFAULT_ACCEPTED,
            "border-[var(--text-success)] bg-[var(--surface)]",
        ),
        ZoneStatus::Rejected => (
            DropZoneClasses::DEFAULT_REJECTED,
            "border-[var(--text-error)] bg-[var(--surface)]",
        ),
        ZoneStatus::Idle => ("", "border-[var(--border-muted)] bg-[var(--surface)]"),
    };

    rsx! {
        div {
            class: "filedrop-zone {status_class} border-2 border-dashed rounded-lg p-6 text-center transition-colors {border_class}",
            ondragover: on_enter,
            ondragleave: on_leave,
            ondrop: on_drop,
            {props.children}
        }
    }
}

/// Event handler dispatching one phase to the shared controller.
fn handler(controller: &Controller, phase: DragPhase) -> impl FnMut(DragEvent) + 'static {
    let controller = Rc::clone(controller);
    move |evt: DragEvent| {
        let signal = DioxusDrag(evt);
        let Ok(mut controller) = controller.try_borrow_mut() else {
            signal.suppress_default();
            return;
        };
        if let Err(e) = controller.handle(phase, &signal) {
            web_sys::console::debug_1(&format!("drop ignored: {e}").into());
        }
    }
}
