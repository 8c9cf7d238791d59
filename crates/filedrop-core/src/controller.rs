//! Drop-zone state machine: reacts to drag signals from the host surface.
//!
//! The controller has two states, [`DragStatus::Idle`] and
//! [`DragStatus::Hovering`], driven by three signals:
//!
//! | signal | `Idle`                                   | `Hovering`                           |
//! |--------|------------------------------------------|--------------------------------------|
//! | enter  | capture transfer, hover start, `Hovering` | nothing                              |
//! | leave  | nothing                                  | release transfer, hover end, `Idle`  |
//! | drop   | nothing                                  | hover end, validate, emit, `Idle`    |
//!
//! Every signal has its default host handling suppressed (and its
//! propagation stopped), whichever branch runs.
//!
//! # Host seams
//!
//! The host surface is abstracted by [`DragSignal`] (what a drag event
//! carries) and [`DropZoneFeedback`] (the visual sink). Outbound
//! notifications are delivered as [`DropEvent`]s to a listener closure
//! registered with [`DragDropController::on_event`].

use crate::state::{DropState, Transfer};
use crate::types::{AcceptedFile, DropError, RejectedFile, ValidationConfig};

/// A drag signal delivered by the host surface.
pub trait DragSignal {
    /// Handle identifying the drop-zone element the controller is bound to.
    type Anchor;

    /// The transfer object carried by the signal.
    type Transfer: Transfer;

    /// Read the transfer object from the signal payload, if it has one.
    fn transfer(&self) -> Option<Self::Transfer>;

    /// Prevent the host's default action and stop propagation to ancestors.
    fn suppress_default(&self);
}

/// Receives presentation lifecycle notifications for the drop zone.
///
/// All methods default to doing nothing, so a sink only implements the
/// transitions it styles.
pub trait DropZoneFeedback {
    /// A drag started hovering over the zone.
    fn on_hover_start(&mut self) {}

    /// The drag left the zone or was dropped.
    fn on_hover_end(&mut self) {}

    /// A dropped file passed validation.
    fn on_file_accepted(&mut self) {}

    /// A dropped file failed validation.
    fn on_file_rejected(&mut self) {}
}

/// No visual feedback.
impl DropZoneFeedback for () {}

/// Outbound notification from the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropEvent<F> {
    /// A drag started hovering over the zone.
    HoverStart,
    /// The hover ended without a false-leave.
    HoverEnd,
    /// A dropped file passed validation.
    FileDropped(AcceptedFile<F>),
    /// A dropped file failed validation.
    FileRejected(RejectedFile<F>),
}

/// Which drag signal is being delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// A drag is over the zone. Fired repeatedly while the drag moves.
    Enter,
    /// A drag left the zone.
    Leave,
    /// A drag was released over the zone.
    Drop,
}

impl DragPhase {
    /// All phases, in binding order.
    pub const ALL: [Self; 3] = [Self::Enter, Self::Leave, Self::Drop];

    /// Map a DOM event type to a phase.
    ///
    /// Both `dragenter` and `dragover` map to [`Enter`](Self::Enter);
    /// `dragover` is the one that keeps firing while the drag hovers.
    #[must_use]
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "dragenter" | "dragover" => Some(Self::Enter),
            "dragleave" => Some(Self::Leave),
            "drop" => Some(Self::Drop),
            _ => None,
        }
    }

    /// The DOM event type a binding listens to for this phase.
    #[must_use]
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::Enter => "dragover",
            Self::Leave => "dragleave",
            Self::Drop => "drop",
        }
    }
}

/// Whether a transfer is being tracked over the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragStatus {
    /// No drag tracked.
    #[default]
    Idle,
    /// A transfer is pending over the zone.
    Hovering,
}

/// File handle type produced by a signal's transfer.
pub type FileOf<S> = <<S as DragSignal>::Transfer as Transfer>::File;

type Listener<F> = Box<dyn FnMut(DropEvent<F>)>;
type LeaveFilter<S, A> = Box<dyn Fn(&S, &A) -> bool>;

const fn never_false_leave<S, A>(_: &S, _: &A) -> bool {
    false
}

/// Drives a [`DropState`] from host drag signals and emits outcomes.
///
/// Handlers run synchronously and to completion; the controller is meant
/// to live on the host's single event-dispatch thread.
pub struct DragDropController<S: DragSignal> {
    anchor: S::Anchor,
    state: DropState<S::Transfer>,
    listener: Listener<FileOf<S>>,
    feedback: Box<dyn DropZoneFeedback>,
    is_false_leave: LeaveFilter<S, S::Anchor>,
}

impl<S> std::fmt::Debug for DragDropController<S>
where
    S: DragSignal + 'static,
    S::Anchor: 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragDropController")
            .field("status", &self.status())
            .field("config", self.state.config())
            .finish_non_exhaustive()
    }
}

// Boxed callbacks are `'static`, so the signal and anchor types must be too.
impl<S> DragDropController<S>
where
    S: DragSignal + 'static,
    S::Anchor: 'static,
{
    /// Create a controller bound to `anchor`, validating against `config`.
    ///
    /// Starts with no listener, no visual feedback, and a leave filter
    /// that never reports a false leave.
    #[must_use]
    pub fn new(anchor: S::Anchor, config: ValidationConfig) -> Self {
        Self {
            anchor,
            state: DropState::new(config),
            listener: Box::new(|_| {}),
            feedback: Box::new(()),
            is_false_leave: Box::new(never_false_leave::<S, S::Anchor>),
        }
    }

    /// Register the listener receiving [`DropEvent`]s. Replaces any previous one.
    #[must_use]
    pub fn on_event(mut self, listener: impl FnMut(DropEvent<FileOf<S>>) + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    /// Register the visual feedback sink. Replaces any previous one.
    #[must_use]
    pub fn with_feedback(mut self, feedback: impl DropZoneFeedback + 'static) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    /// Register the predicate recognising false leave signals.
    ///
    /// Some hosts report a leave while the drag is still inside the zone
    /// (e.g. when it crosses onto a child element). When the predicate
    /// returns `true` for a leave signal and the anchor, the controller
    /// still returns to idle but skips the hover-end notification.
    #[must_use]
    pub fn with_leave_filter(
        mut self,
        is_false_leave: impl Fn(&S, &S::Anchor) -> bool + 'static,
    ) -> Self {
        self.is_false_leave = Box::new(is_false_leave);
        self
    }

    /// The drop-zone handle this controller is bound to.
    #[must_use]
    pub const fn anchor(&self) -> &S::Anchor {
        &self.anchor
    }

    /// Current state of the machine.
    #[must_use]
    pub const fn status(&self) -> DragStatus {
        if self.state.has_pending_transfer() {
            DragStatus::Hovering
        } else {
            DragStatus::Idle
        }
    }

    /// The configuration drops are validated against.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        self.state.config()
    }

    /// Replace the validation configuration for subsequent drops.
    pub fn set_config(&mut self, config: ValidationConfig) {
        self.state.set_config(config);
    }

    /// Dispatch `signal` to the handler for `phase`.
    ///
    /// # Errors
    ///
    /// See [`on_drop`](Self::on_drop).
    pub fn handle(&mut self, phase: DragPhase, signal: &S) -> Result<(), DropError> {
        match phase {
            DragPhase::Enter => {
                self.on_drag_enter(signal);
                Ok(())
            }
            DragPhase::Leave => {
                self.on_drag_leave(signal);
                Ok(())
            }
            DragPhase::Drop => self.on_drop(signal),
        }
    }

    /// A drag is over the zone.
    ///
    /// From idle, captures the signal's transfer and starts hovering.
    /// Signals without a transfer are ignored. Repeated enters while
    /// hovering change nothing.
    pub fn on_drag_enter(&mut self, signal: &S) {
        signal.suppress_default();
        if self.state.has_pending_transfer() {
            return;
        }
        let Some(transfer) = signal.transfer() else {
            return;
        };
        self.state.begin_transfer(transfer);
        (self.listener)(DropEvent::HoverStart);
        self.feedback.on_hover_start();
    }

    /// A drag left the zone.
    ///
    /// While hovering, releases the transfer and returns to idle. Hover
    /// end is notified unless the leave filter flags the signal.
    pub fn on_drag_leave(&mut self, signal: &S) {
        signal.suppress_default();
        if !self.state.has_pending_transfer() {
            return;
        }
        self.state.end_transfer();
        if (self.is_false_leave)(signal, &self.anchor) {
            return;
        }
        (self.listener)(DropEvent::HoverEnd);
        self.feedback.on_hover_end();
    }

    /// A drag was released over the zone.
    ///
    /// While hovering, ends the hover, re-reads the transfer from the drop
    /// signal (the payload at drop time is authoritative), validates its
    /// file, and emits [`DropEvent::FileDropped`] or
    /// [`DropEvent::FileRejected`]. Always ends idle.
    ///
    /// # Errors
    ///
    /// Returns [`DropError::NoFileAvailable`] if the drop carries no file.
    /// Nothing is emitted beyond hover end in that case; the controller is
    /// already idle and the signal suppressed, so callers only need to log.
    pub fn on_drop(&mut self, signal: &S) -> Result<(), DropError> {
        signal.suppress_default();
        if !self.state.has_pending_transfer() {
            return Ok(());
        }

        (self.listener)(DropEvent::HoverEnd);
        self.feedback.on_hover_end();

        self.state.end_transfer();
        if let Some(transfer) = signal.transfer() {
            self.state.begin_transfer(transfer);
        }

        let descriptor = match self.state.extract_file_descriptor() {
            Ok(descriptor) => descriptor,
            Err(e) => {
                self.state.end_transfer();
                return Err(e);
            }
        };

        match self.state.validate(&descriptor) {
            None => {
                (self.listener)(DropEvent::FileDropped(AcceptedFile { file: descriptor }));
                self.feedback.on_file_accepted();
            }
            Some(reason) => {
                (self.listener)(DropEvent::FileRejected(RejectedFile {
                    file: descriptor,
                    reason,
                }));
                self.feedback.on_file_rejected();
            }
        }

        self.state.end_transfer();
        Ok(())
    }
}
