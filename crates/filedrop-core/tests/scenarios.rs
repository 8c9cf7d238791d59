//! Integration test: full drag gestures through the controller, checking
//! the notifications a caller observes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use filedrop_core::{
    DragDropController, DragPhase, DragSignal, DragStatus, DropEvent, FileDescriptor,
    RejectionReason, Transfer, ValidationConfig,
};

/// An in-memory drag payload: a list of `(name, size)` files.
#[derive(Debug, Clone, Default)]
struct Files(Vec<(String, u64)>);

impl Transfer for Files {
    type File = String;

    fn first_file(&self) -> Option<FileDescriptor<String>> {
        self.0
            .first()
            .map(|(name, size)| FileDescriptor::new(name.clone(), *size, name.clone()))
    }
}

/// A drag event as delivered by a host with no default behaviour.
struct Gesture(Option<Files>);

impl Gesture {
    fn hover() -> Self {
        Self(Some(Files::default()))
    }

    fn release(name: &str, size: u64) -> Self {
        Self(Some(Files(vec![(name.to_owned(), size)])))
    }
}

impl DragSignal for Gesture {
    type Anchor = ();
    type Transfer = Files;

    fn transfer(&self) -> Option<Files> {
        self.0.clone()
    }

    fn suppress_default(&self) {}
}

/// Caller-visible notifications, named like the host outputs.
#[derive(Debug, PartialEq, Eq)]
enum Seen {
    HoverStart,
    HoverEnd,
    Dropped(String),
    Rejected(String, RejectionReason),
}

fn run(config: ValidationConfig, gesture: &[(DragPhase, Gesture)]) -> Vec<Seen> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let mut controller = DragDropController::<Gesture>::new((), config).on_event(move |event| {
        log.borrow_mut().push(match event {
            DropEvent::HoverStart => Seen::HoverStart,
            DropEvent::HoverEnd => Seen::HoverEnd,
            DropEvent::FileDropped(accepted) => Seen::Dropped(accepted.into_raw()),
            DropEvent::FileRejected(rejected) => {
                Seen::Rejected(rejected.file.name, rejected.reason)
            }
        });
    });
    for (phase, signal) in gesture {
        controller.handle(*phase, signal).expect("drop should carry a file");
    }
    assert_eq!(controller.status(), DragStatus::Idle);
    seen.take()
}

fn images() -> ValidationConfig {
    ValidationConfig::new(["png", "jpg"], Some(1_000_000))
}

fn hover_then_drop(name: &str, size: u64) -> Vec<(DragPhase, Gesture)> {
    vec![
        (DragPhase::Enter, Gesture::hover()),
        (DragPhase::Enter, Gesture::hover()),
        (DragPhase::Drop, Gesture::release(name, size)),
    ]
}

#[test]
fn uppercase_extension_within_limit_is_accepted() {
    let seen = run(images(), &hover_then_drop("photo.PNG", 500_000));
    assert_eq!(
        seen,
        vec![
            Seen::HoverStart,
            Seen::HoverEnd,
            Seen::Dropped("photo.PNG".into())
        ]
    );
}

#[test]
fn unlisted_extension_is_rejected_as_unsupported() {
    let seen = run(images(), &hover_then_drop("doc.pdf", 100));
    assert_eq!(
        seen.last(),
        Some(&Seen::Rejected(
            "doc.pdf".into(),
            RejectionReason::UnsupportedType
        ))
    );
}

#[test]
fn oversized_file_is_rejected_as_too_large() {
    let seen = run(images(), &hover_then_drop("photo.png", 5_000_000));
    assert_eq!(
        seen.last(),
        Some(&Seen::Rejected(
            "photo.png".into(),
            RejectionReason::ExceedsMaxSize
        ))
    );
}

#[test]
fn permissive_config_accepts_anything() {
    for (name, size) in [("doc.pdf", 100), ("Makefile", 0), ("huge.iso", u64::MAX)] {
        let seen = run(ValidationConfig::permit_all(), &hover_then_drop(name, size));
        assert_eq!(seen.last(), Some(&Seen::Dropped(name.into())), "{name}");
    }
}

#[test]
fn drop_after_leave_emits_nothing() {
    let seen = run(
        images(),
        &[
            (DragPhase::Enter, Gesture::hover()),
            (DragPhase::Leave, Gesture(None)),
            (DragPhase::Drop, Gesture::release("photo.png", 1)),
        ],
    );
    assert_eq!(seen, vec![Seen::HoverStart, Seen::HoverEnd]);
}

#[test]
fn wrong_type_and_too_large_reports_type() {
    let seen = run(images(), &hover_then_drop("movie.mkv", 5_000_000));
    assert_eq!(
        seen.last(),
        Some(&Seen::Rejected(
            "movie.mkv".into(),
            RejectionReason::UnsupportedType
        ))
    );
}
