//! filedrop demo: a drop zone that accepts small images and logs outcomes.

use dioxus::html::FileData;
use dioxus::prelude::*;
use filedrop_core::{AcceptedFile, RejectedFile};
use filedrop_io::FileDrop;

/// Extensions accepted by the demo zone.
const SUPPORTED_FILE_TYPES: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Size limit for the demo zone: 1 MiB.
const MAXIMUM_SIZE_BYTES: u64 = 1024 * 1024;

fn main() {
    dioxus::launch(app);
}

/// One line in the outcome log.
#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Accepted { name: String, size_bytes: u64 },
    Rejected { name: String, reason: String },
}

impl Outcome {
    const fn class(&self) -> &'static str {
        match self {
            Self::Accepted { .. } => "ok",
            Self::Rejected { .. } => "err",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accepted { name, size_bytes } => {
                write!(f, "accepted {name} ({size_bytes} bytes)")
            }
            Self::Rejected { name, reason } => write!(f, "rejected {name}: {reason}"),
        }
    }
}

/// Root application component.
fn app() -> Element {
    let mut outcomes = use_signal(Vec::<Outcome>::new);
    let mut hovering = use_signal(|| false);

    let on_file_dropped = move |accepted: AcceptedFile<FileData>| {
        outcomes.write().push(Outcome::Accepted {
            name: accepted.file.name,
            size_bytes: accepted.file.size_bytes,
        });
    };

    let on_file_rejected = move |rejected: RejectedFile<FileData>| {
        outcomes.write().push(Outcome::Rejected {
            name: rejected.file.name,
            reason: rejected.reason.to_string(),
        });
    };

    let prompt = if hovering() {
        "Release to drop"
    } else {
        "Drop an image here"
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        div { class: "app",
            header {
                h1 { "filedrop" }
                p { class: "muted",
                    "PNG, JPEG, GIF or WebP up to {MAXIMUM_SIZE_BYTES / 1024} KiB. Files are checked, never read."
                }
            }

            FileDrop {
                supported_file_types: SUPPORTED_FILE_TYPES.iter().map(|s| (*s).to_owned()).collect::<Vec<_>>(),
                maximum_size_bytes: MAXIMUM_SIZE_BYTES,
                on_hover_start: move |()| hovering.set(true),
                on_hover_end: move |()| hovering.set(false),
                on_file_dropped: on_file_dropped,
                on_file_rejected: on_file_rejected,
                p { "{prompt}" }
            }

            ul { class: "log",
                for (i, outcome) in outcomes().into_iter().enumerate().rev() {
                    li { key: "{i}", class: outcome.class(), "{outcome}" }
                }
            }
        }
    }
}
