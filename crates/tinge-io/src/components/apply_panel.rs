//! Apply control with a busy indicator.
//!
//! The button disables the moment a run starts, so a second submission
//! cannot be issued while one is in flight; it re-enables only when the
//! run's state is cleared.

use dioxus::prelude::*;

/// Props for the [`ApplyPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ApplyPanelProps {
    /// Whether a filter run is currently in flight.
    processing: bool,
    /// Whether there is an image to apply a filter to.
    ready: bool,
    /// Callback fired when the apply button is clicked.
    on_apply: EventHandler<()>,
}

/// Apply button plus loading indicator.
#[component]
pub fn ApplyPanel(props: ApplyPanelProps) -> Element {
    let disabled = props.processing || !props.ready;

    let button_class = if disabled {
        "px-4 py-2 bg-[var(--btn-disabled)] rounded text-[var(--text-disabled)] cursor-not-allowed"
    } else {
        "px-4 py-2 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] rounded text-white font-medium transition-colors cursor-pointer"
    };

    rsx! {
        div { class: "flex items-center gap-3",
            button {
                r#type: "submit",
                class: "{button_class}",
                disabled: disabled,
                onclick: move |_| props.on_apply.call(()),
                "Apply Filter"
            }

            if props.processing {
                p { class: "text-[var(--text-secondary)] animate-pulse",
                    "Processing..."
                }
            }
        }
    }
}
