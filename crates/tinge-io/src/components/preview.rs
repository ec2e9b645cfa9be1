//! Image preview pane.

use dioxus::prelude::*;

/// Props for the [`Preview`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PreviewProps {
    /// Pane heading (e.g. "Original", "Filtered").
    heading: String,
    /// Data URL to display; `None` shows the placeholder instead.
    src: Option<String>,
    /// Text shown while no image is available.
    placeholder: String,
}

/// A single captioned image pane.
///
/// Renders the given data URL as a responsive `<img>`, or placeholder
/// text when nothing has been selected or produced yet.
#[component]
pub fn Preview(props: PreviewProps) -> Element {
    rsx! {
        div { class: "flex-1 flex flex-col gap-2",
            h3 { class: "text-sm font-semibold text-[var(--text-heading)]",
                "{props.heading}"
            }

            div { class: "flex-1 flex items-center justify-center rounded bg-[var(--preview-bg)] overflow-hidden",
                if let Some(ref src) = props.src {
                    img {
                        src: "{src}",
                        alt: "{props.heading}",
                        class: "max-w-full max-h-[60vh] object-contain",
                    }
                } else {
                    p { class: "text-[var(--text-placeholder)] p-6",
                        "{props.placeholder}"
                    }
                }
            }
        }
    }
}
