//! Download panel for the filtered result.

use std::rc::Rc;

use dioxus::prelude::*;
use tinge_filters::FilterKind;

use crate::analytics;
use crate::download;

/// Props for the [`DownloadPanel`] component.
#[derive(Props, Clone)]
pub struct DownloadPanelProps {
    /// The filtered JPEG to download. `None` disables the button.
    /// Wrapped in `Rc` to avoid cloning the bytes on each render.
    jpeg: Option<Rc<Vec<u8>>>,
    /// Filter that produced the bytes; names the downloaded file.
    kind: FilterKind,
}

impl PartialEq for DownloadPanelProps {
    fn eq(&self, other: &Self) -> bool {
        let bytes_eq = match (&self.jpeg, &other.jpeg) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        bytes_eq && self.kind == other.kind
    }
}

/// Download button for the filtered JPEG.
///
/// Disabled until a filtered result exists. The file is named
/// `filtered_image_<slug>.jpg` after the filter that produced it.
#[component]
pub fn DownloadPanel(props: DownloadPanelProps) -> Element {
    let has_result = props.jpeg.is_some();
    let mut download_error = use_signal(|| Option::<String>::None);

    let on_click = {
        let jpeg = props.jpeg.clone();
        let kind = props.kind;
        move |_| {
            if let Some(ref bytes) = jpeg {
                let filename = download::filtered_filename(kind);
                match download::trigger_download(bytes, &filename, "image/jpeg") {
                    Ok(()) => {
                        download_error.set(None);
                        analytics::track_download(kind.slug());
                    }
                    Err(e) => {
                        download_error.set(Some(format!("Download failed: {e}")));
                    }
                }
            }
        }
    };

    let enabled_class = "px-4 py-2 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] rounded text-white font-medium transition-colors cursor-pointer";
    let disabled_class =
        "px-4 py-2 bg-[var(--btn-disabled)] rounded text-[var(--text-disabled)] cursor-not-allowed";

    rsx! {
        div { class: "space-y-3",
            h3 { class: "text-lg font-semibold text-[var(--text-heading)]", "Download" }

            if let Some(ref err) = download_error() {
                p { class: "text-[var(--text-error)] text-sm", "{err}" }
            }

            button {
                class: if has_result { enabled_class } else { disabled_class },
                disabled: !has_result,
                onclick: on_click,
                "JPEG"
            }
        }
    }
}
