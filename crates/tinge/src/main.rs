use std::rc::Rc;

use dioxus::prelude::*;
use tinge_filters::{FilterKind, FilterRequest, PreparedImage};
use tinge_io::{ApplyPanel, DownloadPanel, FileUpload, FilterPicker, Preview, VintageControls};
use tinge_io::{analytics, data_url};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Manages the core application state via Dioxus signals and wires
/// together the upload, preview, filter picker, apply, and download
/// components.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut source = use_signal(|| Option::<Rc<PreparedImage>>::None);
    let mut source_url = use_signal(|| Option::<String>::None);
    let mut filename = use_signal(|| Option::<String>::None);
    let mut filtered = use_signal(|| Option::<Rc<Vec<u8>>>::None);
    let mut filtered_url = use_signal(|| Option::<String>::None);
    let mut applied_kind = use_signal(|| Option::<FilterKind>::None);
    let mut processing = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut generation = use_signal(|| 0u64);
    let mut request = use_signal(FilterRequest::default);
    let mut auto_apply = use_signal(|| false);
    let mut timing = use_signal(|| Option::<String>::None);

    // --- Filter run ---
    // Spawns an async task so the "Processing..." indicator renders
    // before the synchronous filter work blocks the thread.
    let mut run_filter = move || {
        let Some(prepared) = source() else {
            return;
        };
        let req = request();

        // Increment generation so any in-flight run from a prior
        // trigger knows it is stale and should discard its result.
        generation += 1;
        let my_generation = *generation.peek();

        processing.set(true);
        error.set(None);

        spawn(async move {
            // Yield to the browser event loop so it can paint the
            // "Processing..." state before we block on the filter.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let outcome = tinge_filters::process(&prepared.jpeg, &req);

            // If another run was triggered while we were processing,
            // discard this stale result silently.
            if *generation.peek() != my_generation {
                return;
            }

            match outcome {
                Ok(run) => {
                    filtered_url.set(Some(data_url::to_data_url(&run.jpeg, "image/jpeg")));
                    filtered.set(Some(Rc::new(run.jpeg)));
                    applied_kind.set(Some(req.kind));
                    timing.set(Some(format!(
                        "Applied {} in {} ms",
                        req.kind,
                        run.diagnostics.total().as_millis(),
                    )));
                    error.set(None);
                    analytics::track_apply(req.kind.slug());
                }
                Err(e) => {
                    error.set(Some(format!("{e}")));
                    // Keep the previous result visible if one exists.
                }
            }

            processing.set(false);
        });
    };

    // --- File upload handler ---
    // Normalizes the upload off the current tick and previews it.
    // When auto-apply is on, the selected filter runs immediately.
    let on_upload = move |(bytes, name): (Vec<u8>, String)| {
        processing.set(true);
        error.set(None);

        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;

            match tinge_filters::prepare_upload(&bytes) {
                Ok(prepared) => {
                    source_url.set(Some(data_url::to_data_url(&prepared.jpeg, "image/jpeg")));
                    source.set(Some(Rc::new(prepared)));
                    filename.set(Some(name));
                    filtered.set(None);
                    filtered_url.set(None);
                    applied_kind.set(None);
                    timing.set(None);

                    if *auto_apply.peek() {
                        // Hands the processing flag over to the run.
                        run_filter();
                    } else {
                        processing.set(false);
                    }
                }
                Err(e) => {
                    error.set(Some(format!("{e}")));
                    processing.set(false);
                }
            }
        });
    };

    // --- Filter select handler ---
    let on_select = move |kind: FilterKind| {
        request.with_mut(|r| r.kind = kind);
    };

    // --- Layout ---
    rsx! {
        // Shared theme (CSS variables + base styles).
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        div { class: "min-h-screen bg-[var(--bg)] text-[var(--text)] flex flex-col",
            // A drop anywhere outside the upload zone must not navigate
            // the page away to the dropped file.
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |evt| evt.prevent_default(),

            // Header
            header { class: "px-6 py-4 border-b border-[var(--border)]",
                h1 { class: "text-2xl font-semibold", "tinge" }
                p { class: "text-[var(--muted)] text-sm",
                    "Upload an image, pick a filter, download the result"
                }
            }

            // Main content area
            div { class: "flex-1 flex flex-col lg:flex-row gap-6 p-6",
                // Left column: previews + status
                div { class: "flex-1 flex flex-col gap-4",
                    if let Some(ref name) = filename() {
                        p { class: "text-[var(--text-secondary)] text-sm",
                            "Editing: {name}"
                        }
                    }

                    div { class: "flex-1 flex flex-col md:flex-row gap-4",
                        Preview {
                            heading: "Original",
                            src: source_url(),
                            placeholder: "Upload an image to get started",
                        }
                        Preview {
                            heading: "Filtered",
                            src: filtered_url(),
                            placeholder: "Apply a filter to see the result",
                        }
                    }

                    // Error display
                    if let Some(ref err) = error() {
                        div { class: "bg-[var(--error-bg)] border border-[var(--error-border)] rounded p-3",
                            p { class: "text-[var(--text-error)] text-sm", "{err}" }
                        }
                    }

                    if let Some(ref line) = timing() {
                        p { class: "text-[var(--muted)] text-xs", "{line}" }
                    }
                }

                // Right sidebar: filter picker + controls + apply + download
                div { class: "lg:w-80 flex-shrink-0 flex flex-col gap-4",
                    div { class: "bg-[var(--surface)] rounded p-4 flex flex-col gap-3",
                        h3 { class: "text-sm font-semibold text-[var(--text-heading)]",
                            "Filters"
                        }
                        FilterPicker {
                            selected: request().kind,
                            on_select: on_select,
                        }

                        if request().kind.has_parameters() {
                            VintageControls {
                                params: request().vintage,
                                on_change: move |v| request.with_mut(|r| r.vintage = v),
                            }
                        }
                    }

                    div { class: "bg-[var(--surface)] rounded p-4 flex flex-col gap-3",
                        label { class: "flex items-center gap-2 text-sm text-[var(--text)]",
                            input {
                                r#type: "checkbox",
                                checked: auto_apply(),
                                class: "w-4 h-4 accent-[var(--btn-primary)]",
                                onchange: move |e| auto_apply.set(e.checked()),
                            }
                            "Apply automatically after upload"
                        }

                        ApplyPanel {
                            processing: processing(),
                            ready: source().is_some(),
                            on_apply: move |()| run_filter(),
                        }
                    }

                    DownloadPanel {
                        jpeg: filtered(),
                        kind: applied_kind().unwrap_or(request().kind),
                    }
                }
            }

            // Footer: upload zone
            div { class: "px-6 pb-6",
                FileUpload {
                    on_upload: on_upload,
                }
            }
        }
    }
}
