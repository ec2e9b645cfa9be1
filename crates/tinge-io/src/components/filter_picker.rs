//! Filter picker grid with radio-button selection semantics.
//!
//! One tile per available filter. Clicking a tile makes it the single
//! active selection and publishes its identifier through `on_select`;
//! the previously active tile loses its highlight in the same render.

use dioxus::prelude::*;
use tinge_filters::FilterKind;

/// Props for the [`FilterPicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FilterPickerProps {
    /// Currently selected filter.
    selected: FilterKind,
    /// Callback fired when a tile is clicked.
    on_select: EventHandler<FilterKind>,
}

/// Grid of filter option tiles.
///
/// Exactly one tile is highlighted at a time, driven entirely by the
/// `selected` prop, so the active state can never get out of sync with
/// the value submitted to the pipeline.
#[component]
pub fn FilterPicker(props: FilterPickerProps) -> Element {
    rsx! {
        div {
            class: "grid grid-cols-2 md:grid-cols-3 gap-2",

            for kind in FilterKind::ALL {
                {render_tile(kind, props.selected == kind, &props.on_select)}
            }
        }
    }
}

/// Render a single filter tile.
fn render_tile(
    kind: FilterKind,
    is_selected: bool,
    on_select: &EventHandler<FilterKind>,
) -> Element {
    let border = if is_selected {
        "border-2 border-[var(--border-accent)] bg-[var(--surface-active)]"
    } else {
        "border border-[var(--border)] bg-[var(--surface)]"
    };

    let onclick = {
        let on_select = *on_select;
        move |_| on_select.call(kind)
    };

    rsx! {
        button {
            class: "p-2 rounded cursor-pointer text-left hover:bg-[var(--surface-active)]
                    transition-colors {border}",
            onclick: onclick,
            title: "{kind.label()}",
            aria_label: "Select {kind.label()}",
            "aria-pressed": "{is_selected}",

            span { class: "text-sm text-[var(--text)]",
                "{kind.label()}"
            }
        }
    }
}
