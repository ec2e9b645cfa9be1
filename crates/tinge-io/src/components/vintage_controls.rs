//! Parameter sliders for the vintage film filter.
//!
//! Shown only while the vintage filter is selected. Slider ranges match
//! the clamping ranges in `tinge-filters`, so the UI can never produce
//! a value the pipeline would reject.

use dioxus::prelude::*;
use tinge_filters::VintageParams;

/// Props for the [`VintageControls`] component.
#[derive(Props, Clone, PartialEq)]
pub struct VintageControlsProps {
    /// Current parameter values (read-only).
    params: VintageParams,
    /// Callback fired when any slider moves.
    on_change: EventHandler<VintageParams>,
}

/// Sliders for warmth, grain, vignette, and contrast.
#[component]
pub fn VintageControls(props: VintageControlsProps) -> Element {
    let params = props.params;
    let on_change = props.on_change;

    rsx! {
        div { class: "space-y-2",
            {render_slider(
                "warmth",
                "Warmth",
                "Color temperature. Above 1.0 warms, below cools.",
                f64::from(params.warmth),
                f64::from(VintageParams::WARMTH_RANGE.0),
                f64::from(VintageParams::WARMTH_RANGE.1),
                move |v: f64| {
                    let mut p = params;
                    #[allow(clippy::cast_possible_truncation)]
                    { p.warmth = v as f32; }
                    on_change.call(p);
                },
            )}
            {render_slider(
                "grain",
                "Grain",
                "Film grain intensity. 0 removes grain completely.",
                f64::from(params.grain),
                f64::from(VintageParams::GRAIN_RANGE.0),
                f64::from(VintageParams::GRAIN_RANGE.1),
                move |v: f64| {
                    let mut p = params;
                    #[allow(clippy::cast_possible_truncation)]
                    { p.grain = v as f32; }
                    on_change.call(p);
                },
            )}
            {render_slider(
                "vignette",
                "Vignette",
                "Corner darkening strength. 0 removes the vignette.",
                f64::from(params.vignette),
                f64::from(VintageParams::VIGNETTE_RANGE.0),
                f64::from(VintageParams::VIGNETTE_RANGE.1),
                move |v: f64| {
                    let mut p = params;
                    #[allow(clippy::cast_possible_truncation)]
                    { p.vignette = v as f32; }
                    on_change.call(p);
                },
            )}
            {render_slider(
                "contrast",
                "Contrast",
                "Contrast adjustment. Lower values add soft focus.",
                f64::from(params.contrast),
                f64::from(VintageParams::CONTRAST_RANGE.0),
                f64::from(VintageParams::CONTRAST_RANGE.1),
                move |v: f64| {
                    let mut p = params;
                    #[allow(clippy::cast_possible_truncation)]
                    { p.contrast = v as f32; }
                    on_change.call(p);
                },
            )}
        }
    }
}

/// Render a labeled range slider with a description.
fn render_slider(
    id: &str,
    label: &str,
    description: &str,
    value: f64,
    min: f64,
    max: f64,
    on_input: impl Fn(f64) + 'static,
) -> Element {
    let display = format!("{value:.2}");
    let id = id.to_string();
    let label = label.to_string();
    let description = description.to_string();

    rsx! {
        div { class: "flex flex-col gap-1",
            div { class: "flex justify-between text-sm",
                label { r#for: "{id}",
                    class: "text-[var(--text-heading)] font-medium",
                    "{label}"
                }
                span { class: "text-[var(--text-secondary)] tabular-nums",
                    "{display}"
                }
            }
            p { class: "text-xs text-[var(--text-secondary)]", "{description}" }
            input {
                r#type: "range",
                id: "{id}",
                min: "{min}",
                max: "{max}",
                step: "0.05",
                value: "{value}",
                class: "w-full accent-[var(--btn-primary)]",
                oninput: move |e| {
                    match e.value().parse::<f64>() {
                        Ok(v) => on_input(v),
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("slider parse failure: {err:?} from {:?}", e.value())
                                    .into(),
                            );
                        }
                    }
                },
            }
        }
    }
}
