use dioxus::prelude::*;
use crate::constants::*;

/// Top bar: application title, dataset actions and the current-time readout.
#[component]
pub fn TitleBar(
    readout: String,
    dataset_label: String,
    on_open_dataset: EventHandler<MouseEvent>,
    on_reset_dataset: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between;
                height: {HEADER_HEIGHT}px; padding: 0 24px; flex-shrink: 0;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            div {
                style: "display: flex; align-items: center; gap: 20px;",
                span { style: "font-size: 18px; font-weight: 700; letter-spacing: -0.2px; color: {TEXT_PRIMARY};", "HISTORICAL TIMELINE" }
                button {
                    class: "collapse-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_PRIMARY};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    onclick: move |e| on_open_dataset.call(e),
                    "Open Dataset…"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        background: transparent; border: none; color: {TEXT_SECONDARY};
                        font-size: 12px; cursor: pointer; padding: 4px 8px; border-radius: 4px;
                    ",
                    onclick: move |e| on_reset_dataset.call(e),
                    "Built-in Dataset"
                }
                span { style: "font-size: 11px; color: {TEXT_DIM};", "{dataset_label}" }
            }
            span {
                style: "font-family: {MONO_FONT}; font-size: 13px; color: {TEXT_MUTED};",
                "{readout}"
            }
        }
    }
}
