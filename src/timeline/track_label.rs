use dioxus::prelude::*;
use crate::constants::{BG_ELEVATED, BORDER_DEFAULT, LAYER_HEIGHT, TEXT_SECONDARY};

/// Layer name in the sticky gutter on the left of each row
#[component]
pub fn LayerLabel(name: String, color: String, width: f64) -> Element {
    rsx! {
        div {
            style: "
                position: sticky; left: 0; z-index: 12;
                display: flex; align-items: center; gap: 10px;
                width: {width}px; min-width: {width}px; height: {LAYER_HEIGHT}px;
                padding: 0 14px; box-sizing: border-box;
                background-color: {BG_ELEVATED}; border-right: 1px solid {BORDER_DEFAULT};
                font-size: 12px; font-weight: 500; color: {TEXT_SECONDARY};
                text-transform: uppercase; letter-spacing: 0.5px;
                pointer-events: none;
            ",
            div { style: "width: 3px; height: 16px; border-radius: 2px; background-color: {color};" }
            span { "{name}" }
        }
    }
}
