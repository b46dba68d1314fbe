use dioxus::prelude::*;

use crate::constants::ACCENT_PLAYHEAD;

/// Vertical cursor line with a diamond marker on top.
#[component]
pub fn Playhead(x: f64) -> Element {
    rsx! {
        div {
            style: "
                position: absolute; left: {x}px; top: 0; bottom: 0;
                width: 2px; background-color: {ACCENT_PLAYHEAD};
                box-shadow: 0 0 10px {ACCENT_PLAYHEAD}, 0 0 20px {ACCENT_PLAYHEAD};
                pointer-events: none; z-index: 20;
            ",
        }
        div {
            style: "
                position: absolute; left: {x - 7.0}px; top: 0;
                width: 16px; height: 16px;
                pointer-events: none; z-index: 20;
            ",
            div {
                style: "width: 100%; height: 100%; background-color: {ACCENT_PLAYHEAD}; transform: rotate(45deg); box-shadow: 0 0 10px {ACCENT_PLAYHEAD};",
            }
        }
    }
}
