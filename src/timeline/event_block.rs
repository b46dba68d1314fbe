use dioxus::prelude::*;

use crate::constants::{EVENT_BLOCK_MIN_WIDTH, TEXT_PRIMARY};
use crate::core::time_span::TimeSpan;
use crate::state::EventRecord;

/// A single event drawn as a colored block inside its layer row.
#[component]
pub fn EventBlock(
    event: EventRecord,
    span: TimeSpan,
    content_width: f64,
    color: String,
    is_active: bool,
) -> Element {
    let geometry = event.geometry(&span);
    let left = geometry.left_percent / 100.0 * content_width;
    let width = (geometry.width_percent / 100.0 * content_width).max(EVENT_BLOCK_MIN_WIDTH);
    let show_label = geometry.shows_label();

    let opacity = if is_active { 1.0 } else { 0.6 };
    let glow = if is_active {
        format!("0 0 20px {color}")
    } else {
        "none".to_string()
    };
    let title = event.title.clone();

    rsx! {
        div {
            title: "{title}",
            style: "
                position: absolute; top: 8px; bottom: 8px;
                left: {left}px; width: {width}px;
                background-color: {color}; opacity: {opacity};
                box-shadow: {glow};
                border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 2px;
                box-sizing: border-box; overflow: hidden;
                pointer-events: none;
            ",
            if show_label {
                div {
                    style: "height: 100%; display: flex; align-items: center; padding: 0 8px;",
                    span {
                        style: "font-size: 11px; font-weight: 500; color: {TEXT_PRIMARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                        "{title}"
                    }
                }
            }
        }
    }
}
