use chrono::NaiveDateTime;
use dioxus::prelude::*;

use crate::constants::{BG_BASE, BORDER_SUBTLE, LAYER_HEIGHT};
use crate::core::time_span::TimeSpan;
use crate::state::Layer;

use super::event_block::EventBlock;
use super::track_label::LayerLabel;

/// One layer: sticky label plus its event blocks.
#[component]
pub fn LayerRow(
    layer: Layer,
    span: TimeSpan,
    current_time: NaiveDateTime,
    gutter_width: f64,
    content_width: f64,  // zoomed track width in pixels, gutter excluded
) -> Element {
    let color = layer.color.clone();

    rsx! {
        div {
            style: "
                display: flex;
                width: {gutter_width + content_width}px;
                height: {LAYER_HEIGHT}px;
                border-bottom: 1px solid {BORDER_SUBTLE};
                background-color: {BG_BASE};
            ",
            LayerLabel { name: layer.name.clone(), color: color.clone(), width: gutter_width }
            div {
                style: "position: relative; width: {content_width}px; height: 100%;",
                for event in layer.events.iter() {
                    EventBlock {
                        key: "{event.id}",
                        event: event.clone(),
                        span: span,
                        content_width: content_width,
                        color: color.clone(),
                        is_active: event.is_active_at(current_time),
                    }
                }
            }
        }
    }
}
