use chrono::NaiveDateTime;
use dioxus::prelude::*;

use crate::constants::{
    BG_DEEPEST, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, FALLBACK_VIEWPORT_WIDTH, GRID_HEIGHT,
    TIMELINE_HOST_ID,
};
use crate::core::position::{click_to_percent, TimelineViewport};
use crate::core::scale::Scale;
use crate::core::time_span::TimeSpan;
use crate::state::Layer;

use super::playhead::Playhead;
use super::ruler::TimeGrid;
use super::track_row::LayerRow;

/// Main timeline panel component
#[component]
pub fn TimelinePanel(
    layers: Vec<Layer>,
    span: TimeSpan,
    scale: Scale,
    zoom: f64,
    current_time: NaiveDateTime,
    viewport: Option<TimelineViewport>,
    gutter_width: f64,
    on_seek: EventHandler<NaiveDateTime>,
) -> Element {
    // Until the webview reports its size, lay out against a nominal width.
    let viewport = viewport.unwrap_or(TimelineViewport {
        left: 0.0,
        width: FALLBACK_VIEWPORT_WIDTH,
        scroll_left: 0.0,
    });
    let track_width = viewport.track_width(gutter_width).max(1.0);
    let content_width = track_width * zoom;

    // Render grid cells one screen either side of what is visible.
    let window = (
        (viewport.scroll_left - track_width) / content_width * 100.0,
        (viewport.scroll_left + 2.0 * track_width) / content_width * 100.0,
    );

    let playhead_x = gutter_width + span.position_of(current_time) / 100.0 * content_width;

    // Layout:
    // ┌──────────┬──────────────────────────────────────┐
    // │ (corner) │ time grid (sticky top)               │ <- GRID_HEIGHT
    // ├──────────┼──────────────────────────────────────┤
    // │ label    │ event blocks                         │ <- one row per layer
    // │ (sticky) │ ↔ scrolls horizontally               │
    // └──────────┴──────────────────────────────────────┘
    rsx! {
        div {
            id: TIMELINE_HOST_ID,
            style: "
                flex: 1;
                position: relative;
                overflow-x: auto;
                overflow-y: auto;
                background-color: {BG_DEEPEST};
                cursor: pointer;
            ",
            onclick: move |e| {
                let x = e.client_coordinates().x - viewport.left;
                match click_to_percent(x, &viewport, gutter_width, zoom) {
                    Some(percent) => on_seek.call(span.time_at_position(percent)),
                    None => tracing::trace!(x, "click outside the track area ignored"),
                }
            },

            div {
                style: "
                    position: relative;
                    width: {gutter_width + content_width}px;
                    min-height: 100%;
                ",

                // Grid row
                div {
                    style: "
                        position: sticky; top: 0; z-index: 15;
                        display: flex;
                        height: {GRID_HEIGHT}px;
                        background-color: {BG_SURFACE};
                        border-bottom: 1px solid {BORDER_DEFAULT};
                    ",
                    div {
                        style: "
                            position: sticky; left: 0; z-index: 16;
                            width: {gutter_width}px; min-width: {gutter_width}px; height: 100%;
                            background-color: {BG_ELEVATED};
                            border-right: 1px solid {BORDER_DEFAULT};
                        ",
                    }
                    div {
                        style: "position: relative; width: {content_width}px; height: 100%;",
                        TimeGrid {
                            span: span,
                            scale: scale,
                            content_width: content_width,
                            window: window,
                        }
                    }
                }

                // Layer rows
                for layer in layers.iter() {
                    LayerRow {
                        key: "{layer.id}",
                        layer: layer.clone(),
                        span: span,
                        current_time: current_time,
                        gutter_width: gutter_width,
                        content_width: content_width,
                    }
                }

                Playhead { x: playhead_x }
            }
        }
    }
}
