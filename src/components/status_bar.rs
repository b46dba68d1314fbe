use dioxus::prelude::*;
use crate::constants::*;
use crate::core::scale::Scale;
use crate::utils::format_multiplier;

fn playback_label(is_playing: bool, at_end: bool) -> &'static str {
    match (is_playing, at_end) {
        (true, _) => "Playing",
        (false, true) => "Ended",
        (false, false) => "Paused",
    }
}

#[component]
pub fn StatusBar(
    scale: Scale,
    zoom: f64,
    speed: f64,
    is_playing: bool,
    at_end: bool,
    layer_count: usize,
    event_count: usize,
) -> Element {
    let state = playback_label(is_playing, at_end);
    let unit = scale.unit.label();
    let speed_label = format_multiplier(speed);
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { "{state}" }
            div {
                style: "display: flex; gap: 16px; font-family: {MONO_FONT};",
                span { "{layer_count} layers / {event_count} events" }
                span { "grid: {unit}" }
                span { "zoom {zoom:.1}×" }
                span { "speed {speed_label}" }
            }
        }
    }
}
