use dioxus::prelude::*;

use crate::constants::{
    ACCENT_PLAY, BG_HOVER, BG_SURFACE, BORDER_DEFAULT, MONO_FONT, TEXT_MUTED, TEXT_PRIMARY,
};
use crate::core::playback::{MAX_SPEED, MIN_SPEED, SPEED_STEP};
use crate::core::zoom::{
    slider_to_zoom, zoom_in, zoom_out, zoom_to_slider, ZOOM_SLIDER_MAX, ZOOM_SLIDER_MIN,
    ZOOM_SLIDER_STEP,
};
use crate::utils::{format_multiplier, parse_f64_input};

/// Playback button
#[component]
pub(crate) fn PlaybackBtn(
    icon: &'static str,
    #[props(default = false)] primary: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let (bg, color, size) = if primary {
        (ACCENT_PLAY, TEXT_PRIMARY, 36)
    } else {
        ("transparent", TEXT_MUTED, 28)
    };
    rsx! {
        button {
            class: "collapse-btn",
            style: "width: {size}px; height: {size}px; border: none; border-radius: 4px; background-color: {bg}; color: {color}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center; transition: all 0.12s ease;",
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}

/// Transport bar under the timeline: skip/play controls, readout, speed and zoom.
#[component]
pub fn TransportBar(
    is_playing: bool,
    readout: String,
    speed: f64,
    zoom: f64,
    on_play_pause: EventHandler<MouseEvent>,
    on_skip_start: EventHandler<MouseEvent>,
    on_skip_end: EventHandler<MouseEvent>,
    on_speed_change: EventHandler<f64>,
    on_zoom_change: EventHandler<f64>,
    on_input_focus: EventHandler<bool>,
) -> Element {
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let speed_label = format_multiplier(speed);
    let zoom_label = format!("{:.0}×", zoom);
    let zoom_slider = zoom_to_slider(zoom);
    let label_style = format!(
        "font-size: 10px; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;"
    );

    rsx! {
        div {
            style: "
                display: flex; align-items: center; gap: 24px;
                height: 56px; padding: 0 20px; flex-shrink: 0;
                background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT};
            ",

            // Transport
            div {
                style: "display: flex; align-items: center; gap: 6px;",
                PlaybackBtn { icon: "⏮", on_click: move |e| on_skip_start.call(e) }
                PlaybackBtn { icon: play_icon, primary: true, on_click: move |e| on_play_pause.call(e) }
                PlaybackBtn { icon: "⏭", on_click: move |e| on_skip_end.call(e) }
            }

            // Readout
            span {
                style: "font-family: {MONO_FONT}; font-size: 13px; font-weight: 500; color: {TEXT_PRIMARY}; min-width: 180px;",
                "{readout}"
            }

            // Speed
            div {
                style: "display: flex; align-items: center; gap: 10px;",
                span { style: "{label_style}", "Speed" }
                input {
                    r#type: "range",
                    min: "{MIN_SPEED}",
                    max: "{MAX_SPEED}",
                    step: "{SPEED_STEP}",
                    value: "{speed}",
                    style: "width: 96px; cursor: pointer;",
                    onfocus: move |_| on_input_focus.call(true),
                    onblur: move |_| on_input_focus.call(false),
                    oninput: move |e| on_speed_change.call(parse_f64_input(&e.value(), speed)),
                }
                span { style: "font-family: {MONO_FONT}; font-size: 11px; color: {TEXT_MUTED}; min-width: 40px;", "{speed_label}" }
            }

            // Zoom
            div {
                style: "display: flex; align-items: center; gap: 8px; margin-left: auto;",
                button {
                    class: "collapse-btn",
                    style: "width: 28px; height: 28px; border: none; border-radius: 4px; background: transparent; color: {TEXT_MUTED}; font-size: 14px; cursor: pointer;",
                    onclick: move |_| on_zoom_change.call(zoom_out(zoom)),
                    "−"
                }
                input {
                    r#type: "range",
                    min: "{ZOOM_SLIDER_MIN}",
                    max: "{ZOOM_SLIDER_MAX}",
                    step: "{ZOOM_SLIDER_STEP}",
                    value: "{zoom_slider}",
                    style: "width: 128px; cursor: pointer;",
                    onfocus: move |_| on_input_focus.call(true),
                    onblur: move |_| on_input_focus.call(false),
                    oninput: move |e| {
                        let value = parse_f64_input(&e.value(), zoom_slider);
                        on_zoom_change.call(slider_to_zoom(value));
                    },
                }
                span {
                    style: "font-family: {MONO_FONT}; font-size: 11px; color: {TEXT_MUTED}; min-width: 64px; text-align: center; padding: 2px 6px; border-radius: 3px; background-color: {BG_HOVER};",
                    "{zoom_label}"
                }
                button {
                    class: "collapse-btn",
                    style: "width: 28px; height: 28px; border: none; border-radius: 4px; background: transparent; color: {TEXT_MUTED}; font-size: 14px; cursor: pointer;",
                    onclick: move |_| on_zoom_change.call(zoom_in(zoom)),
                    "+"
                }
            }
        }
    }
}
