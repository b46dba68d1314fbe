//! Root application component
//!
//! Owns the playback state, zoom and viewport signals and lays out the
//! header, timeline, transport, event panel and status bar.

use dioxus::core::Task;
use dioxus::prelude::*;
use std::ops::ControlFlow;
use std::path::Path;
use std::time::Duration;

use crate::components::{EventInfoPanel, StatusBar, TitleBar};
use crate::constants::*;
use crate::core::playback::{PlaybackClock, PlaybackState, StepOutcome};
use crate::core::position::TimelineViewport;
use crate::core::scale::{format_current_time, resolve_scale};
use crate::core::ticker::run_ticker;
use crate::core::zoom::{clamp_zoom, zoom_in, zoom_out};
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{Dataset, TimelineSettings};
use crate::timeline::{TimelinePanel, TransportBar};

const BUILT_IN_DATASET_LABEL: &str = "Built-in dataset";

fn dataset_label_for(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Main application component
#[component]
pub fn App() -> Element {
    let settings = use_hook(TimelineSettings::load_or_default);
    let gutter_width = settings.label_gutter_px;
    let frame_interval = Duration::from_millis(settings.frame_interval_ms.max(1));

    let mut dataset = use_signal(|| settings.initial_dataset());
    let mut dataset_label = use_signal(|| {
        settings
            .dataset_path
            .as_deref()
            .map(dataset_label_for)
            .unwrap_or_else(|| BUILT_IN_DATASET_LABEL.to_string())
    });
    // Settings arrive with a valid span; the playback state owns it from here on.
    let mut playback = use_signal(|| {
        PlaybackState::new(settings.span().unwrap_or_default()).with_speed(settings.initial_speed)
    });
    let mut clock = use_signal(PlaybackClock::default);
    let mut zoom = use_signal(|| clamp_zoom(settings.initial_zoom));
    let mut input_focused = use_signal(|| false);

    let mut timeline_viewport = use_signal(|| None::<TimelineViewport>);
    let mut timeline_viewport_eval = use_signal(|| None::<document::Eval>);
    let mut playback_task = use_signal(|| None::<Task>);

    let scale = use_memo(move || resolve_scale(zoom()));
    let is_playing = use_memo(move || playback.read().is_playing());
    let current_time = use_memo(move || playback.read().current_time());
    let active_events = use_memo(move || dataset.read().active_at(current_time()));

    // Start the frame ticker on play, cancel it on pause.
    use_effect(move || {
        let playing = is_playing();
        if let Some(task) = playback_task.write().take() {
            task.cancel();
        }
        if !playing {
            return;
        }
        clock.write().reset();
        let task = spawn(async move {
            run_ticker(frame_interval, move |now| {
                let scale = *scale.peek();
                match clock.write().tick(now, &mut playback.write(), &scale) {
                    StepOutcome::Advanced => ControlFlow::Continue(()),
                    StepOutcome::Finished => {
                        tracing::debug!("playback reached the end of the timeline");
                        ControlFlow::Break(())
                    }
                    StepOutcome::Idle => ControlFlow::Break(()),
                }
            })
            .await;
        });
        playback_task.set(Some(task));
    });

    use_effect(move || {
        if timeline_viewport_eval.peek().is_some() {
            return;
        }
        let eval = document::eval(TIMELINE_VIEWPORT_SCRIPT);
        timeline_viewport_eval.set(Some(eval));
    });

    use_future(move || async move {
        loop {
            let Some(mut eval) = timeline_viewport_eval() else {
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            };
            loop {
                match eval.recv::<TimelineViewport>().await {
                    Ok(next) => {
                        if timeline_viewport.peek().as_ref() != Some(&next) {
                            timeline_viewport.set(Some(next));
                        }
                    }
                    Err(err) => {
                        tracing::debug!("timeline viewport channel closed: {err}");
                        break;
                    }
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });

    let readout = format_current_time(current_time(), zoom());
    let layers = dataset.read().layers.clone();
    let layer_count = layers.len();
    let event_count = dataset.read().event_count();
    let span = playback.read().span();
    let speed = playback.read().speed();
    let at_end = playback.read().is_at_end();

    rsx! {
        // Global CSS
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .collapse-btn {{ opacity: 0.6; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            "#
        }

        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0; outline: none;
            ",
            // Enable keyboard focus on this container for hotkeys
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    input_focused: input_focused(),
                };
                let modifiers = e.modifiers();
                match handle_hotkey(&e.key(), modifiers.ctrl(), modifiers.meta(), &hotkey_context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::PlayPause => playback.write().toggle(),
                            HotkeyAction::SkipToStart => playback.write().skip_to_start(),
                            HotkeyAction::SkipToEnd => playback.write().skip_to_end(),
                            HotkeyAction::SpeedUp => playback.write().step_speed(1),
                            HotkeyAction::SpeedDown => playback.write().step_speed(-1),
                            HotkeyAction::ZoomIn => zoom.set(zoom_in(zoom())),
                            HotkeyAction::ZoomOut => zoom.set(zoom_out(zoom())),
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            TitleBar {
                readout: readout.clone(),
                dataset_label: dataset_label(),
                on_open_dataset: move |_| {
                    let Some(path) = rfd::FileDialog::new()
                        .add_filter("Timeline Dataset", &["json"])
                        .set_title("Open Dataset")
                        .pick_file()
                    else {
                        return;
                    };
                    match Dataset::load(&path) {
                        Ok(loaded) => {
                            tracing::info!(
                                path = %path.display(),
                                layers = loaded.layers.len(),
                                events = loaded.event_count(),
                                "loaded dataset"
                            );
                            dataset.set(loaded);
                            dataset_label.set(dataset_label_for(&path));
                        }
                        Err(err) => tracing::error!("failed to open dataset: {err}"),
                    }
                },
                on_reset_dataset: move |_| match Dataset::reference() {
                    Ok(reference) => {
                        dataset.set(reference);
                        dataset_label.set(BUILT_IN_DATASET_LABEL.to_string());
                    }
                    Err(err) => tracing::error!("built-in dataset is invalid: {err}"),
                },
            }

            // Main row
            div {
                style: "display: flex; flex: 1; min-height: 0;",

                div {
                    style: "display: flex; flex-direction: column; flex: 1; min-width: 0;",
                    TimelinePanel {
                        layers,
                        span,
                        scale: scale(),
                        zoom: zoom(),
                        current_time: current_time(),
                        viewport: timeline_viewport(),
                        gutter_width,
                        on_seek: move |time| playback.write().seek(time),
                    }
                    TransportBar {
                        is_playing: is_playing(),
                        readout,
                        speed,
                        zoom: zoom(),
                        on_play_pause: move |_| playback.write().toggle(),
                        on_skip_start: move |_| playback.write().skip_to_start(),
                        on_skip_end: move |_| playback.write().skip_to_end(),
                        on_speed_change: move |value: f64| playback.write().set_speed(value),
                        on_zoom_change: move |value: f64| zoom.set(clamp_zoom(value)),
                        on_input_focus: move |focused: bool| input_focused.set(focused),
                    }
                }

                EventInfoPanel {
                    events: active_events(),
                    current_time: current_time(),
                }
            }

            StatusBar {
                scale: scale(),
                zoom: zoom(),
                speed,
                is_playing: is_playing(),
                at_end,
                layer_count,
                event_count,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_label_uses_file_name() {
        assert_eq!(dataset_label_for(Path::new("/data/sets/wars.json")), "wars.json");
    }
}
