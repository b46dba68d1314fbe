use chrono::NaiveDateTime;
use dioxus::prelude::*;

use crate::constants::*;
use crate::state::ActiveEvent;

const PANEL_TIME_FORMAT: &str = "%b %-d, %Y, %I:%M %p";
const EVENT_DATE_FORMAT: &str = "%b %-d, %Y";

fn panel_time_label(time: NaiveDateTime) -> String {
    time.format(PANEL_TIME_FORMAT).to_string()
}

fn active_count_label(count: usize) -> String {
    let noun = if count == 1 { "event" } else { "events" };
    format!("{count} {noun} active")
}

/// Side panel listing the events that contain the current time.
#[component]
pub fn EventInfoPanel(events: Vec<ActiveEvent>, current_time: NaiveDateTime) -> Element {
    let time_label = panel_time_label(current_time);
    let footer = active_count_label(events.len());

    rsx! {
        div {
            style: "
                width: {INFO_PANEL_WIDTH}px; min-width: {INFO_PANEL_WIDTH}px;
                display: flex; flex-direction: column;
                background-color: {BG_ELEVATED}; border-left: 1px solid {BORDER_DEFAULT};
            ",

            // Header
            div {
                style: "padding: 16px 24px; border-bottom: 1px solid {BORDER_DEFAULT};",
                div { style: "font-size: 12px; font-weight: 700; color: {TEXT_PRIMARY}; text-transform: uppercase; letter-spacing: 0.5px;", "Current Events" }
                div { style: "margin-top: 4px; font-family: {MONO_FONT}; font-size: 11px; color: {TEXT_MUTED};", "{time_label}" }
            }

            // Events list
            div {
                style: "flex: 1; overflow-y: auto; padding: 24px; display: flex; flex-direction: column; gap: 16px;",
                if events.is_empty() {
                    div {
                        style: "text-align: center; padding: 48px 0; font-size: 13px; color: {TEXT_MUTED};",
                        "No events at this time"
                    }
                }
                for active in events.iter() {
                    {
                        let range = format!(
                            "{}–{}",
                            active.event.start.format(EVENT_DATE_FORMAT),
                            active.event.end.format(EVENT_DATE_FORMAT)
                        );
                        rsx! {
                            div {
                                key: "{active.event.id}",
                                style: "
                                    padding: 16px; border-radius: 2px;
                                    border: 1px solid {BORDER_DEFAULT}; border-left: 3px solid {active.color};
                                    background-color: {BG_BASE};
                                ",
                                div {
                                    style: "display: flex; align-items: flex-start; justify-content: space-between; gap: 8px; margin-bottom: 8px;",
                                    span { style: "font-size: 13px; font-weight: 600; color: {TEXT_PRIMARY}; line-height: 1.3;", "{active.event.title}" }
                                    span { style: "font-family: {MONO_FONT}; font-size: 10px; color: {TEXT_MUTED}; white-space: nowrap;", "{range}" }
                                }
                                div { style: "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; margin-bottom: 6px;", "{active.layer_name}" }
                                p { style: "margin: 0; font-size: 12px; color: {TEXT_SECONDARY}; line-height: 1.5;", "{active.event.description}" }
                            }
                        }
                    }
                }
            }

            // Footer
            div {
                style: "padding: 12px 24px; border-top: 1px solid {BORDER_DEFAULT}; background-color: {BG_SURFACE}; font-size: 11px; color: {TEXT_MUTED};",
                "{footer}"
            }
        }
    }
}
