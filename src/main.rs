//! Historical Timeline
//!
//! An interactive 1900-2025 timeline: layered event tracks, an adaptive time
//! grid, and a playback clock that sweeps through history.

mod app;
mod components;
mod constants;
mod core;
mod error;
mod hotkeys;
mod state;
mod timeline;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "historical_timeline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Historical Timeline")
                .with_inner_size(LogicalSize::new(1440.0, 860.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    tracing::info!("starting historical timeline");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
