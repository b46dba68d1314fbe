//! UI components around the timeline.

mod event_info_panel;
mod status_bar;
mod title_bar;

pub use event_info_panel::EventInfoPanel;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;
