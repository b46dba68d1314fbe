//! Timeline module
//!
//! The scrollable grid, layer rows, playhead and the transport bar below them.

mod event_block;
mod panel;
mod playback_controls;
mod playhead;
mod ruler;
mod track_label;
mod track_row;

pub use panel::TimelinePanel;
pub use playback_controls::TransportBar;
