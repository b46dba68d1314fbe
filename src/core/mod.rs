//! Timeline engine: scale resolution, playback clock and position mapping.
//!
//! Nothing in here depends on the UI; the components in `timeline` and
//! `components` only call into these functions.

pub mod grid;
pub mod paths;
pub mod playback;
pub mod position;
pub mod scale;
pub mod ticker;
pub mod time_span;
pub mod zoom;
