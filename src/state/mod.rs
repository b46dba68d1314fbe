//! State management module
//!
//! - Dataset: layers of historical events, passed explicitly into the views
//! - TimelineSettings: startup configuration loaded from `timeline.json`

mod dataset;
mod settings;

pub use dataset::*;
pub use settings::*;
