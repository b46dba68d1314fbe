//! Error type for the fallible edges of the application: reading settings,
//! loading datasets and building a time span.
//!
//! The engine itself (scale, playback, position) is total and never errors.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("timeline span must start before it ends ({start} >= {end})")]
    InvalidSpan {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("event \"{title}\" in layer \"{layer}\" ends before it starts")]
    InvalidEvent { layer: String, title: String },
}

impl TimelineError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
