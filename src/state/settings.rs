use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::paths::{config_path, resolve_resource_path};
use crate::core::playback::DEFAULT_SPEED;
use crate::core::time_span::{reference_end, reference_start, TimeSpan};
use crate::core::zoom::MIN_ZOOM;
use crate::error::{Result, TimelineError};
use crate::state::Dataset;

/// Application settings, read once at startup from `timeline.json`.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSettings {
    /// First instant of the timeline.
    #[serde(default = "reference_start")]
    pub start: NaiveDateTime,
    /// Last instant of the timeline.
    #[serde(default = "reference_end")]
    pub end: NaiveDateTime,
    #[serde(default = "default_zoom")]
    pub initial_zoom: f64,
    #[serde(default = "default_speed")]
    pub initial_speed: f64,
    /// Delay between playback steps.
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Width of the layer-name column on the left of the timeline.
    #[serde(default = "default_label_gutter_px")]
    pub label_gutter_px: f64,
    /// Dataset to load instead of the built-in one. Relative paths resolve
    /// like the settings file itself.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
}

fn default_zoom() -> f64 {
    MIN_ZOOM
}

fn default_speed() -> f64 {
    DEFAULT_SPEED
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_label_gutter_px() -> f64 {
    128.0
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            start: reference_start(),
            end: reference_end(),
            initial_zoom: default_zoom(),
            initial_speed: default_speed(),
            frame_interval_ms: default_frame_interval_ms(),
            label_gutter_px: default_label_gutter_px(),
            dataset_path: None,
        }
    }
}

impl TimelineSettings {
    /// Read settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(TimelineError::io(path, err)),
        }
    }

    /// Read settings from the configured location, logging and falling back
    /// to defaults on any error.
    pub fn load_or_default() -> Self {
        let path = config_path();
        match Self::load(&path) {
            Ok(settings) => {
                tracing::debug!(path = %path.display(), "loaded settings");
                settings.with_valid_span()
            }
            Err(err) => {
                tracing::warn!("ignoring settings file: {err}");
                Self::default()
            }
        }
    }

    pub fn span(&self) -> Result<TimeSpan> {
        TimeSpan::new(self.start, self.end)
    }

    /// Replace an invalid span with the reference span, warning once.
    /// Afterwards [`span`](Self::span) always succeeds.
    pub fn with_valid_span(mut self) -> Self {
        if let Err(err) = self.span() {
            tracing::warn!("{err}; using the reference span");
            let reference = TimeSpan::default();
            self.start = reference.start();
            self.end = reference.end();
        }
        self
    }

    /// The configured dataset, or the built-in one. Never fails: errors are
    /// logged and the next fallback is used.
    pub fn initial_dataset(&self) -> Dataset {
        if let Some(path) = &self.dataset_path {
            let path = resolve_resource_path(path);
            match Dataset::load(&path) {
                Ok(dataset) => {
                    tracing::info!(
                        path = %path.display(),
                        layers = dataset.layers.len(),
                        events = dataset.event_count(),
                        "loaded dataset"
                    );
                    return dataset;
                }
                Err(err) => tracing::warn!("{err}; using the built-in dataset"),
            }
        }
        Dataset::reference().unwrap_or_else(|err| {
            tracing::error!("built-in dataset is invalid: {err}");
            Dataset::default()
        })
    }
}
