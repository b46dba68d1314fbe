//! Zoom-dependent time grid resolution.
//!
//! A single descending threshold table drives both the grid descriptor
//! ([`resolve_scale`]) and the current-time readout ([`format_current_time`]),
//! so the readout precision always matches the grid.

use chrono::NaiveDateTime;

/// Grid resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleUnit {
    Hour,
    Day,
    Month,
    Year,
}

impl ScaleUnit {
    pub fn label(self) -> &'static str {
        match self {
            ScaleUnit::Hour => "hour",
            ScaleUnit::Day => "day",
            ScaleUnit::Month => "month",
            ScaleUnit::Year => "year",
        }
    }

    /// Format for gridline labels.
    fn tick_format(self) -> &'static str {
        match self {
            ScaleUnit::Hour => "%b %-d, %H",
            ScaleUnit::Day => "%b %-d, %Y",
            ScaleUnit::Month => "%b %Y",
            ScaleUnit::Year => "%Y",
        }
    }

    /// Format for the single current-time readout.
    fn readout_format(self) -> &'static str {
        match self {
            ScaleUnit::Hour => "%b %-d, %Y, %H:%M",
            ScaleUnit::Day => "%b %-d, %Y",
            ScaleUnit::Month => "%b %Y",
            ScaleUnit::Year => "%Y",
        }
    }
}

/// Resolved grid descriptor for a zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub unit: ScaleUnit,
    /// Duration of one grid cell.
    pub interval_ms: f64,
    /// Number of cells between labeled gridlines.
    pub major_interval: u64,
}

impl Scale {
    /// Cell `index` carries a label.
    pub fn is_major(&self, index: u64) -> bool {
        index % self.major_interval.max(1) == 0
    }

    pub fn format_tick(&self, time: NaiveDateTime) -> String {
        time.format(self.unit.tick_format()).to_string()
    }

    pub fn format_readout(&self, time: NaiveDateTime) -> String {
        time.format(self.unit.readout_format()).to_string()
    }
}

pub const HOUR_MS: f64 = 3_600_000.0;
pub const DAY_MS: f64 = 86_400_000.0;
/// Mean Gregorian month.
pub const MONTH_MS: f64 = 2_629_746_000.0;
/// Mean Gregorian year.
pub const YEAR_MS: f64 = 31_556_952_000.0;

const HOUR_SCALE: Scale = Scale { unit: ScaleUnit::Hour, interval_ms: HOUR_MS, major_interval: 6 };
const DAY_SCALE: Scale = Scale { unit: ScaleUnit::Day, interval_ms: DAY_MS, major_interval: 7 };
const MONTH_SCALE: Scale = Scale { unit: ScaleUnit::Month, interval_ms: MONTH_MS, major_interval: 12 };
const YEAR_SCALE: Scale = Scale { unit: ScaleUnit::Year, interval_ms: YEAR_MS, major_interval: 10 };

/// `(min_zoom, scale)` rows, highest threshold first. First satisfied row wins.
const SCALE_TABLE: [(f64, Scale); 4] = [
    (50_000.0, HOUR_SCALE),
    (2_000.0, DAY_SCALE),
    (50.0, MONTH_SCALE),
    (f64::NEG_INFINITY, YEAR_SCALE),
];

/// Select the grid resolution for a zoom factor. Total: NaN falls through to years.
pub fn resolve_scale(zoom: f64) -> Scale {
    SCALE_TABLE
        .iter()
        .find(|(min_zoom, _)| zoom >= *min_zoom)
        .map(|(_, scale)| *scale)
        .unwrap_or(YEAR_SCALE)
}

/// Current-time readout at the precision of the active grid.
pub fn format_current_time(time: NaiveDateTime, zoom: f64) -> String {
    resolve_scale(zoom).format_readout(time)
}
