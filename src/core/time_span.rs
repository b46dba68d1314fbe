use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Result, TimelineError};

use super::position::{from_position, to_position};

/// Milliseconds since the Unix epoch for a wall-clock timestamp.
pub fn to_millis(time: NaiveDateTime) -> f64 {
    time.and_utc().timestamp_millis() as f64
}

/// Wall-clock timestamp for a millisecond offset, rounded to the nearest millisecond.
/// Returns `None` only for values outside chrono's representable range.
pub fn from_millis(ms: f64) -> Option<NaiveDateTime> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(ms.round() as i64).map(|dt| dt.naive_utc())
}

/// First instant of the reference timeline (1900-01-01 00:00:00).
pub fn reference_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1900, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Last instant of the reference timeline (2025-12-31 23:59:59).
pub fn reference_end() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 12, 31)
        .and_then(|date| date.and_hms_opt(23, 59, 59))
        .unwrap_or_default()
}

/// The bounded interval covered by the whole timeline.
///
/// Always satisfies `start < end`; the only way to build one from arbitrary
/// input is [`TimeSpan::new`], which rejects empty or inverted spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Default for TimeSpan {
    fn default() -> Self {
        Self {
            start: reference_start(),
            end: reference_end(),
        }
    }
}

impl TimeSpan {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start >= end {
            return Err(TimelineError::InvalidSpan { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn start_ms(&self) -> f64 {
        to_millis(self.start)
    }

    pub fn end_ms(&self) -> f64 {
        to_millis(self.end)
    }

    /// Total length in milliseconds. Always positive.
    pub fn duration_ms(&self) -> f64 {
        self.end_ms() - self.start_ms()
    }

    /// Clamp a millisecond timestamp into the span. NaN maps to the start.
    pub fn clamp_ms(&self, ms: f64) -> f64 {
        if ms.is_nan() {
            return self.start_ms();
        }
        ms.clamp(self.start_ms(), self.end_ms())
    }

    pub fn clamp(&self, time: NaiveDateTime) -> NaiveDateTime {
        time.clamp(self.start, self.end)
    }

    /// Timestamp for a millisecond value, clamped into the span.
    pub fn time_at_ms(&self, ms: f64) -> NaiveDateTime {
        from_millis(self.clamp_ms(ms))
            .map(|time| self.clamp(time))
            .unwrap_or(self.start)
    }

    /// Percentage (0-100) of the span at which `time` lies.
    pub fn position_of(&self, time: NaiveDateTime) -> f64 {
        to_position(to_millis(time), self.start_ms(), self.duration_ms())
    }

    /// Timestamp at `percent` of the span; the percentage is clamped to 0-100.
    pub fn time_at_position(&self, percent: f64) -> NaiveDateTime {
        let percent = if percent.is_nan() { 0.0 } else { percent.clamp(0.0, 100.0) };
        self.time_at_ms(from_position(percent, self.start_ms(), self.duration_ms()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_reference_span_bounds() {
        let span = TimeSpan::default();
        assert_eq!(span.start(), at(1900, 1, 1));
        assert_eq!(
            span.end(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap().and_hms_opt(23, 59, 59).unwrap()
        );
        assert!(span.duration_ms() > 0.0);
    }

    #[test]
    fn test_inverted_span_rejected() {
        assert!(TimeSpan::new(at(2000, 1, 1), at(1999, 1, 1)).is_err());
        assert!(TimeSpan::new(at(2000, 1, 1), at(2000, 1, 1)).is_err());
        assert!(TimeSpan::new(at(1999, 1, 1), at(2000, 1, 1)).is_ok());
    }

    #[test]
    fn test_clamp_keeps_values_inside() {
        let span = TimeSpan::default();
        assert_eq!(span.clamp(at(1800, 1, 1)), span.start());
        assert_eq!(span.clamp(at(2100, 1, 1)), span.end());
        assert_eq!(span.clamp_ms(f64::NAN), span.start_ms());
        assert_eq!(span.time_at_ms(f64::INFINITY), span.end());
    }

    #[test]
    fn test_millis_round_trip() {
        let time = at(1969, 7, 16);
        assert_eq!(from_millis(to_millis(time)), Some(time));
        assert_eq!(from_millis(f64::NAN), None);
    }

    #[test]
    fn test_midpoint_lands_in_early_sixties() {
        let span = TimeSpan::default();
        let mid = span.time_at_position(50.0);
        assert!((1962..=1963).contains(&mid.year()));
        let expected = span.start_ms() + span.duration_ms() / 2.0;
        assert!((to_millis(mid) - expected).abs() <= 1.0);
    }
}
