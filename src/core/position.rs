//! Conversions between timeline time and horizontal position.
//!
//! Positions are percentages (0-100) of the whole span. Pixel geometry only
//! appears in [`click_to_percent`], which turns a pointer offset inside the
//! scrollable viewport into a percentage.

use serde::Deserialize;

/// Percentage of the span at which `time_ms` lies.
pub fn to_position(time_ms: f64, start_ms: f64, total_ms: f64) -> f64 {
    (time_ms - start_ms) / total_ms * 100.0
}

/// Inverse of [`to_position`].
pub fn from_position(percent: f64, start_ms: f64, total_ms: f64) -> f64 {
    start_ms + (percent / 100.0) * total_ms
}

/// Measured geometry of the scrollable timeline host, reported by the webview.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TimelineViewport {
    /// Left edge of the host in client coordinates.
    pub left: f64,
    /// Visible width of the host, label gutter included.
    pub width: f64,
    /// Horizontal scroll offset of the host.
    pub scroll_left: f64,
}

impl TimelineViewport {
    /// Width available to the tracks at zoom 1.
    pub fn track_width(&self, gutter_px: f64) -> f64 {
        (self.width - gutter_px).max(0.0)
    }
}

/// Convert a click offset (relative to the viewport's left edge) to a
/// percentage of the span.
///
/// Returns `None` when the click lands in the label gutter or the viewport has
/// no track area; otherwise the result is clamped to 0-100.
pub fn click_to_percent(
    x: f64,
    viewport: &TimelineViewport,
    gutter_px: f64,
    zoom: f64,
) -> Option<f64> {
    let adjusted_x = x - gutter_px;
    if adjusted_x < 0.0 || !adjusted_x.is_finite() {
        return None;
    }
    let total_width = viewport.track_width(gutter_px) * zoom;
    if total_width <= 0.0 || !total_width.is_finite() {
        return None;
    }
    let fraction = (adjusted_x + viewport.scroll_left) / total_width;
    Some(fraction.clamp(0.0, 1.0) * 100.0)
}

/// Placement of an event block along the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockGeometry {
    pub left_percent: f64,
    pub width_percent: f64,
}

impl BlockGeometry {
    /// Blocks narrower than this share of the span are drawn without an inline title.
    pub const LABEL_MIN_WIDTH_PERCENT: f64 = 3.0;

    pub fn new(start_ms: f64, end_ms: f64, span_start_ms: f64, total_ms: f64) -> Self {
        Self {
            left_percent: to_position(start_ms, span_start_ms, total_ms),
            width_percent: (end_ms - start_ms) / total_ms * 100.0,
        }
    }

    pub fn shows_label(&self) -> bool {
        self.width_percent > Self::LABEL_MIN_WIDTH_PERCENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: f64 = -2_208_988_800_000.0;
    const TOTAL: f64 = 3_976_214_399_000.0;

    #[test]
    fn test_position_inverse() {
        for percent in [0.0, 0.1, 12.5, 33.3, 50.0, 87.25, 100.0] {
            let time = from_position(percent, START, TOTAL);
            assert!((to_position(time, START, TOTAL) - percent).abs() < 1e-9);
        }
        for time in [START, START + 1.0, START + TOTAL / 3.0, START + TOTAL] {
            let back = from_position(to_position(time, START, TOTAL), START, TOTAL);
            assert!((back - time).abs() < 1e-3);
        }
    }

    #[test]
    fn test_click_in_gutter_ignored() {
        let viewport = TimelineViewport { left: 0.0, width: 1128.0, scroll_left: 0.0 };
        assert_eq!(click_to_percent(127.0, &viewport, 128.0, 1.0), None);
        assert_eq!(click_to_percent(128.0, &viewport, 128.0, 1.0), Some(0.0));
    }

    #[test]
    fn test_click_at_half_track() {
        let viewport = TimelineViewport { left: 0.0, width: 1128.0, scroll_left: 0.0 };
        let percent = click_to_percent(128.0 + 500.0, &viewport, 128.0, 1.0).unwrap();
        assert!((percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_click_at_track_middle_seeks_to_midpoint() {
        use crate::core::time_span::{to_millis, TimeSpan};
        use chrono::Datelike;

        let span = TimeSpan::default();
        let viewport = TimelineViewport { left: 0.0, width: 1128.0, scroll_left: 0.0 };
        let percent = click_to_percent(128.0 + 500.0, &viewport, 128.0, 1.0).unwrap();
        let time = span.time_at_position(percent);

        assert!((1962..=1963).contains(&time.year()));
        let expected = span.start_ms() + span.duration_ms() / 2.0;
        assert!((to_millis(time) - expected).abs() <= 1.0);
    }

    #[test]
    fn test_click_accounts_for_zoom_and_scroll() {
        // Zoom 4 makes the track 4000px wide; scrolled by 1500px, a click 500px
        // into the track is at 2000px, i.e. the middle.
        let viewport = TimelineViewport { left: 0.0, width: 1128.0, scroll_left: 1500.0 };
        let percent = click_to_percent(628.0, &viewport, 128.0, 4.0).unwrap();
        assert!((percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_click_past_end_clamped() {
        let viewport = TimelineViewport { left: 0.0, width: 1128.0, scroll_left: 900.0 };
        assert_eq!(click_to_percent(1100.0, &viewport, 128.0, 1.0), Some(100.0));
    }

    #[test]
    fn test_click_without_track_area_ignored() {
        let viewport = TimelineViewport { left: 0.0, width: 100.0, scroll_left: 0.0 };
        assert_eq!(click_to_percent(150.0, &viewport, 128.0, 1.0), None);
    }

    #[test]
    fn test_block_label_threshold() {
        let narrow = BlockGeometry::new(START, START + TOTAL * 0.02, START, TOTAL);
        let wide = BlockGeometry::new(START, START + TOTAL * 0.05, START, TOTAL);
        assert!(!narrow.shows_label());
        assert!(wide.shows_label());
        assert_eq!(wide.left_percent, 0.0);
    }
}
