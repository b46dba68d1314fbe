use chrono::NaiveDateTime;

use super::scale::Scale;
use super::time_span::TimeSpan;

/// One column of the time grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub index: u64,
    pub time: NaiveDateTime,
    pub is_major: bool,
    /// Offset of the cell's left edge, in percent of the full timeline.
    pub left_percent: f64,
    pub width_percent: f64,
}

/// Number of cells needed to cover the span, plus one trailing cell.
pub fn cell_count(span: &TimeSpan, scale: &Scale) -> u64 {
    (span.duration_ms() / scale.interval_ms).ceil() as u64 + 1
}

/// Build the grid cells for a span.
///
/// `window` restricts the result to cells overlapping a `(from, to)` percent
/// range, so that fine resolutions over long spans stay small. Cell indices
/// are always counted from the span start.
pub fn grid_cells(span: &TimeSpan, scale: &Scale, window: Option<(f64, f64)>) -> Vec<GridCell> {
    let total_ms = span.duration_ms();
    let count = cell_count(span, scale);
    if count == 0 {
        return Vec::new();
    }
    let cells_per_percent = total_ms / scale.interval_ms / 100.0;
    let (first, last) = match window {
        Some((from, to)) => {
            let from = from.max(0.0);
            let to = to.max(from);
            let first = (from * cells_per_percent).floor() as u64;
            let last = ((to * cells_per_percent).ceil() as u64).min(count - 1);
            (first.min(count - 1), last)
        }
        None => (0, count - 1),
    };

    let width_percent = scale.interval_ms / total_ms * 100.0;
    let start_ms = span.start_ms();
    (first..=last)
        .map(|index| {
            let offset_ms = index as f64 * scale.interval_ms;
            GridCell {
                index,
                // The trailing cell may start past the end; clamp it.
                time: span.time_at_ms(start_ms + offset_ms),
                is_major: scale.is_major(index),
                left_percent: index as f64 * width_percent,
                width_percent,
            }
        })
        .collect()
}
