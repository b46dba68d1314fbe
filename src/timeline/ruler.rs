use dioxus::prelude::*;

use crate::constants::{BORDER_STRONG, BORDER_SUBTLE, MONO_FONT, TEXT_MUTED};
use crate::core::grid::grid_cells;
use crate::core::scale::Scale;
use crate::core::time_span::TimeSpan;

/// Time grid with major (labeled) and minor cell boundaries.
/// All elements here use pointer-events: none so clicks pass through to parent
#[component]
pub(crate) fn TimeGrid(
    span: TimeSpan,
    scale: Scale,
    content_width: f64,  // pixel width of the whole zoomed track area
    window: (f64, f64),  // visible (from, to) range in percent of the span
) -> Element {
    let cells = grid_cells(&span, &scale, Some(window));

    rsx! {
        div {
            style: "position: absolute; left: 0; top: 0; width: {content_width}px; height: 100%; pointer-events: none;",
            for cell in cells {
                {
                    let x = cell.left_percent / 100.0 * content_width;
                    let width = cell.width_percent / 100.0 * content_width;
                    let border = if cell.is_major { BORDER_STRONG } else { BORDER_SUBTLE };
                    let label = if cell.is_major { Some(scale.format_tick(cell.time)) } else { None };
                    rsx! {
                        div {
                            key: "cell-{cell.index}",
                            style: "
                                position: absolute;
                                left: {x}px;
                                top: 0;
                                width: {width}px;
                                height: 100%;
                                box-sizing: border-box;
                                border-right: 1px solid {border};
                                pointer-events: none;
                            ",
                            if let Some(label) = label {
                                span {
                                    style: "position: absolute; left: 6px; top: 6px; font-size: 10px; color: {TEXT_MUTED}; font-family: {MONO_FONT}; white-space: nowrap; user-select: none;",
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
