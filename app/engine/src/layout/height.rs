//! Container height reconciliation.
//!
//! One placement in a dashboard layout (the auto-sized container, typically
//! a right-hand panel) must render as tall as the tallest sibling column.
//! The drag-grid surface only accepts heights in row-units, while "as tall
//! as the tallest column" is a pixel quantity, so reconciliation converts
//! the tallest sibling's pixel extent back into fractional row-units and
//! writes that onto the container.

use super::geometry::{pixel_extent, round_row_units};
use crate::placement::{Layout, WidgetPlacement};

/// Recomputes the auto-sized container's height.
///
/// Collects every real content placement in the layout, including
/// placements inside nested child layouts (`data.page.layout`), skipping
/// the container itself and placeholder slots. The tallest collected pixel
/// extent is converted back into row-units, rounded to two decimals, and
/// written onto the placement whose id is `container_id`.
///
/// When `height_override` is supplied and positive it wins over the
/// computed value; edit mode uses this to stretch the container past its
/// content. All other placements pass through unchanged.
///
/// Calling this twice with the same inputs yields the same height: the
/// computation reads only sibling extents, never the container's current
/// height.
#[must_use]
pub fn recompute_container_height(
    layout: &Layout,
    row_height_px: f64,
    margin_px: f64,
    container_id: &str,
    height_override: Option<f64>,
) -> Layout {
    let height = height_override.filter(|h| *h > 0.0).unwrap_or_else(|| {
        let mut content: Vec<&WidgetPlacement> = Vec::new();
        collect_content(layout, container_id, &mut content);

        let max_extent = content
            .iter()
            .map(|p| pixel_extent(p, row_height_px, margin_px))
            .fold(0.0_f64, f64::max);

        round_row_units((max_extent + margin_px) / (row_height_px + margin_px))
    });

    tracing::debug!("layout: container '{container_id}' reconciled to {height} rows");
    layout
        .iter()
        .map(|placement| {
            if placement.i == container_id {
                let mut resized = placement.clone();
                resized.h = height;
                resized
            } else {
                placement.clone()
            }
        })
        .collect()
}

/// Depth-first collection of real content placements.
///
/// Descends into every placement's nested child layout, even for placements
/// that are themselves excluded from the result (the container's own
/// children count toward its height).
fn collect_content<'a>(
    layout: &'a Layout,
    container_id: &str,
    out: &mut Vec<&'a WidgetPlacement>,
) {
    for placement in layout {
        if placement.i != container_id && !placement.is_placeholder() {
            out.push(placement);
        }
        if let Some(nested) = placement.nested_layout() {
            collect_content(nested, container_id, out);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
