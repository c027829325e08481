//! Remove-widget mutator.
//!
//! Removing a widget leaves a resizable placeholder at the same grid
//! position instead of compacting the grid, so sibling widgets do not jump.
//! Removing the placeholder itself deletes it outright.

use super::geometry::clamp_height;
use crate::constants::ids;
use crate::placement::{Layout, WidgetPlacement, placeholder_id};

/// Removes a widget from the layout.
///
/// - When `widget_id` already names a placeholder, that placement is
///   deleted from the layout.
/// - Otherwise the matching placement is replaced by a placeholder keeping
///   its `x`/`y`/`w`, with the id renamed to
///   `<widget_id>.EmptyWidgetPlaceholder` and the height clamped into
///   `[min_height, max_height]`.
///
/// A `widget_id` that matches nothing leaves the layout unchanged. The
/// input layout is never mutated.
#[must_use]
pub fn remove_widget(layout: &Layout, widget_id: &str, min_height: f64, max_height: f64) -> Layout {
    if widget_id.ends_with(ids::PLACEHOLDER_SUFFIX) {
        tracing::debug!("layout: deleting placeholder '{widget_id}'");
        return layout.iter().filter(|p| p.i != widget_id).cloned().collect();
    }

    tracing::debug!("layout: removing widget '{widget_id}', leaving a placeholder");
    layout
        .iter()
        .map(|placement| {
            if placement.i == widget_id {
                let mut hole = WidgetPlacement::new(
                    placeholder_id(widget_id),
                    placement.x,
                    placement.y,
                    placement.w,
                    clamp_height(placement.h, min_height, max_height),
                );
                hole.is_draggable = Some(false);
                hole
            } else {
                placement.clone()
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
