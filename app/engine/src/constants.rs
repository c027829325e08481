//! Internal constants for the widget grid layout engine.
//!
//! This module centralizes the tuning constants used throughout the layout
//! system. The pixel values match the drag-grid renderer the view layer uses,
//! so changing them here without changing the renderer will produce layouts
//! that no longer line up visually.
//!
//! # Organization
//!
//! Constants are grouped by functionality:
//! - `grid` - Grid dimensions and pixel metrics
//! - `sizing` - Widget height defaults and bounds (in grid row-units)
//! - `ids` - Reserved placement id fragments

/// Grid dimensions and pixel metrics.
pub mod grid {
    /// Default number of columns in the dashboard grid.
    ///
    /// Placements are clamped so that `x + w` never exceeds this value.
    pub const DEFAULT_COLUMNS: u32 = 4;

    /// Height of one grid row in pixels, as rendered by the drag-grid surface.
    pub const ROW_HEIGHT_PX: f64 = 100.0;

    /// Margin between grid cells in pixels.
    ///
    /// The renderer inserts this margin above every row, so pixel-extent
    /// calculations must account for one margin per crossed row boundary.
    pub const MARGIN_PX: f64 = 16.0;
}

/// Widget height defaults and bounds, in grid row-units.
pub mod sizing {
    /// Height used for widget kinds the template catalog does not know.
    pub const FALLBACK_WIDGET_HEIGHT: f64 = 3.0;

    /// Minimum height of a placeholder left behind by widget removal.
    pub const PLACEHOLDER_MIN_HEIGHT: f64 = 2.0;

    /// Maximum height of a placeholder left behind by widget removal.
    pub const PLACEHOLDER_MAX_HEIGHT: f64 = 4.0;

    /// Fixed container height applied while the dashboard is in edit mode.
    ///
    /// In edit mode the container is stretched past its reconciled height so
    /// widgets can be dragged into the space below the current content.
    pub const EDIT_MODE_CONTAINER_HEIGHT: f64 = 22.0;
}

/// Reserved placement id fragments.
pub mod ids {
    /// Suffix marking a placement as an empty placeholder slot.
    ///
    /// Placeholder placements are never draggable, never count toward
    /// container height, and are stripped before a layout is persisted.
    pub const PLACEHOLDER_SUFFIX: &str = "EmptyWidgetPlaceholder";

    /// Id of the sentinel placeholder pinned to the bottom of every layout.
    ///
    /// Adding a widget through this sentinel appends a new placement instead
    /// of replacing the sentinel, so there is always one open slot left.
    pub const BOTTOM_PLACEHOLDER_ID: &str = "ExtraWidget.EmptyWidgetPlaceholder";
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_constants_are_reasonable() {
        // At least one column, sane pixel metrics
        assert!(grid::DEFAULT_COLUMNS >= 1);
        assert!(grid::ROW_HEIGHT_PX > 0.0);
        assert!(grid::MARGIN_PX >= 0.0);

        // Margin should be smaller than a row, otherwise rounding back to
        // row-units loses too much precision
        assert!(grid::MARGIN_PX < grid::ROW_HEIGHT_PX);
    }

    #[test]
    fn test_sizing_constants_are_reasonable() {
        assert!(sizing::FALLBACK_WIDGET_HEIGHT > 0.0);
        assert!(sizing::PLACEHOLDER_MIN_HEIGHT <= sizing::PLACEHOLDER_MAX_HEIGHT);

        // The fallback height must satisfy the placeholder bounds so a
        // remove-after-add round trip never clamps
        assert!(sizing::FALLBACK_WIDGET_HEIGHT >= sizing::PLACEHOLDER_MIN_HEIGHT);
        assert!(sizing::FALLBACK_WIDGET_HEIGHT <= sizing::PLACEHOLDER_MAX_HEIGHT);

        // Edit mode stretches, never shrinks
        assert!(sizing::EDIT_MODE_CONTAINER_HEIGHT > sizing::PLACEHOLDER_MAX_HEIGHT);
    }

    #[test]
    fn test_bottom_placeholder_carries_suffix() {
        assert!(ids::BOTTOM_PLACEHOLDER_ID.ends_with(ids::PLACEHOLDER_SUFFIX));
    }
}
