//! Geometry helpers for grid placement arithmetic.

use crate::placement::WidgetPlacement;

/// Clamps an x origin so the placement stays inside the grid.
///
/// Returns `x` unchanged when `x + w <= columns`, otherwise `columns - w`.
/// The result keeps the placement within bounds provided `w <= columns`;
/// widths wider than the grid are the caller's responsibility and are not
/// validated here.
#[must_use]
pub fn clamp_x(x: f64, w: f64, columns: f64) -> f64 {
    if x + w <= columns { x } else { columns - w }
}

/// Clamps a height into the `[min, max]` range.
///
/// # Panics
///
/// Panics when `min > max`; callers supply ranges from the template
/// catalog, which rejects inverted ranges at construction.
#[must_use]
pub fn clamp_height(h: f64, min: f64, max: f64) -> f64 { h.clamp(min, max) }

/// Computes the pixel extent a placement occupies from the grid's top edge.
///
/// The drag-grid renderer inserts one margin above every row, so the extent
/// of a placement ending at row `h + y` is the row span in pixels plus one
/// margin per crossed row boundary.
#[must_use]
pub fn pixel_extent(placement: &WidgetPlacement, row_height_px: f64, margin_px: f64) -> f64 {
    let bottom = placement.h + placement.y;
    bottom * row_height_px + (bottom.floor() + 1.0) * margin_px
}

/// Rounds a row-unit value to two decimal places.
///
/// The drag-grid surface accepts fractional row counts but drifts when fed
/// long float tails, so reconciled heights are rounded before they are
/// written back.
#[must_use]
pub fn round_row_units(value: f64) -> f64 { (value * 100.0).round() / 100.0 }

// ============================================================================
// Tests
// ============================================================================
