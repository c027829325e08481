//! Drag/resize layout-update mutator.
//!
//! After a user gesture completes, the drag-grid surface reports the new
//! position and size of every placement it is tracking. This mutator merges
//! those reports back over the engine's layout.

use serde::{Deserialize, Serialize};

use crate::placement::{Layout, WidgetPlacement};

/// One position/size report from the drag-grid surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementUpdate {
    /// Id of the placement the report refers to.
    pub i: String,
    /// New grid column of the origin.
    pub x: f64,
    /// New grid row of the origin.
    pub y: f64,
    /// New width in grid columns.
    pub w: f64,
    /// New height in grid row-units.
    pub h: f64,
}

/// Merges drag-surface reports over the current layout.
///
/// For each update entry, the reported geometry wins while everything else
/// on the matching placement (`data`, flags) is preserved. An update entry
/// with no matching placement becomes a bare placement on its own.
///
/// Membership and order of the result follow the update set: placements
/// present in `layout` but absent from `updates` are dropped. The drag
/// surface reports every placement it renders, so in practice the sets
/// coincide; a partial update set silently removes the unreported
/// placements.
#[must_use]
pub fn apply_layout_update(layout: &Layout, updates: &[PlacementUpdate]) -> Layout {
    tracing::debug!("layout: applying {} drag-surface updates", updates.len());
    updates
        .iter()
        .map(|update| {
            layout.iter().find(|p| p.i == update.i).map_or_else(
                || WidgetPlacement::new(update.i.clone(), update.x, update.y, update.w, update.h),
                |existing| {
                    let mut merged = existing.clone();
                    merged.x = update.x;
                    merged.y = update.y;
                    merged.w = update.w;
                    merged.h = update.h;
                    merged
                },
            )
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
