//! Add-widget mutator.
//!
//! Adding a widget either fills an existing placeholder slot (keeping its
//! grid position) or, when targeted at the bottom sentinel, appends a brand
//! new placement at the grid origin. The sentinel itself is never consumed,
//! so there is always one open slot left to add through.

use uuid::Uuid;

use super::geometry::clamp_x;
use crate::constants::ids;
use crate::placement::{Layout, WidgetPlacement};
use crate::registry::WidgetTemplate;

/// Generates a fresh placement id for a template.
///
/// Ids combine the template's qualified name with a process-unique suffix;
/// uniqueness across the session is the only contract.
#[must_use]
pub fn fresh_placement_id(template: &WidgetTemplate) -> String {
    format!("{}-{}", template.name, Uuid::now_v7().simple())
}

/// Adds a widget to the layout through a placeholder slot.
///
/// Two mutually exclusive paths, keyed on `target_placeholder_id`:
///
/// - The bottom sentinel: a new placement is appended at origin `(0, 0)`
///   with the requested width and the template's default height. The
///   sentinel stays in place.
/// - Any other id: the matching placement is replaced in sequence position,
///   taking over its `y` with the new id, the requested width (x clamped to
///   the grid) and the template's default height.
///
/// A `target_placeholder_id` that matches nothing leaves the layout
/// unchanged. The input layout is never mutated.
#[must_use]
pub fn add_widget(
    layout: &Layout,
    template: &WidgetTemplate,
    target_placeholder_id: &str,
    width: f64,
    columns: f64,
) -> Layout {
    let id = fresh_placement_id(template);
    let height = template.default_height;

    if target_placeholder_id == ids::BOTTOM_PLACEHOLDER_ID {
        tracing::debug!("layout: appending widget {id} at origin");
        let mut next = layout.clone();
        next.push(WidgetPlacement::new(id, 0.0, 0.0, width, height));
        return next;
    }

    if !layout.iter().any(|p| p.i == target_placeholder_id) {
        tracing::debug!("layout: add target '{target_placeholder_id}' not found, no-op");
        return layout.clone();
    }

    tracing::debug!("layout: filling slot '{target_placeholder_id}' with widget {id}");
    layout
        .iter()
        .map(|placement| {
            if placement.i == target_placeholder_id {
                let mut filled = WidgetPlacement::new(
                    id.clone(),
                    clamp_x(placement.x, width, columns),
                    placement.y,
                    width,
                    height,
                );
                filled.is_static = placement.is_static;
                filled
            } else {
                placement.clone()
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::placeholder_id;

    fn template() -> WidgetTemplate {
        WidgetTemplate::new("Widget.ActivityFeed", 3.0, 2.0, 6.0, &[1.0, 2.0, 3.0, 4.0])
    }

    fn base_layout() -> Layout {
        let mut layout = Layout::new();
        layout.push(WidgetPlacement::new("Widget.MyData-1", 0.0, 0.0, 2.0, 2.0));
        layout.push(WidgetPlacement::new(placeholder_id("Widget.MyData-1"), 0.0, 100.0, 3.0, 2.0));
        layout
    }

    #[test]
    fn test_fill_placeholder_keeps_sequence_position() {
        let layout = base_layout();
        let target = placeholder_id("Widget.MyData-1");

        let next = add_widget(&layout, &template(), &target, 4.0, 4.0);

        assert_eq!(next.len(), 2);
        assert_eq!(next[0], layout[0]);

        let added = &next[1];
        assert!(added.i.starts_with("Widget.ActivityFeed-"));
        assert_eq!(added.x, 0.0); // 0 + 4 <= 4, no clamping needed
        assert_eq!(added.y, 100.0);
        assert_eq!(added.w, 4.0);
        assert_eq!(added.h, 3.0); // template default height
    }

    #[test]
    fn test_fill_placeholder_clamps_x() {
        let mut layout = Layout::new();
        layout.push(WidgetPlacement::new(placeholder_id("Widget.MyData-1"), 3.0, 0.0, 1.0, 2.0));

        let next = add_widget(&layout, &template(), &layout[0].i.clone(), 2.0, 4.0);

        // x pulled back so x + w fits the 4-column grid
        assert_eq!(next[0].x, 2.0);
        assert_eq!(next[0].w, 2.0);
    }

    #[test]
    fn test_bottom_sentinel_appends_and_survives() {
        let mut layout = Layout::new();
        layout.push(WidgetPlacement::new(ids::BOTTOM_PLACEHOLDER_ID, 0.0, 100.0, 4.0, 2.0));

        let next = add_widget(&layout, &template(), ids::BOTTOM_PLACEHOLDER_ID, 2.0, 4.0);

        assert_eq!(next.len(), 2);
        // Sentinel untouched
        assert_eq!(next[0].i, ids::BOTTOM_PLACEHOLDER_ID);

        // New placement at the grid origin
        let added = &next[1];
        assert_eq!((added.x, added.y), (0.0, 0.0));
        assert_eq!(added.w, 2.0);
        assert_eq!(added.h, 3.0);
    }

    #[test]
    fn test_unknown_target_is_a_no_op() {
        let layout = base_layout();
        let next = add_widget(&layout, &template(), "Widget.Ghost.EmptyWidgetPlaceholder", 2.0, 4.0);
        assert_eq!(next, layout);
    }

    #[test]
    fn test_input_layout_is_not_mutated() {
        let layout = base_layout();
        let snapshot = layout.clone();
        let _ = add_widget(&layout, &template(), &placeholder_id("Widget.MyData-1"), 2.0, 4.0);
        assert_eq!(layout, snapshot);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let mut layout = Layout::new();
        layout.push(WidgetPlacement::new(ids::BOTTOM_PLACEHOLDER_ID, 0.0, 100.0, 4.0, 2.0));

        for _ in 0..32 {
            layout = add_widget(&layout, &template(), ids::BOTTOM_PLACEHOLDER_ID, 2.0, 4.0);
        }

        let mut ids: Vec<&str> = layout.iter().map(|p| p.i.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 33); // 32 widgets + sentinel
    }
}
