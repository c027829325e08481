//! Layout mutators for the widget grid.
//!
//! Each mutator is a pure function: it takes the current [`Layout`] plus
//! event parameters and returns a new layout, never touching its input. The
//! hosting view layer owns the authoritative copy and invokes mutators
//! serially from its event loop.
//!
//! # Mutators
//!
//! - **Add** ([`add_widget`]): fill a placeholder slot, or append through
//!   the bottom sentinel
//! - **Remove** ([`remove_widget`]): replace a widget with a placeholder,
//!   or delete a placeholder outright
//! - **Update** ([`apply_layout_update`]): merge drag-surface position
//!   reports over the layout
//!
//! After any mutation, [`recompute_container_height`] brings the auto-sized
//! container back in line with the tallest sibling column. The
//! [`apply_action`] entry point routes an action enum to the right mutator
//! and runs that reconciliation pass in one call.

pub mod geometry;

mod add;
mod height;
mod remove;
mod update;

pub use add::{add_widget, fresh_placement_id};
pub use height::recompute_container_height;
pub use remove::remove_widget;
pub use update::{PlacementUpdate, apply_layout_update};

use crate::config::GridConfig;
use crate::placement::Layout;
use crate::registry::WidgetTemplate;

// ============================================================================
// Action Dispatch
// ============================================================================

/// A discrete user action against the layout.
#[derive(Debug, Clone)]
pub enum LayoutAction<'a> {
    /// Add a widget through a placeholder slot.
    Add {
        /// Template of the widget being added.
        template: &'a WidgetTemplate,
        /// Id of the placeholder slot to fill (or the bottom sentinel).
        target_placeholder_id: &'a str,
        /// Requested width in grid columns.
        width: f64,
    },
    /// Remove a widget (or delete a placeholder).
    Remove {
        /// Id of the placement to remove.
        widget_id: &'a str,
        /// Minimum height of the placeholder left behind.
        min_height: f64,
        /// Maximum height of the placeholder left behind.
        max_height: f64,
    },
    /// Merge drag-surface position reports.
    Update {
        /// Reports from the drag surface, one per rendered placement.
        updates: &'a [PlacementUpdate],
    },
}

/// Applies one action to the layout.
#[must_use]
pub fn apply_action(layout: &Layout, action: &LayoutAction<'_>, config: &GridConfig) -> Layout {
    match action {
        LayoutAction::Add { template, target_placeholder_id, width } => {
            add_widget(layout, template, target_placeholder_id, *width, config.max_columns())
        }
        LayoutAction::Remove { widget_id, min_height, max_height } => {
            remove_widget(layout, widget_id, *min_height, *max_height)
        }
        LayoutAction::Update { updates } => apply_layout_update(layout, updates),
    }
}

/// Applies one action, then reconciles the auto-sized container's height.
///
/// This is the path the view layer normally takes: mutate, reconcile,
/// re-render. `height_override` is forwarded to the reconciliation pass for
/// edit mode.
#[must_use]
pub fn apply_and_reconcile(
    layout: &Layout,
    action: &LayoutAction<'_>,
    config: &GridConfig,
    container_id: &str,
    height_override: Option<f64>,
) -> Layout {
    let next = apply_action(layout, action, config);
    recompute_container_height(
        &next,
        config.row_height_px,
        config.margin_px,
        container_id,
        height_override,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ids;
    use crate::placement::WidgetPlacement;

    fn template() -> WidgetTemplate {
        WidgetTemplate::new("Widget.ActivityFeed", 3.0, 2.0, 6.0, &[1.0, 2.0])
    }

    fn base_layout() -> Layout {
        let mut layout = Layout::new();
        layout.push(WidgetPlacement::new("Widget.MyData-1", 0.0, 0.0, 2.0, 4.0));
        layout.push(WidgetPlacement::new("Widget.RightPanel-1", 3.0, 0.0, 1.0, 1.0));
        layout.push(WidgetPlacement::new(ids::BOTTOM_PLACEHOLDER_ID, 0.0, 100.0, 4.0, 2.0));
        layout
    }

    #[test]
    fn test_apply_action_routes_add() {
        let template = template();
        let action = LayoutAction::Add {
            template: &template,
            target_placeholder_id: ids::BOTTOM_PLACEHOLDER_ID,
            width: 2.0,
        };

        let next = apply_action(&base_layout(), &action, &GridConfig::default());
        assert_eq!(next.len(), 4);
    }

    #[test]
    fn test_apply_action_routes_remove() {
        let action = LayoutAction::Remove {
            widget_id: "Widget.MyData-1",
            min_height: 2.0,
            max_height: 4.0,
        };

        let next = apply_action(&base_layout(), &action, &GridConfig::default());
        assert!(next.iter().any(|p| p.i == "Widget.MyData-1.EmptyWidgetPlaceholder"));
    }

    #[test]
    fn test_apply_action_routes_update() {
        let updates = vec![PlacementUpdate {
            i: "Widget.MyData-1".to_string(),
            x: 1.0,
            y: 1.0,
            w: 2.0,
            h: 4.0,
        }];
        let action = LayoutAction::Update { updates: &updates };

        let next = apply_action(&base_layout(), &action, &GridConfig::default());
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].x, 1.0);
    }

    #[test]
    fn test_apply_and_reconcile_updates_container() {
        let template = template();
        let action = LayoutAction::Add {
            template: &template,
            target_placeholder_id: ids::BOTTOM_PLACEHOLDER_ID,
            width: 2.0,
        };

        let next = apply_and_reconcile(
            &base_layout(),
            &action,
            &GridConfig::default(),
            "Widget.RightPanel-1",
            None,
        );

        let panel = next.iter().find(|p| p.i == "Widget.RightPanel-1").unwrap();
        // The 4-row sibling drives the container height past its initial 1
        assert!(panel.h > 4.0);
    }
}
