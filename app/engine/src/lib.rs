//! Mosaic - a grid layout engine for customizable dashboard widgets.
//!
//! This library maintains a collection of rectangular widget placements on
//! a fixed-column grid in response to discrete user actions: add widget,
//! remove widget, and drag/resize. A height-reconciliation pass keeps a
//! distinguished auto-sized container placement as tall as its tallest
//! sibling column.
//!
//! # Design
//!
//! Every mutator is a pure function over its documented input domain:
//! unknown placement ids are no-ops, not errors, and the input layout is
//! never mutated. The hosting view layer owns the authoritative layout,
//! invokes mutators serially from its event loop, and persists the result
//! through its own transport using the document types in [`persist`].
//!
//! # Usage
//!
//! ```
//! use mosaic_lib::config::GridConfig;
//! use mosaic_lib::constants::ids;
//! use mosaic_lib::layout::{LayoutAction, apply_and_reconcile};
//! use mosaic_lib::placement::{Layout, WidgetPlacement};
//! use mosaic_lib::registry::WidgetRegistry;
//!
//! let registry = WidgetRegistry::with_defaults();
//! let config = GridConfig::default();
//!
//! let mut layout = Layout::new();
//! layout.push(WidgetPlacement::new("Widget.RightPanel-1", 3.0, 0.0, 1.0, 1.0));
//! layout.push(WidgetPlacement::new(ids::BOTTOM_PLACEHOLDER_ID, 0.0, 100.0, 4.0, 2.0));
//!
//! let template = registry.get("Widget.ActivityFeed").unwrap();
//! let action = LayoutAction::Add {
//!     template,
//!     target_placeholder_id: ids::BOTTOM_PLACEHOLDER_ID,
//!     width: 2.0,
//! };
//!
//! let layout = apply_and_reconcile(&layout, &action, &config, "Widget.RightPanel-1", None);
//! assert_eq!(layout.len(), 3);
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod persist;
pub mod placement;
pub mod registry;
pub mod session;

// Re-export commonly used types
pub use config::GridConfig;
pub use error::LayoutError;
pub use layout::{
    LayoutAction, PlacementUpdate, add_widget, apply_action, apply_and_reconcile,
    apply_layout_update, recompute_container_height, remove_widget,
};
pub use persist::{LayoutDocument, build_document, encode_document, strip_placeholders};
pub use placement::{Layout, NestedPage, WidgetData, WidgetPlacement, placeholder_id};
pub use registry::{WidgetRegistry, WidgetTemplate};
pub use session::SessionContext;
