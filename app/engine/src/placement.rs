//! Placement types for the widget grid.
//!
//! This module defines the core data structures tracked by the layout
//! engine: a [`WidgetPlacement`] is one rectangle on the grid, and a
//! [`Layout`] is the ordered collection of placements for a dashboard page.
//!
//! Field names follow the wire format the persistence layer expects
//! (`{i, x, y, w, h, static?, data?}`), so a `Layout` serializes directly
//! into the shape stored against a page record.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::ids;

// ============================================================================
// Type Aliases
// ============================================================================

/// Inline capacity for layouts.
///
/// Most dashboard pages hold fewer than 8 widgets, so layouts are stored on
/// the stack without heap allocation in the common case.
pub const LAYOUT_INLINE_CAP: usize = 8;

/// An ordered collection of widget placements.
///
/// Order has no geometric meaning (geometry is fully determined by
/// `x`/`y`/`w`/`h`) but is preserved for stable rendering keys.
pub type Layout = SmallVec<[WidgetPlacement; LAYOUT_INLINE_CAP]>;

// ============================================================================
// Widget Placement
// ============================================================================

/// One widget instance placed on the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetPlacement {
    /// Unique placement id, stable across the widget's lifetime.
    ///
    /// Derived from the widget kind's qualified name plus a uniqueness
    /// suffix when the widget is added.
    pub i: String,
    /// Grid column of the origin.
    pub x: f64,
    /// Grid row of the origin. May be fractional to hint stacking order
    /// within the same row.
    pub y: f64,
    /// Width in grid columns.
    pub w: f64,
    /// Height in grid row-units.
    pub h: f64,
    /// Whether the placement is pinned (the drag surface ignores it).
    #[serde(rename = "static", default, skip_serializing_if = "is_false")]
    pub is_static: bool,
    /// Whether the user may drag this placement. `None` means the drag
    /// surface default (draggable) applies.
    #[serde(rename = "isDraggable", default, skip_serializing_if = "Option::is_none")]
    pub is_draggable: Option<bool>,
    /// Opaque per-widget configuration, carried through mutations untouched.
    ///
    /// Container widgets store a nested child layout under `data.page.layout`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Box<WidgetData>>,
}

fn is_false(value: &bool) -> bool { !*value }

impl WidgetPlacement {
    /// Creates a placement with default flags and no data blob.
    #[must_use]
    pub fn new(i: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            i: i.into(),
            x,
            y,
            w,
            h,
            is_static: false,
            is_draggable: None,
            data: None,
        }
    }

    /// Attaches a data blob to the placement.
    #[must_use]
    pub fn with_data(mut self, data: WidgetData) -> Self {
        self.data = Some(Box::new(data));
        self
    }

    /// Returns whether this placement is an empty placeholder slot.
    #[must_use]
    pub fn is_placeholder(&self) -> bool { self.i.ends_with(ids::PLACEHOLDER_SUFFIX) }

    /// Returns whether this placement is the bottom sentinel placeholder.
    #[must_use]
    pub fn is_bottom_placeholder(&self) -> bool { self.i == ids::BOTTOM_PLACEHOLDER_ID }

    /// Returns the nested child layout, if this placement carries one.
    #[must_use]
    pub fn nested_layout(&self) -> Option<&Layout> {
        self.data.as_deref().and_then(|data| data.page.as_ref()).map(|page| &page.layout)
    }
}

/// Builds the placeholder id left behind when a widget is removed.
#[must_use]
pub fn placeholder_id(widget_id: &str) -> String {
    format!("{widget_id}.{}", ids::PLACEHOLDER_SUFFIX)
}

// ============================================================================
// Widget Data
// ============================================================================

/// Opaque configuration blob attached to a placement.
///
/// The engine only interprets the optional nested `page` field; everything
/// else round-trips through serialization untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetData {
    /// Nested child page for container-type widgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<NestedPage>,
    /// Unknown fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A nested child page carried inside a container widget's data blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedPage {
    /// The child layout. Participates in height reconciliation.
    #[serde(default)]
    pub layout: Layout,
    /// Unknown fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl NestedPage {
    /// Creates a nested page holding the given child layout.
    #[must_use]
    pub fn new(layout: Layout) -> Self { Self { layout, extra: serde_json::Map::new() } }
}

// ============================================================================
// Tests
// ============================================================================
