//! Persistence document assembly.
//!
//! The engine does not talk to the backend itself; it prepares the layout
//! for whoever does. Placeholder slots are a purely client-side affordance,
//! so they are stripped (at every nesting level) before the layout leaves
//! the engine, and the result is wrapped in a [`LayoutDocument`] keyed by
//! page id and persona.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::placement::Layout;
use crate::session::SessionContext;

/// A layout ready to be stored against a page record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDocument {
    /// Id of the page the layout belongs to.
    pub page_id: String,
    /// Persona the layout is scoped to, when the application uses personas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    /// The placements, placeholders already stripped.
    pub layout: Layout,
}

/// Strips placeholder placements from a layout, nested child layouts
/// included. Real placements are otherwise carried over unchanged.
#[must_use]
pub fn strip_placeholders(layout: &Layout) -> Layout {
    layout
        .iter()
        .filter(|p| !p.is_placeholder())
        .map(|p| {
            let mut kept = p.clone();
            if let Some(data) = kept.data.as_deref_mut()
                && let Some(page) = data.page.as_mut()
            {
                page.layout = strip_placeholders(&page.layout);
            }
            kept
        })
        .collect()
}

/// Builds the persistence document for a page.
///
/// The persona comes from the session context; the layout is stripped of
/// placeholder placements first.
#[must_use]
pub fn build_document(
    page_id: impl Into<String>,
    session: &SessionContext,
    layout: &Layout,
) -> LayoutDocument {
    let page_id = page_id.into();
    tracing::debug!("layout: building document for page '{page_id}' (user {})", session.user_id);
    LayoutDocument {
        page_id,
        persona: session.persona.clone(),
        layout: strip_placeholders(layout),
    }
}

/// Encodes a document as the JSON the persistence layer submits.
///
/// # Errors
///
/// Returns [`LayoutError::SerializationError`] when encoding fails.
pub fn encode_document(document: &LayoutDocument) -> Result<String, LayoutError> {
    Ok(serde_json::to_string(document)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ids;
    use crate::placement::{NestedPage, WidgetData, WidgetPlacement, placeholder_id};

    fn layout_with_placeholders() -> Layout {
        let mut nested = Layout::new();
        nested.push(WidgetPlacement::new("Widget.Following-1", 0.0, 0.0, 1.0, 2.0));
        nested.push(WidgetPlacement::new(placeholder_id("Widget.Gone-2"), 0.0, 2.0, 1.0, 2.0));

        let mut layout = Layout::new();
        layout.push(WidgetPlacement::new("Widget.MyData-1", 0.0, 0.0, 2.0, 3.0));
        layout.push(WidgetPlacement::new(placeholder_id("Widget.Gone-1"), 2.0, 0.0, 1.0, 2.0));
        layout.push(WidgetPlacement::new(ids::BOTTOM_PLACEHOLDER_ID, 0.0, 100.0, 4.0, 2.0));
        layout.push(
            WidgetPlacement::new("Widget.RightPanel-1", 3.0, 0.0, 1.0, 6.0).with_data(WidgetData {
                page: Some(NestedPage::new(nested)),
                ..WidgetData::default()
            }),
        );
        layout
    }

    #[test]
    fn test_strip_placeholders_at_every_level() {
        let stripped = strip_placeholders(&layout_with_placeholders());

        assert_eq!(stripped.len(), 2);
        assert!(stripped.iter().all(|p| !p.is_placeholder()));

        let nested = stripped[1].nested_layout().unwrap();
        assert_eq!(nested.len(), 1);
        assert_eq!(nested[0].i, "Widget.Following-1");
    }

    #[test]
    fn test_build_document_scopes_to_session_persona() {
        let session = SessionContext::new("user-1").with_persona("data-steward");
        let document = build_document("landing", &session, &layout_with_placeholders());

        assert_eq!(document.page_id, "landing");
        assert_eq!(document.persona.as_deref(), Some("data-steward"));
        assert_eq!(document.layout.len(), 2);
    }

    #[test]
    fn test_encode_document_wire_shape() {
        let session = SessionContext::new("user-1");
        let mut layout = Layout::new();
        layout.push(WidgetPlacement::new("Widget.MyData-1", 0.0, 0.0, 2.0, 3.0));

        let document = build_document("landing", &session, &layout);
        let encoded = encode_document(&document).unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();

        assert_eq!(value["pageId"], "landing");
        assert!(value.get("persona").is_none());
        assert_eq!(
            value["layout"],
            serde_json::json!([
                {"i": "Widget.MyData-1", "x": 0.0, "y": 0.0, "w": 2.0, "h": 3.0}
            ])
        );
    }
}
