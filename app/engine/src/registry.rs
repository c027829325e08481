//! Widget template catalog.
//!
//! The catalog maps widget kind names to their grid sizing contract: default
//! height, allowed height range, and the widths the widget may occupy. The
//! layout mutators look templates up here instead of switching on kind
//! strings inline.
//!
//! The registry is validated when it is built, so a bad catalog fails at
//! startup rather than producing out-of-range placements at drag time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::sizing;
use crate::error::LayoutError;

// ============================================================================
// Widget Template
// ============================================================================

/// Sizing contract for one widget kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetTemplate {
    /// Fully qualified kind name, e.g. `Widget.ActivityFeed`.
    ///
    /// Placement ids are derived from this name plus a uniqueness suffix.
    pub name: String,
    /// Default height in grid row-units when the widget is first added.
    pub default_height: f64,
    /// Minimum height in grid row-units.
    pub min_height: f64,
    /// Maximum height in grid row-units.
    pub max_height: f64,
    /// Widths (in columns) the widget may occupy.
    pub widths: Vec<f64>,
}

impl WidgetTemplate {
    /// Creates a template with the given sizing contract.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        default_height: f64,
        min_height: f64,
        max_height: f64,
        widths: &[f64],
    ) -> Self {
        Self {
            name: name.into(),
            default_height,
            min_height,
            max_height,
            widths: widths.to_vec(),
        }
    }
}

// ============================================================================
// Widget Registry
// ============================================================================

/// Catalog of widget templates, keyed by qualified kind name.
#[derive(Debug, Clone, Default)]
pub struct WidgetRegistry {
    templates: HashMap<String, WidgetTemplate>,
}

impl WidgetRegistry {
    /// Builds a registry from a list of templates, validating as it goes.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::RegistryError`] when two templates share a
    /// name, a height range is inverted, or a default height falls outside
    /// its template's range.
    pub fn new(templates: Vec<WidgetTemplate>) -> Result<Self, LayoutError> {
        let mut map = HashMap::with_capacity(templates.len());

        for template in templates {
            if template.min_height > template.max_height {
                return Err(LayoutError::RegistryError(format!(
                    "template '{}' has an inverted height range ({} > {})",
                    template.name, template.min_height, template.max_height
                )));
            }
            if template.default_height < template.min_height
                || template.default_height > template.max_height
            {
                return Err(LayoutError::RegistryError(format!(
                    "template '{}' has default height {} outside [{}, {}]",
                    template.name,
                    template.default_height,
                    template.min_height,
                    template.max_height
                )));
            }
            if map.insert(template.name.clone(), template.clone()).is_some() {
                return Err(LayoutError::RegistryError(format!(
                    "duplicate template '{}'",
                    template.name
                )));
            }
        }

        Ok(Self { templates: map })
    }

    /// Builds the registry holding the stock dashboard widgets.
    #[must_use]
    pub fn with_defaults() -> Self {
        let templates = builtin_templates()
            .into_iter()
            .map(|template| (template.name.clone(), template))
            .collect();
        Self { templates }
    }

    /// Looks up a template by qualified kind name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WidgetTemplate> { self.templates.get(name) }

    /// Returns the default height for a kind, falling back silently for
    /// kinds the catalog does not know.
    #[must_use]
    pub fn default_height(&self, name: &str) -> f64 {
        self.get(name).map_or(sizing::FALLBACK_WIDGET_HEIGHT, |t| t.default_height)
    }

    /// Returns the `(min, max)` height bounds for a kind, falling back to
    /// the placeholder bounds for unknown kinds.
    #[must_use]
    pub fn height_bounds(&self, name: &str) -> (f64, f64) {
        self.get(name).map_or(
            (sizing::PLACEHOLDER_MIN_HEIGHT, sizing::PLACEHOLDER_MAX_HEIGHT),
            |t| (t.min_height, t.max_height),
        )
    }

    /// Returns all registered kind names, sorted for stable listings.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// The stock widget catalog for a metadata-catalog dashboard.
fn builtin_templates() -> Vec<WidgetTemplate> {
    vec![
        WidgetTemplate::new("Widget.ActivityFeed", 4.0, 3.0, 6.0, &[1.0, 2.0, 3.0, 4.0]),
        WidgetTemplate::new("Widget.DataAssets", 4.0, 3.0, 6.0, &[2.0, 3.0, 4.0]),
        WidgetTemplate::new("Widget.MyData", 3.0, 2.0, 4.0, &[1.0, 2.0]),
        WidgetTemplate::new("Widget.KpiChart", 3.0, 2.0, 4.0, &[1.0, 2.0]),
        WidgetTemplate::new("Widget.RecentlyViewed", 3.0, 2.0, 4.0, &[1.0, 2.0]),
        WidgetTemplate::new("Widget.Following", 3.0, 2.0, 4.0, &[1.0, 2.0]),
        WidgetTemplate::new("Widget.Announcements", 3.0, 2.0, 5.0, &[1.0, 2.0]),
        // Auto-sized right panel; its height comes from reconciliation, not
        // from this default
        WidgetTemplate::new("Widget.RightPanel", 6.0, 2.0, 100.0, &[1.0]),
    ]
}

// ============================================================================
// Tests
// ============================================================================
