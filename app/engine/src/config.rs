//! Grid configuration types.
//!
//! The engine itself reads no files and no environment; hosting layers build
//! a [`GridConfig`] from wherever their settings live (a page record, a
//! JSON document, hard-coded defaults) and pass it into the mutators that
//! need grid metrics.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::grid;
use crate::error::LayoutError;

/// Grid metrics for a dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GridConfig {
    /// Number of columns in the grid.
    pub columns: u32,
    /// Height of one grid row in pixels.
    pub row_height_px: f64,
    /// Margin between grid cells in pixels.
    pub margin_px: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: grid::DEFAULT_COLUMNS,
            row_height_px: grid::ROW_HEIGHT_PX,
            margin_px: grid::MARGIN_PX,
        }
    }
}

impl GridConfig {
    /// Returns the column count as a float, for clamping arithmetic.
    #[must_use]
    pub fn max_columns(&self) -> f64 { f64::from(self.columns) }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::ConfigError`] when the column count is zero,
    /// the row height is not positive, or the margin is negative.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::ConfigError("columns must be at least 1".to_string()));
        }
        if self.row_height_px <= 0.0 {
            return Err(LayoutError::ConfigError("rowHeightPx must be positive".to_string()));
        }
        if self.margin_px < 0.0 {
            return Err(LayoutError::ConfigError("marginPx must not be negative".to_string()));
        }
        Ok(())
    }
}
