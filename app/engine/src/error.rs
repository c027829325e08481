//! Error types for Mosaic.
//!
//! This module provides the unified error type used throughout the engine.
//! Layout mutators themselves are total functions (unknown ids are treated
//! as no-ops), so errors only surface from registry validation, configuration
//! validation, and persistence-document encoding.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur inside the layout engine.
///
/// This enum implements `Serialize` so hosting layers can forward structured
/// error information to their own UI without re-wrapping.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum LayoutError {
    /// The widget template catalog failed validation.
    #[error("Registry error: {0}")]
    RegistryError(String),
    /// The grid configuration failed validation.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Encoding a layout document for persistence failed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LayoutError {
    fn from(err: serde_json::Error) -> Self { Self::SerializationError(err.to_string()) }
}
