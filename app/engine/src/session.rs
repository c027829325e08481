//! Session context passed into persistence-facing operations.
//!
//! The hosting application knows who is looking at the dashboard and which
//! persona they have selected. Instead of reading that from process-wide
//! state, the engine takes an explicit [`SessionContext`] value wherever the
//! current user matters (today: building the persistence document).

use serde::{Deserialize, Serialize};

/// The identity a layout document is saved under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    /// Id of the signed-in user.
    pub user_id: String,
    /// Selected persona, when the application scopes dashboards per persona.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
}

impl SessionContext {
    /// Creates a context for a user with no persona selected.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self { user_id: user_id.into(), persona: None }
    }

    /// Sets the selected persona.
    #[must_use]
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = Some(persona.into());
        self
    }
}
