//! Page settings

use serde::Deserialize;

use crate::fixtures::FixtureError;

/// Settings for the ordering page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Relative endpoint orders are posted to.
    pub order_endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            order_endpoint: "/order".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from YAML, falling back to defaults for missing keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(yaml)?)
    }
}
