//! Registry configuration.

use serde::{Deserialize, Serialize};

use crate::document::STYLE_ELEMENT_ID;

/// Settings applied when a [`Registry`](crate::Registry) attaches to a document.
///
/// Every field has a default, so partial configurations deserialize cleanly:
///
/// ```rust
/// use loudo_styled::RegistryConfig;
///
/// let config: RegistryConfig = serde_json::from_str(r#"{ "log": true }"#).unwrap();
/// assert!(config.log);
/// assert_eq!(config.element_id, "loudo-styled");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Id of the style container to attach to.
    pub element_id: String,
    /// Whether inserted rules are logged from the start.
    pub log: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            element_id: STYLE_ELEMENT_ID.to_string(),
            log: false,
        }
    }
}
