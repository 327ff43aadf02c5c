//! Host-tunable settings for the navigation runtime.

use endpoint_catalog::EndpointsConfig;
use serde::{Deserialize, Serialize};

/// Client route of an unsaved conversation.
pub const NEW_CHAT_ROUTE: &str = "/c/new";
/// Server route serving the endpoints configuration.
pub const ENDPOINTS_PATH: &str = "/api/endpoints";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Settings read once by [`crate::ChatNavProvider`].
pub struct ChatNavConfig {
    /// Route the "New chat" control navigates to.
    pub new_chat_route: String,
    /// Path passed to the endpoints source.
    pub endpoints_path: String,
    /// Hover delay before tooltips open.
    pub tooltip_delay_ms: u64,
    /// UI locale tag, e.g. `en` or `de-AT`.
    pub locale: String,
    /// Endpoints configuration embedded by the host. When set, no fetch is made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<EndpointsConfig>,
}

impl Default for ChatNavConfig {
    fn default() -> Self {
        Self {
            new_chat_route: NEW_CHAT_ROUTE.to_string(),
            endpoints_path: ENDPOINTS_PATH.to_string(),
            tooltip_delay_ms: 250,
            locale: "en".to_string(),
            endpoints: None,
        }
    }
}

impl ChatNavConfig {
    /// Parses settings embedded by the host page. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
