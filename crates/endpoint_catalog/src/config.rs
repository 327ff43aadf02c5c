//! Endpoints configuration as served by the chat backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Metadata for a single configured endpoint.
pub struct EndpointConfig {
    /// Underlying endpoint type (for example `custom` for OpenAI-compatible proxies).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<String>,
    /// Default icon for the endpoint: a URL, or the name of a built-in endpoint.
    #[serde(rename = "iconURL", default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Display order in endpoint pickers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Human-readable model family label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_display_label: Option<String>,
}

/// Endpoint id to metadata. A `null` entry marks an endpoint the server has disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointsConfig(BTreeMap<String, Option<EndpointConfig>>);

impl EndpointsConfig {
    /// Parses the JSON body returned by the endpoints route.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Inserts or replaces metadata for `endpoint`.
    pub fn insert(&mut self, endpoint: impl Into<String>, config: Option<EndpointConfig>) {
        self.0.insert(endpoint.into(), config);
    }

    /// Builder form of [`EndpointsConfig::insert`].
    pub fn with(mut self, endpoint: impl Into<String>, config: EndpointConfig) -> Self {
        self.insert(endpoint, Some(config));
        self
    }

    /// Metadata for an enabled endpoint.
    pub fn get(&self, endpoint: &str) -> Option<&EndpointConfig> {
        self.0.get(endpoint).and_then(Option::as_ref)
    }

    /// Returns whether no endpoints are configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Enabled endpoints paired with their metadata.
    pub fn enabled(&self) -> impl Iterator<Item = (&str, &EndpointConfig)> {
        self.0
            .iter()
            .filter_map(|(name, config)| config.as_ref().map(|config| (name.as_str(), config)))
    }

    /// Enabled endpoint with the lowest `order`; ties and missing orders fall back to name order.
    pub fn default_endpoint(&self) -> Option<&str> {
        self.enabled()
            .min_by_key(|(_, config)| config.order.unwrap_or(i64::MAX))
            .map(|(name, _)| name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fields readable through [`endpoint_field`].
pub enum EndpointField {
    /// The endpoint's `type`.
    Type,
    /// The endpoint's default `iconURL`.
    IconUrl,
    /// The endpoint's `modelDisplayLabel`.
    ModelDisplayLabel,
}

/// Reads one field of an endpoint's metadata.
///
/// Missing configuration, unknown or disabled endpoints, and absent fields all yield `None`.
pub fn endpoint_field<'a>(
    config: Option<&'a EndpointsConfig>,
    endpoint: &str,
    field: EndpointField,
) -> Option<&'a str> {
    let entry = config?.get(endpoint)?;
    match field {
        EndpointField::Type => entry.endpoint_type.as_deref(),
        EndpointField::IconUrl => entry.icon_url.as_deref(),
        EndpointField::ModelDisplayLabel => entry.model_display_label.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const SERVER_BODY: &str = r#"{
        "openAI": { "order": 0, "type": null, "modelDisplayLabel": "ChatGPT" },
        "anthropic": { "order": 2 },
        "gptPlugins": null,
        "Mistral": { "type": "custom", "iconURL": "https://cdn.example.com/mistral.png", "order": 9, "userProvide": false }
    }"#;

    #[test]
    fn parses_server_body_with_disabled_and_extra_fields() {
        let config = EndpointsConfig::from_json(SERVER_BODY).expect("parse");

        assert_eq!(config.get("gptPlugins"), None);
        assert_eq!(
            config.get("Mistral").and_then(|c| c.endpoint_type.as_deref()),
            Some("custom")
        );
        assert_eq!(config.enabled().count(), 3);
    }

    #[test]
    fn endpoint_field_degrades_to_none() {
        let config = EndpointsConfig::from_json(SERVER_BODY).expect("parse");

        assert_eq!(
            endpoint_field(Some(&config), "Mistral", EndpointField::IconUrl),
            Some("https://cdn.example.com/mistral.png")
        );
        assert_eq!(
            endpoint_field(Some(&config), "openAI", EndpointField::ModelDisplayLabel),
            Some("ChatGPT")
        );
        assert_eq!(endpoint_field(Some(&config), "openAI", EndpointField::Type), None);
        assert_eq!(endpoint_field(Some(&config), "gptPlugins", EndpointField::Type), None);
        assert_eq!(endpoint_field(Some(&config), "missing", EndpointField::Type), None);
        assert_eq!(endpoint_field(None, "openAI", EndpointField::Type), None);
    }

    #[test]
    fn default_endpoint_prefers_lowest_order() {
        let config = EndpointsConfig::from_json(SERVER_BODY).expect("parse");
        assert_eq!(config.default_endpoint(), Some("openAI"));
        assert_eq!(EndpointsConfig::default().default_endpoint(), None);
    }

    #[test]
    fn rejects_non_object_body() {
        let err = EndpointsConfig::from_json("[1, 2]").expect_err("array body");
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
