//! Icon selection keys derived from endpoint metadata.

use crate::config::{endpoint_field, EndpointField, EndpointsConfig};
use crate::endpoint::ModelEndpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Which icon family renders an endpoint.
pub enum IconKey {
    /// The glyph of a built-in endpoint.
    Endpoint(ModelEndpoint),
    /// A custom endpoint: its configured image, a bundled provider logo, or the generic glyph.
    Unknown,
}

impl IconKey {
    /// Stable token used for DOM hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Endpoint(endpoint) => endpoint.as_str(),
            Self::Unknown => "unknown",
        }
    }
}

/// Picks the endpoint whose icon a conversation should show.
///
/// A conversation may name another endpoint in its `icon_url`. When that endpoint exists in the
/// configuration with a non-empty default icon, it wins over the conversation's own endpoint.
pub fn icon_endpoint<'a>(
    config: Option<&EndpointsConfig>,
    icon_url: &'a str,
    endpoint: &'a str,
) -> &'a str {
    let borrows_icon = endpoint_field(config, icon_url, EndpointField::IconUrl)
        .is_some_and(|url| !url.is_empty());
    if borrows_icon {
        icon_url
    } else {
        endpoint
    }
}

/// Derives the icon key for `endpoint`.
///
/// `endpoint_type` and `endpoint_icon_url` are looked up from `config` only when the caller
/// passes `None`; an explicit empty string is kept. Returns `None` when the endpoint is neither
/// typed nor built-in, in which case no icon is rendered.
pub fn icon_key(
    endpoint: &str,
    config: Option<&EndpointsConfig>,
    endpoint_type: Option<&str>,
    endpoint_icon_url: Option<&str>,
) -> Option<IconKey> {
    let endpoint_type = endpoint_type
        .or_else(|| endpoint_field(config, endpoint, EndpointField::Type))
        .unwrap_or_default();
    let endpoint_icon_url = endpoint_icon_url
        .or_else(|| endpoint_field(config, endpoint, EndpointField::IconUrl))
        .unwrap_or_default();

    if let Some(builtin) = ModelEndpoint::parse(endpoint_icon_url) {
        return Some(IconKey::Endpoint(builtin));
    }
    if !endpoint_type.is_empty() {
        return Some(IconKey::Unknown);
    }
    ModelEndpoint::parse(endpoint).map(IconKey::Endpoint)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::EndpointConfig;

    fn config() -> EndpointsConfig {
        EndpointsConfig::default()
            .with("openAI", EndpointConfig::default())
            .with(
                "Mistral",
                EndpointConfig {
                    endpoint_type: Some("custom".into()),
                    ..EndpointConfig::default()
                },
            )
            .with(
                "proxy",
                EndpointConfig {
                    endpoint_type: Some("custom".into()),
                    icon_url: Some("anthropic".into()),
                    ..EndpointConfig::default()
                },
            )
            .with(
                "branded",
                EndpointConfig {
                    icon_url: Some("https://cdn.example.com/b.svg".into()),
                    ..EndpointConfig::default()
                },
            )
    }

    #[test]
    fn icon_endpoint_borrows_configured_icon() {
        let config = config();
        assert_eq!(icon_endpoint(Some(&config), "branded", "openAI"), "branded");
        assert_eq!(icon_endpoint(Some(&config), "Mistral", "openAI"), "openAI");
        assert_eq!(icon_endpoint(Some(&config), "", "openAI"), "openAI");
        assert_eq!(icon_endpoint(None, "branded", "openAI"), "openAI");
    }

    #[test]
    fn builtin_endpoints_map_to_their_glyph() {
        let config = config();
        assert_eq!(
            icon_key("openAI", Some(&config), None, None),
            Some(IconKey::Endpoint(ModelEndpoint::OpenAi))
        );
        assert_eq!(
            icon_key("google", None, None, None),
            Some(IconKey::Endpoint(ModelEndpoint::Google))
        );
    }

    #[test]
    fn icon_url_naming_builtin_wins_over_type() {
        let config = config();
        assert_eq!(
            icon_key("proxy", Some(&config), None, None),
            Some(IconKey::Endpoint(ModelEndpoint::Anthropic))
        );
    }

    #[test]
    fn typed_endpoints_are_unknown_and_untyped_strangers_have_no_icon() {
        let config = config();
        assert_eq!(icon_key("Mistral", Some(&config), None, None), Some(IconKey::Unknown));
        assert_eq!(icon_key("branded", Some(&config), None, None), None);
        assert_eq!(icon_key("nowhere", Some(&config), None, None), None);
        assert_eq!(icon_key("", None, None, None), None);
    }

    #[test]
    fn explicit_empty_arguments_skip_lookup() {
        let config = config();
        assert_eq!(icon_key("Mistral", Some(&config), Some(""), Some("")), None);
    }
}
