//! Chooses the icon shown next to the "New chat" label.
//!
//! Resolution is total: every combination of search text, conversation, and endpoints query
//! maps to a [`ResolvedIcon`], with [`ResolvedIcon::None`] when nothing applies. A loading or
//! failed endpoints query behaves like an empty configuration.

use endpoint_catalog::{
    endpoint_field, icon_endpoint, icon_key, Conversation, EndpointField, EndpointsQuery,
    IconKey, KnownEndpoint, ModelEndpoint,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Icon selected for a "New chat" control.
pub enum ResolvedIcon {
    /// Search mode is active.
    Search,
    /// The conversation carries its own remote icon.
    Image {
        /// Image URL, exactly as stored on the conversation.
        url: String,
        /// Alternative text naming the conversation's endpoint.
        alt: String,
    },
    /// An icon derived from the conversation's endpoint.
    Named(NamedIcon),
    /// Nothing to show.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Endpoint-derived icon along with the metadata its renderer needs.
pub struct NamedIcon {
    /// Icon family.
    pub key: IconKey,
    /// Endpoint the icon represents.
    pub endpoint: String,
    /// Configured endpoint type.
    pub endpoint_type: Option<String>,
    /// Configured default icon of the endpoint.
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Concrete artwork for a [`NamedIcon`].
pub enum IconGlyph {
    /// Catalog glyph of a built-in endpoint.
    Builtin(ModelEndpoint),
    /// Configured or bundled image.
    Image {
        /// Image source.
        src: String,
        /// Alternative text.
        alt: String,
    },
    /// Generic custom-endpoint glyph.
    CustomMinimal,
}

impl NamedIcon {
    /// Picks the artwork. Unknown endpoints prefer their configured image, then a bundled
    /// provider logo, then the generic glyph.
    pub fn glyph(&self) -> IconGlyph {
        match self.key {
            IconKey::Endpoint(endpoint) => IconGlyph::Builtin(endpoint),
            IconKey::Unknown => {
                if self.endpoint.is_empty() {
                    return IconGlyph::CustomMinimal;
                }
                if let Some(url) = self.icon_url.as_deref().filter(|url| !url.is_empty()) {
                    return IconGlyph::Image {
                        src: url.to_string(),
                        alt: format!("{} Icon", self.endpoint),
                    };
                }
                match KnownEndpoint::lookup(&self.endpoint) {
                    Some(known) => IconGlyph::Image {
                        src: known.asset_path().to_string(),
                        alt: format!("{} Icon", known.name()),
                    },
                    None => IconGlyph::CustomMinimal,
                }
            }
        }
    }
}

/// Resolves the icon for the conversation bound to a "New chat" control.
///
/// Priority: active search, then an explicit icon URL containing `http`, then the endpoint's
/// icon. The URL check is a substring test and performs no further validation.
pub fn resolve_new_chat_icon(
    conversation: Option<&Conversation>,
    search_query: &str,
    endpoints: &EndpointsQuery,
) -> ResolvedIcon {
    if !search_query.is_empty() {
        return ResolvedIcon::Search;
    }

    let endpoint = conversation
        .map(Conversation::endpoint_or_empty)
        .unwrap_or_default();
    let icon_url = conversation
        .map(Conversation::icon_url_or_empty)
        .unwrap_or_default();

    if icon_url.contains("http") {
        let label = if endpoint.is_empty() {
            "Conversation"
        } else {
            endpoint
        };
        return ResolvedIcon::Image {
            url: icon_url.to_string(),
            alt: format!("{label} Icon"),
        };
    }

    let config = endpoints.config();
    let endpoint = icon_endpoint(config, icon_url, endpoint);
    if endpoint.is_empty() {
        return ResolvedIcon::None;
    }

    let endpoint_type = endpoint_field(config, endpoint, EndpointField::Type);
    let endpoint_icon_url = endpoint_field(config, endpoint, EndpointField::IconUrl);

    match icon_key(endpoint, config, endpoint_type, endpoint_icon_url) {
        Some(key) => ResolvedIcon::Named(NamedIcon {
            key,
            endpoint: endpoint.to_string(),
            endpoint_type: endpoint_type.map(str::to_string),
            icon_url: endpoint_icon_url.map(str::to_string),
        }),
        None => ResolvedIcon::None,
    }
}
