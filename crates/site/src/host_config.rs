//! Navigation settings embedded in the host page.

use chat_nav::ChatNavConfig;
use leptos::logging;

/// Id of the `<script type="application/json">` element carrying [`ChatNavConfig`].
pub const HOST_CONFIG_ELEMENT_ID: &str = "chat-nav-config";

/// Reads settings from the host page, falling back to defaults when absent or invalid.
pub fn load_host_config() -> ChatNavConfig {
    let Some(raw) = embedded_config_text() else {
        return ChatNavConfig::default();
    };
    parse_host_config(&raw)
}

fn parse_host_config(raw: &str) -> ChatNavConfig {
    if raw.trim().is_empty() {
        return ChatNavConfig::default();
    }
    match ChatNavConfig::from_json(raw) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("host nav config ignored: {err}");
            ChatNavConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn embedded_config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(HOST_CONFIG_ELEMENT_ID)?
        .text_content()
}

#[cfg(not(target_arch = "wasm32"))]
fn embedded_config_text() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_invalid_config_uses_defaults() {
        assert_eq!(parse_host_config("  \n"), ChatNavConfig::default());
        assert_eq!(parse_host_config("{not json"), ChatNavConfig::default());
    }

    #[test]
    fn embedded_locale_is_applied() {
        assert_eq!(parse_host_config(r#"{"locale":"de"}"#).locale, "de");
    }

    #[test]
    fn native_targets_have_no_host_page() {
        assert_eq!(load_host_config(), ChatNavConfig::default());
    }
}
