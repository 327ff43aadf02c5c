use serde::{Deserialize, Serialize};

/// Conversation id the server treats as "not yet persisted".
pub const NEW_CONVERSATION_ID: &str = "new";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Conversation fields the navigation reads.
pub struct Conversation {
    /// Server id, or `new` for an unsaved conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Endpoint id the conversation talks to. May be empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Underlying endpoint type when `endpoint` is a custom endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_type: Option<String>,
    /// Model name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Explicit icon: a URL, or the id of an endpoint whose icon should be used.
    #[serde(rename = "iconURL", default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Conversation {
    /// Fresh unsaved conversation bound to `endpoint`.
    pub fn new_on(endpoint: Option<String>) -> Self {
        Self {
            conversation_id: Some(NEW_CONVERSATION_ID.to_string()),
            title: Some("New Chat".to_string()),
            endpoint,
            ..Self::default()
        }
    }

    /// Endpoint id, or `""` when unset.
    pub fn endpoint_or_empty(&self) -> &str {
        self.endpoint.as_deref().unwrap_or_default()
    }

    /// Icon URL, or `""` when unset.
    pub fn icon_url_or_empty(&self) -> &str {
        self.icon_url.as_deref().unwrap_or_default()
    }

    /// Returns whether this conversation has not been persisted yet.
    pub fn is_new(&self) -> bool {
        self.conversation_id.as_deref() == Some(NEW_CONVERSATION_ID)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reads_camel_case_wire_names() {
        let convo: Conversation = serde_json::from_str(
            r#"{"conversationId":"c1","endpoint":"Mistral","endpointType":"custom","iconURL":"openAI","unrelated":1}"#,
        )
        .expect("parse");

        assert_eq!(convo.conversation_id.as_deref(), Some("c1"));
        assert_eq!(convo.endpoint_type.as_deref(), Some("custom"));
        assert_eq!(convo.icon_url_or_empty(), "openAI");
        assert!(!convo.is_new());
    }

    #[test]
    fn new_conversation_is_unsaved() {
        let convo = Conversation::new_on(None);
        assert!(convo.is_new());
        assert_eq!(convo.endpoint_or_empty(), "");
    }
}
