//! Reducer actions and transition logic for the navigation store.

use endpoint_catalog::{Conversation, EndpointsQuery};

use crate::model::ChatNavState;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_chat_nav`].
pub enum ChatNavAction {
    /// Replace the conversation search text.
    SetSearchQuery {
        /// New search text; empty leaves search mode.
        query: String,
    },
    /// Bind (or clear) the conversation shown by control `index`.
    SetConversation {
        /// Control index.
        index: usize,
        /// Conversation to bind, or `None` to clear the slot.
        conversation: Option<Conversation>,
    },
    /// Start a fresh unsaved conversation for control `index`.
    NewConversation {
        /// Control index.
        index: usize,
    },
    /// Store the latest endpoints fetch state.
    SetEndpoints(EndpointsQuery),
    /// Expand or collapse the side navigation.
    SetNavOpen {
        /// Whether the navigation should be expanded.
        open: bool,
    },
    /// Flip the side navigation between expanded and collapsed.
    ToggleNav,
}

/// Applies `action` to `state`. Every action is valid for any control index.
pub fn reduce_chat_nav(state: &mut ChatNavState, action: ChatNavAction) {
    match action {
        ChatNavAction::SetSearchQuery { query } => {
            state.search_query = query;
        }
        ChatNavAction::SetConversation {
            index,
            conversation,
        } => {
            match conversation {
                Some(conversation) => {
                    state.conversations.insert(index, conversation);
                }
                None => {
                    state.conversations.remove(&index);
                }
            }
        }
        ChatNavAction::NewConversation { index } => {
            let fresh = fresh_conversation(state, index);
            state.conversations.insert(index, fresh);
        }
        ChatNavAction::SetEndpoints(query) => {
            state.endpoints = query;
        }
        ChatNavAction::SetNavOpen { open } => {
            state.nav_open = open;
        }
        ChatNavAction::ToggleNav => {
            state.nav_open = !state.nav_open;
        }
    }
}

/// New conversation that keeps the slot's endpoint and model, or falls back to the configured
/// default endpoint. Explicit icons are per-conversation and are not carried over.
fn fresh_conversation(state: &ChatNavState, index: usize) -> Conversation {
    let previous = state
        .conversation(index)
        .filter(|conversation| !conversation.endpoint_or_empty().is_empty());

    match previous {
        Some(previous) => Conversation {
            endpoint_type: previous.endpoint_type.clone(),
            model: previous.model.clone(),
            ..Conversation::new_on(previous.endpoint.clone())
        },
        None => Conversation::new_on(
            state
                .endpoints
                .config()
                .and_then(|config| config.default_endpoint())
                .map(str::to_string),
        ),
    }
}

#[cfg(test)]
mod tests {
    use endpoint_catalog::{EndpointConfig, EndpointsConfig};
    use pretty_assertions::assert_eq;

    use super::*;

    fn bound(endpoint: &str) -> Conversation {
        Conversation {
            conversation_id: Some("abc".into()),
            title: Some("Earlier".into()),
            endpoint: Some(endpoint.into()),
            endpoint_type: Some("custom".into()),
            model: Some("mistral-large".into()),
            icon_url: Some("https://example.com/a.png".into()),
        }
    }

    #[test]
    fn new_conversation_keeps_endpoint_and_drops_icon() {
        let mut state = ChatNavState::default();
        reduce_chat_nav(
            &mut state,
            ChatNavAction::SetConversation {
                index: 1,
                conversation: Some(bound("Mistral")),
            },
        );

        reduce_chat_nav(&mut state, ChatNavAction::NewConversation { index: 1 });

        let fresh = state.conversation(1).expect("slot 1");
        assert!(fresh.is_new());
        assert_eq!(fresh.endpoint.as_deref(), Some("Mistral"));
        assert_eq!(fresh.endpoint_type.as_deref(), Some("custom"));
        assert_eq!(fresh.model.as_deref(), Some("mistral-large"));
        assert_eq!(fresh.icon_url, None);
    }

    #[test]
    fn new_conversation_only_touches_its_own_slot() {
        let mut state = ChatNavState::default();
        state.conversations.insert(0, bound("openAI"));

        reduce_chat_nav(&mut state, ChatNavAction::NewConversation { index: 2 });

        assert_eq!(state.conversation(0), Some(&bound("openAI")));
        assert!(state.conversation(2).expect("slot 2").is_new());
    }

    #[test]
    fn new_conversation_without_history_uses_default_endpoint() {
        let mut state = ChatNavState::default();
        let config = EndpointsConfig::default()
            .with(
                "anthropic",
                EndpointConfig {
                    order: Some(1),
                    ..EndpointConfig::default()
                },
            )
            .with(
                "google",
                EndpointConfig {
                    order: Some(0),
                    ..EndpointConfig::default()
                },
            );
        reduce_chat_nav(
            &mut state,
            ChatNavAction::SetEndpoints(EndpointsQuery::Ready(config)),
        );

        reduce_chat_nav(&mut state, ChatNavAction::NewConversation { index: 0 });

        assert_eq!(
            state.conversation(0).and_then(|c| c.endpoint.as_deref()),
            Some("google")
        );
    }

    #[test]
    fn new_conversation_while_loading_has_no_endpoint() {
        let mut state = ChatNavState::default();
        reduce_chat_nav(&mut state, ChatNavAction::NewConversation { index: 0 });
        assert_eq!(state.conversation(0).map(Conversation::endpoint_or_empty), Some(""));
    }

    #[test]
    fn high_index_slot_resets_and_leaves_others_alone() {
        let mut state = ChatNavState::default();
        state.conversations.insert(0, bound("openAI"));
        state.conversations.insert(42, bound("Mistral"));

        reduce_chat_nav(&mut state, ChatNavAction::NewConversation { index: 42 });

        let fresh = state.conversation(42).expect("slot 42");
        assert!(fresh.is_new());
        assert_eq!(fresh.endpoint.as_deref(), Some("Mistral"));
        assert_eq!(fresh.icon_url, None);
        assert_eq!(state.conversation(0), Some(&bound("openAI")));
        assert_eq!(state.conversations.len(), 2);
    }

    #[test]
    fn clearing_a_slot_removes_it() {
        let mut state = ChatNavState::default();
        state.conversations.insert(3, bound("openAI"));

        reduce_chat_nav(
            &mut state,
            ChatNavAction::SetConversation {
                index: 3,
                conversation: None,
            },
        );

        assert_eq!(state.conversation(3), None);
    }

    #[test]
    fn nav_toggle_and_search_updates() {
        let mut state = ChatNavState::default();

        reduce_chat_nav(&mut state, ChatNavAction::ToggleNav);
        assert!(state.nav_open);
        reduce_chat_nav(&mut state, ChatNavAction::SetNavOpen { open: false });
        assert!(!state.nav_open);

        reduce_chat_nav(
            &mut state,
            ChatNavAction::SetSearchQuery {
                query: "invoices".into(),
            },
        );
        assert!(state.is_searching());
    }
}
