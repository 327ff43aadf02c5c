use std::collections::BTreeMap;

use endpoint_catalog::{Conversation, EndpointsQuery};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Navigation state shared by every control under one provider.
pub struct ChatNavState {
    /// Active conversation search. Non-empty means search mode.
    pub search_query: String,
    /// Conversation currently bound to each control index. Indices are unbounded.
    pub conversations: BTreeMap<usize, Conversation>,
    /// Latest endpoints-configuration fetch state.
    pub endpoints: EndpointsQuery,
    /// Whether the side navigation is expanded.
    pub nav_open: bool,
}

impl ChatNavState {
    /// Conversation bound to control `index`.
    pub fn conversation(&self, index: usize) -> Option<&Conversation> {
        self.conversations.get(&index)
    }

    /// Returns whether a search is active.
    pub fn is_searching(&self) -> bool {
        !self.search_query.is_empty()
    }
}
