//! Provider and context wiring for the navigation store.
//!
//! [`ChatNavProvider`] owns the reducer container and the endpoints fetch. Views read state and
//! dispatch [`ChatNavAction`] values through [`ChatNavContext`].
#![allow(clippy::clone_on_copy)]

use std::rc::Rc;

use endpoint_catalog::{Conversation, EndpointsQuery};
use leptos::*;

use crate::{
    config::ChatNavConfig,
    host::EndpointsSource,
    i18n::{Locale, Localizer},
    model::ChatNavState,
    reducer::{reduce_chat_nav, ChatNavAction},
};

#[derive(Clone, Copy)]
/// Leptos context for reading navigation state and dispatching [`ChatNavAction`] values.
pub struct ChatNavContext {
    /// Reactive navigation state.
    pub state: RwSignal<ChatNavState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<ChatNavAction>,
    /// Settings the provider was mounted with.
    pub config: StoredValue<ChatNavConfig>,
    /// Message lookup for the configured locale.
    pub localizer: Localizer,
}

impl ChatNavContext {
    /// Dispatches a reducer action through the context callback.
    pub fn dispatch_action(&self, action: ChatNavAction) {
        self.dispatch.call(action);
    }

    /// Localized text for `key`.
    pub fn localize(&self, key: &str) -> String {
        self.localizer.localize(key).to_string()
    }

    /// Reactive search text.
    pub fn search_query(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|state| state.search_query.clone()))
    }

    /// Reactive conversation bound to control `index`.
    pub fn conversation(&self, index: usize) -> Memo<Option<Conversation>> {
        let state = self.state;
        create_memo(move |_| state.with(|state| state.conversation(index).cloned()))
    }
}

#[component]
/// Provides [`ChatNavContext`] to descendant components and starts the endpoints fetch.
pub fn ChatNavProvider(
    /// Injected endpoints backend assembled by the entry layer.
    endpoints_source: Rc<dyn EndpointsSource>,
    #[prop(optional)] config: Option<ChatNavConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let localizer = Localizer::new(Locale::from_tag(&config.locale));
    let endpoints_path = config.endpoints_path.clone();
    let state = create_rw_signal(ChatNavState::default());

    let dispatch = Callback::new(move |action: ChatNavAction| {
        let mut next = state.get_untracked();
        let previous = next.clone();

        reduce_chat_nav(&mut next, action);
        if next != previous {
            state.set(next);
        }
    });

    let endpoints = create_local_resource(
        || (),
        move |_| {
            let source = endpoints_source.clone();
            let path = endpoints_path.clone();
            async move {
                let result = source.fetch_endpoints(&path).await;
                if let Err(err) = &result {
                    logging::warn!("endpoints config fetch failed: {err}");
                }
                EndpointsQuery::from(result)
            }
        },
    );

    create_effect(move |_| {
        if let Some(query) = endpoints.get() {
            dispatch.call(ChatNavAction::SetEndpoints(query));
        }
    });

    let runtime = ChatNavContext {
        state,
        dispatch,
        config: store_value(config),
        localizer,
    };

    provide_context(runtime.clone());

    children().into_view()
}

/// Returns the current [`ChatNavContext`].
///
/// # Panics
///
/// Panics if called outside [`ChatNavProvider`].
pub fn use_chat_nav() -> ChatNavContext {
    use_context::<ChatNavContext>().expect("ChatNavContext not provided")
}
