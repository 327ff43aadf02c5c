use std::rc::Rc;

use chat_host_web::HttpEndpointsSource;
use chat_nav::{
    use_chat_nav, ChatNavAction, ChatNavConfig, ChatNavProvider, EndpointsSource, NewChat,
    StaticEndpointsSource,
};
use chat_ui::{IconButton, IconName, IconSize};
use endpoint_catalog::NEW_CONVERSATION_ID;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::host_config::load_host_config;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let config = load_host_config();
    let endpoints_source = endpoints_source_for(&config);

    view! {
        <Title text="Chat" />
        <Meta name="description" content="Chat client navigation shell." />

        <Router>
            <ChatNavProvider endpoints_source=endpoints_source config=config>
                <ChatApp />
            </ChatNavProvider>
        </Router>
    }
}

/// Serves endpoints embedded in the host config, or fetches them from the same origin.
fn endpoints_source_for(config: &ChatNavConfig) -> Rc<dyn EndpointsSource> {
    match &config.endpoints {
        Some(endpoints) => Rc::new(StaticEndpointsSource::new(endpoints.clone())),
        None => Rc::new(HttpEndpointsSource::same_origin()),
    }
}

#[component]
pub fn ChatApp() -> impl IntoView {
    let runtime = use_chat_nav();
    let lang = runtime.localizer.locale().tag();
    let nav_open = create_memo(move |_| runtime.state.with(|state| state.nav_open));
    let open_label = runtime.localize("com_nav_open_sidebar");

    view! {
        <Html lang=lang />
        <div class="chat-root" data-nav-open=move || nav_open.get().to_string()>
            <SideNav />
            <main class="chat-main">
                <IconButton
                    icon=IconName::Sidebar
                    size=IconSize::Md
                    layout_class="chat-nav-open"
                    aria_label=open_label
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(ChatNavAction::ToggleNav)
                    })
                />
                <Routes>
                    <Route path="" view=|| view! { <Redirect path="/c/new" /> } />
                    <Route path="/c/:conversation_id" view=ConversationRoute />
                </Routes>
            </main>
        </div>
    }
}

#[component]
fn SideNav() -> impl IntoView {
    let runtime = use_chat_nav();
    let close_nav = Callback::new(move |()| {
        runtime.dispatch_action(ChatNavAction::SetNavOpen { open: false })
    });

    view! {
        <nav class="chat-nav" aria-label="Chat history">
            <NewChat
                toggle_nav=close_nav
                sub_headers=Box::new(|| Fragment::new(vec![view! { <SearchBar /> }.into_view()]))
            />
        </nav>
    }
}

#[component]
fn SearchBar() -> impl IntoView {
    let runtime = use_chat_nav();
    let query = runtime.search_query();
    let placeholder = runtime.localize("com_nav_search_placeholder");

    view! {
        <div class="chat-nav-search">
            <input
                type="search"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| {
                    runtime.dispatch_action(ChatNavAction::SetSearchQuery {
                        query: event_target_value(&ev),
                    })
                }
            />
        </div>
    }
}

#[component]
fn ConversationRoute() -> impl IntoView {
    let runtime = use_chat_nav();
    let params = use_params_map();
    let conversation_id = move || {
        params
            .with(|map| map.get("conversation_id").cloned())
            .unwrap_or_else(|| NEW_CONVERSATION_ID.to_string())
    };
    let new_chat_label = runtime.localize("com_ui_new_chat");
    let conversation_label = runtime.localize("com_ui_conversation");

    view! {
        <section class="chat-conversation">
            <h1>
                {move || {
                    if conversation_id() == NEW_CONVERSATION_ID {
                        new_chat_label.clone()
                    } else {
                        format!("{conversation_label} {}", conversation_id())
                    }
                }}
            </h1>
        </section>
    }
}
