//! "New chat" control for the side navigation.

use chat_ui::{
    Icon, IconBadge, IconBadgeTone, IconButton, IconName, IconSize, NavHeader, NavItem,
    RemoteImage, Tooltip, TooltipSide,
};
use endpoint_catalog::Conversation;
use leptos::ev::MouseEvent;
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions};

use crate::{
    click::{handle_new_chat_click, ClickInput, NewChatEffects},
    icon_resolver::{resolve_new_chat_icon, IconGlyph, ResolvedIcon},
    icons::endpoint_icon_name,
    reducer::ChatNavAction,
    runtime_context::{use_chat_nav, ChatNavContext},
};

const NEW_CHAT_TEST_ID: &str = "nav-new-chat-button";
const TOOLTIP_SIDE_OFFSET_PX: i32 = 20;

struct DomNewChatEffects<'a, N> {
    event: &'a MouseEvent,
    runtime: ChatNavContext,
    navigate: &'a N,
    toggle_nav: Callback<()>,
}

impl<N> NewChatEffects for DomNewChatEffects<'_, N>
where
    N: Fn(&str, NavigateOptions),
{
    fn prevent_default(&mut self) {
        self.event.prevent_default();
    }

    fn new_conversation(&mut self, index: usize) {
        self.runtime
            .dispatch_action(ChatNavAction::NewConversation { index });
    }

    fn navigate(&mut self, route: &str) {
        (self.navigate)(route, NavigateOptions::default());
    }

    fn close_nav(&mut self) {
        self.toggle_nav.call(());
    }
}

#[component]
/// "New chat" row: contextual icon, localized label, and a tooltip-wrapped compose action.
///
/// Must be mounted under a router and [`crate::ChatNavProvider`]. Pages with more than one
/// control pass a distinct `index` to each so they reset independent conversation slots.
pub fn NewChat(
    /// Conversation slot this control resets.
    #[prop(default = 0)]
    index: usize,
    /// Collapses the side navigation after a new chat starts.
    toggle_nav: Callback<()>,
    /// Extra header content rendered beneath the row.
    #[prop(optional)]
    sub_headers: Option<Children>,
) -> impl IntoView {
    let runtime = use_chat_nav();
    let navigate = use_navigate();
    let (route, delay_ms) = runtime
        .config
        .with_value(|config| (config.new_chat_route.clone(), config.tooltip_delay_ms));
    let label = runtime.localize("com_ui_new_chat");
    let conversation = runtime.conversation(index);

    let on_click = Callback::new(move |ev: MouseEvent| {
        let mut effects = DomNewChatEffects {
            event: &ev,
            runtime,
            navigate: &navigate,
            toggle_nav,
        };
        handle_new_chat_click(
            ClickInput::from_mouse_event(&ev),
            index,
            &route,
            &mut effects,
        );
    });

    view! {
        <NavHeader layout_class="nav-new-chat">
            <NavItem
                href="/"
                test_id=NEW_CHAT_TEST_ID
                layout_class="nav-new-chat-button"
                on_click=on_click
            >
                <NewChatButtonIcon conversation=conversation.into() />
                <div class="nav-new-chat-label">{label.clone()}</div>
                <div class="nav-new-chat-actions">
                    <Tooltip
                        content=label.clone()
                        side=TooltipSide::Right
                        side_offset=TOOLTIP_SIDE_OFFSET_PX
                        delay_ms=delay_ms
                    >
                        <IconButton
                            icon=IconName::NewChat
                            size=IconSize::Md
                            aria_label=label.clone()
                            ui_slot="new-chat-action"
                        />
                    </Tooltip>
                </div>
            </NavItem>
            {sub_headers.map(|sub_headers| sub_headers())}
        </NavHeader>
    }
}

#[component]
/// Icon for the conversation bound to a "New chat" control.
pub fn NewChatButtonIcon(conversation: Signal<Option<Conversation>>) -> impl IntoView {
    let runtime = use_chat_nav();
    let resolved = create_memo(move |_| {
        conversation.with(|conversation| {
            runtime.state.with(|state| {
                resolve_new_chat_icon(
                    conversation.as_ref(),
                    &state.search_query,
                    &state.endpoints,
                )
            })
        })
    });
    let endpoints_loading =
        create_memo(move |_| runtime.state.with(|state| state.endpoints.is_loading()));

    let icon = move || match resolved.get() {
        ResolvedIcon::Search => view! {
            <IconBadge layout_class="nav-new-chat-search" tone=IconBadgeTone::Light>
                <Icon icon=IconName::Search size=IconSize::Md />
            </IconBadge>
        }
        .into_view(),
        ResolvedIcon::Image { url, alt } => view! {
            <div class="nav-new-chat-icon">
                <RemoteImage src=url alt=alt size=IconSize::Lg layout_class="nav-convo-icon" />
            </div>
        }
        .into_view(),
        ResolvedIcon::Named(named) => view! {
            <div class="nav-new-chat-icon" data-icon-key=named.key.token()>
                <IconBadge tone=IconBadgeTone::Light>
                    <EndpointGlyph glyph=named.glyph() />
                </IconBadge>
            </div>
        }
        .into_view(),
        ResolvedIcon::None => view! {
            <div class="nav-new-chat-icon">
                <IconBadge tone=IconBadgeTone::Light>{()}</IconBadge>
            </div>
        }
        .into_view(),
    };

    view! {
        <span
            class="nav-new-chat-icon-slot"
            aria-busy=move || endpoints_loading.get().to_string()
        >
            {icon}
        </span>
    }
}

#[component]
/// Renders the artwork chosen for an endpoint icon.
pub fn EndpointGlyph(glyph: IconGlyph) -> impl IntoView {
    match glyph {
        IconGlyph::Builtin(endpoint) => view! {
            <Icon icon=endpoint_icon_name(endpoint) size=IconSize::Sm />
        }
        .into_view(),
        IconGlyph::Image { src, alt } => view! {
            <RemoteImage src=src alt=alt size=IconSize::Sm />
        }
        .into_view(),
        IconGlyph::CustomMinimal => view! {
            <Icon icon=IconName::CustomMinimal size=IconSize::Sm />
        }
        .into_view(),
    }
}
