//! Side-navigation runtime for the chat client.
//!
//! The crate owns the navigation store (search query, per-index conversation slots, and the
//! endpoints query), the provider that wires it into Leptos context, and the "New chat" control
//! built on [`chat_ui`] primitives. Icon resolution and click handling are plain functions so
//! they can be tested without a DOM.

pub mod click;
pub mod components;
pub mod config;
pub mod host;
pub mod i18n;
pub mod icon_resolver;
pub mod icons;
pub mod model;
pub mod reducer;
pub mod runtime_context;

pub use click::{handle_new_chat_click, ClickInput, NewChatEffects};
pub use components::{EndpointGlyph, NewChat, NewChatButtonIcon};
pub use config::ChatNavConfig;
pub use host::{EndpointsSource, StaticEndpointsSource, UnavailableEndpointsSource};
pub use i18n::{Locale, Localizer};
pub use icon_resolver::{resolve_new_chat_icon, IconGlyph, NamedIcon, ResolvedIcon};
pub use model::ChatNavState;
pub use reducer::{reduce_chat_nav, ChatNavAction};
pub use runtime_context::{use_chat_nav, ChatNavContext, ChatNavProvider};
