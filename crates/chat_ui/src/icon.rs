//! Centralized icon catalog for chat surfaces.
//!
//! Components refer to icons by semantic [`IconName`] and render them through [`Icon`], so no
//! view embeds raw SVG. Interface glyphs are outline icons drawn with a 2px stroke; provider
//! marks are filled silhouettes on the same 24px grid.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers.
pub enum IconName {
    /// Magnifier shown while a conversation search is active.
    Search,
    /// Pen-on-square "compose" glyph.
    NewChat,
    /// Sidebar panel toggle.
    Sidebar,
    /// OpenAI mark.
    OpenAi,
    /// Azure mark.
    Azure,
    /// Anthropic mark.
    Anthropic,
    /// Google mark.
    Google,
    /// Assistant (sparkle) mark.
    Assistant,
    /// Agents (robot) mark.
    Agent,
    /// AWS Bedrock mark.
    Bedrock,
    /// Plugin (puzzle) mark.
    Plugin,
    /// Browser-session chat mark.
    ChatBubble,
    /// Generic mark for custom endpoints.
    CustomMinimal,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::NewChat => "new-chat",
            Self::Sidebar => "sidebar",
            Self::OpenAi => "openai",
            Self::Azure => "azure",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Assistant => "assistant",
            Self::Agent => "agent",
            Self::Bedrock => "bedrock",
            Self::Plugin => "plugin",
            Self::ChatBubble => "chat-bubble",
            Self::CustomMinimal => "custom-minimal",
        }
    }

    /// Outline glyphs are stroked; provider marks are filled.
    pub const fn is_outline(self) -> bool {
        matches!(
            self,
            Self::Search | Self::NewChat | Self::Sidebar | Self::CustomMinimal
        )
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Search => r#"<circle cx="11" cy="11" r="7"/><path d="M20 20l-4.2-4.2"/>"#,
            Self::NewChat => {
                r#"<path d="M12 4H6a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-6"/><path d="M17.5 3.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4 8.5-8.5Z"/>"#
            }
            Self::Sidebar => r#"<rect x="3" y="4" width="18" height="16" rx="2"/><path d="M9 4v16"/>"#,
            Self::OpenAi => {
                r#"<path d="M12 2.5 20.2 7.25v9.5L12 21.5l-8.2-4.75v-9.5L12 2.5Zm0 2.3L5.8 8.4v7.2l6.2 3.6 6.2-3.6V8.4L12 4.8Zm0 3.2 3.5 2v4l-3.5 2-3.5-2v-4l3.5-2Z"/>"#
            }
            Self::Azure => {
                r#"<path d="M9.6 3h5.1L8.2 20.5H3.4L9.6 3Zm6.3 5.4 4.7 12.1H10.9l3.6-2.2h3.1l-2.8-7.3 1.1-2.6Z"/>"#
            }
            Self::Anthropic => {
                r#"<path d="M13.9 4h3.3L23 20h-3.3L13.9 4ZM7.1 4h3.4L16.3 20h-3.3l-1.2-3.4H5.7L4.5 20H1.2L7.1 4Zm-.3 9.7h4L8.8 8.1l-2 5.6Z"/>"#
            }
            Self::Google => {
                r#"<path d="M12 10.2v3.7h5.2c-.5 2.4-2.6 4.1-5.2 4.1a6 6 0 1 1 3.9-10.6l2.7-2.7A9.8 9.8 0 0 0 12 2.2a9.8 9.8 0 1 0 0 19.6c5.4 0 9.5-3.8 9.5-9.6 0-.7-.1-1.4-.2-2H12Z"/>"#
            }
            Self::Assistant => {
                r#"<path d="M12 2l2.2 6.3L20.5 10l-6.3 2.2L12 18.5l-2.2-6.3L3.5 10l6.3-1.7L12 2Zm6.5 12.5.9 2.6 2.6.9-2.6.9-.9 2.6-.9-2.6-2.6-.9 2.6-.9.9-2.6Z"/>"#
            }
            Self::Agent => {
                r#"<path d="M11 2h2v3h4a3 3 0 0 1 3 3v9a3 3 0 0 1-3 3H7a3 3 0 0 1-3-3V8a3 3 0 0 1 3-3h4V2ZM7 7a1 1 0 0 0-1 1v9a1 1 0 0 0 1 1h10a1 1 0 0 0 1-1V8a1 1 0 0 0-1-1H7Zm2 3.5a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3Zm6 0a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3ZM9 15h6v1.5H9V15Z"/>"#
            }
            Self::Bedrock => {
                r#"<path d="M12 2 21 7v10l-9 5-9-5V7l9-5Zm0 2.3L5 8.2v7.6l7 3.9 7-3.9V8.2l-7-3.9Zm-4 5.2 4-2.2 4 2.2v5L12 16.7l-4-2.2v-5Z"/>"#
            }
            Self::Plugin => {
                r#"<path d="M10 3a2 2 0 0 1 4 0v2h4a1 1 0 0 1 1 1v4h-2a2 2 0 1 0 0 4h2v4a1 1 0 0 1-1 1h-4v-2a2 2 0 1 0-4 0v2H6a1 1 0 0 1-1-1v-4H3a2 2 0 1 1 0-4h2V6a1 1 0 0 1 1-1h4V3Z"/>"#
            }
            Self::ChatBubble => {
                r#"<path d="M4 4h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H9l-5 4v-4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Zm3 5v2h10V9H7Zm0 4v2h6v-2H7Z"/>"#
            }
            Self::CustomMinimal => {
                r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 16px icon for dense rows.
    Sm,
    /// 18px icon used by nav actions.
    #[default]
    Md,
    /// 24px icon used by avatar badges.
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 18,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders an icon from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Md)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();
    let (fill, stroke) = if icon.is_outline() {
        ("none", "currentColor")
    } else {
        ("currentColor", "none")
    };

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill=fill
            stroke=stroke
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [IconName; 13] = [
        IconName::Search,
        IconName::NewChat,
        IconName::Sidebar,
        IconName::OpenAi,
        IconName::Azure,
        IconName::Anthropic,
        IconName::Google,
        IconName::Assistant,
        IconName::Agent,
        IconName::Bedrock,
        IconName::Plugin,
        IconName::ChatBubble,
        IconName::CustomMinimal,
    ];

    #[test]
    fn tokens_are_unique() {
        let mut tokens: Vec<_> = ALL.iter().map(|icon| icon.token()).collect();
        tokens.sort_unstable();
        tokens.dedup();
        assert_eq!(tokens.len(), ALL.len());
    }

    #[test]
    fn every_icon_has_svg_markup() {
        for icon in ALL {
            let body = icon.svg_body();
            assert!(body.starts_with('<') && body.ends_with("/>"), "{icon:?}");
        }
    }
}
