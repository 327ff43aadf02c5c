//! Message catalogs for navigation labels.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Locales with a bundled catalog.
pub enum Locale {
    /// English.
    #[default]
    En,
    /// German.
    De,
}

impl Locale {
    /// Resolves a BCP-47 tag by its primary language subtag. Unsupported tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "de" => Self::De,
            _ => Self::En,
        }
    }

    /// Language tag for the document `lang` attribute.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Looks up UI strings by message key.
pub struct Localizer {
    locale: Locale,
}

impl Localizer {
    /// Localizer for `locale`.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Active locale.
    pub fn locale(self) -> Locale {
        self.locale
    }

    /// Text for `key`. Keys missing from the active catalog use English; unknown keys echo back.
    pub fn localize<'a>(self, key: &'a str) -> &'a str {
        lookup(self.locale, key)
            .or_else(|| lookup(Locale::En, key))
            .unwrap_or(key)
    }
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    let text = match (locale, key) {
        (Locale::En, "com_ui_new_chat") => "New chat",
        (Locale::En, "com_nav_search_placeholder") => "Search messages",
        (Locale::En, "com_nav_close_sidebar") => "Close sidebar",
        (Locale::En, "com_nav_open_sidebar") => "Open sidebar",
        (Locale::En, "com_ui_conversation") => "Conversation",
        (Locale::De, "com_ui_new_chat") => "Neuer Chat",
        (Locale::De, "com_nav_search_placeholder") => "Nachrichten durchsuchen",
        (Locale::De, "com_nav_close_sidebar") => "Seitenleiste schließen",
        (Locale::De, "com_nav_open_sidebar") => "Seitenleiste öffnen",
        _ => return None,
    };
    Some(text)
}
