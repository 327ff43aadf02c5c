//! Click handling for the "New chat" link.
//!
//! Only an unmodified primary click starts a new chat in place. Ctrl/meta clicks and other
//! buttons fall through to the browser so "open in new tab" keeps working.

use web_sys::MouseEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Mouse state relevant to the new-chat decision.
pub struct ClickInput {
    /// `MouseEvent.button`; `0` is the primary button.
    pub button: i16,
    /// Ctrl was held.
    pub ctrl: bool,
    /// Meta (Cmd / Windows key) was held.
    pub meta: bool,
}

impl ClickInput {
    /// `MouseEvent.button` value of the primary button.
    pub const PRIMARY_BUTTON: i16 = 0;

    /// Captures the relevant fields of a DOM click.
    pub fn from_mouse_event(ev: &MouseEvent) -> Self {
        Self {
            button: ev.button(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
        }
    }

    /// Returns whether this click should start a new chat in place.
    pub fn starts_new_chat(self) -> bool {
        self.button == Self::PRIMARY_BUTTON && !(self.ctrl || self.meta)
    }
}

/// Side effects of starting a new chat.
pub trait NewChatEffects {
    /// Suppresses the link's native navigation.
    fn prevent_default(&mut self);
    /// Resets the conversation bound to control `index`.
    fn new_conversation(&mut self, index: usize);
    /// Navigates client-side to `route`.
    fn navigate(&mut self, route: &str);
    /// Collapses the side navigation.
    fn close_nav(&mut self);
}

/// Runs the new-chat effects for `input`, in order, when it is an unmodified primary click.
///
/// Returns whether anything ran.
pub fn handle_new_chat_click(
    input: ClickInput,
    index: usize,
    route: &str,
    effects: &mut impl NewChatEffects,
) -> bool {
    if !input.starts_new_chat() {
        return false;
    }
    effects.prevent_default();
    effects.new_conversation(index);
    effects.navigate(route);
    effects.close_nav();
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Default)]
    struct Recorded {
        calls: Vec<String>,
    }

    impl NewChatEffects for Recorded {
        fn prevent_default(&mut self) {
            self.calls.push("prevent_default".into());
        }

        fn new_conversation(&mut self, index: usize) {
            self.calls.push(format!("new_conversation({index})"));
        }

        fn navigate(&mut self, route: &str) {
            self.calls.push(format!("navigate({route})"));
        }

        fn close_nav(&mut self) {
            self.calls.push("close_nav".into());
        }
    }

    fn primary() -> ClickInput {
        ClickInput::default()
    }

    #[test]
    fn plain_primary_click_runs_each_effect_once_in_order() {
        let mut effects = Recorded::default();

        assert!(handle_new_chat_click(primary(), 2, "/c/new", &mut effects));

        assert_eq!(
            effects.calls,
            vec![
                "prevent_default".to_string(),
                "new_conversation(2)".to_string(),
                "navigate(/c/new)".to_string(),
                "close_nav".to_string(),
            ]
        );
    }

    #[test]
    fn modified_clicks_are_left_to_the_browser() {
        for input in [
            ClickInput {
                ctrl: true,
                ..primary()
            },
            ClickInput {
                meta: true,
                ..primary()
            },
            ClickInput {
                ctrl: true,
                meta: true,
                ..primary()
            },
        ] {
            let mut effects = Recorded::default();
            assert!(!handle_new_chat_click(input, 0, "/c/new", &mut effects));
            assert!(effects.calls.is_empty(), "{input:?}");
        }
    }

    #[test]
    fn non_primary_buttons_are_ignored() {
        for button in [1, 2, 3, 4] {
            let mut effects = Recorded::default();
            let input = ClickInput {
                button,
                ..primary()
            };
            assert!(!handle_new_chat_click(input, 0, "/c/new", &mut effects));
            assert!(effects.calls.is_empty());
        }
    }
}
