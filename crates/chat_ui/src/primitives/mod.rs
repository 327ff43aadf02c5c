//! Shared navigation, overlay, data-display, and control primitives.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod navigation;
mod overlays;

pub use controls::IconButton;
pub use data_display::{IconBadge, RemoteImage};
pub use navigation::{NavHeader, NavItem};
pub use overlays::Tooltip;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Side of the trigger a tooltip is placed on.
pub enum TooltipSide {
    /// Above the trigger.
    #[default]
    Top,
    /// Right of the trigger.
    Right,
    /// Below the trigger.
    Bottom,
    /// Left of the trigger.
    Left,
}

impl TooltipSide {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Background treatment for round icon badges.
pub enum IconBadgeTone {
    /// White disc with dark glyph in both color schemes.
    #[default]
    Light,
    /// Transparent disc that inherits the surrounding text color.
    Plain,
}

impl IconBadgeTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Plain => "plain",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
