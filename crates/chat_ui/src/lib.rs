//! Shared UI primitive library for the chat navigation surfaces.
//!
//! The crate owns reusable Leptos primitives, a centralized icon API, and the stable
//! `data-ui-*` DOM contract consumed by the chat stylesheet. Feature crates compose these
//! primitives instead of emitting ad hoc markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    IconBadge, IconBadgeTone, IconButton, NavHeader, NavItem, RemoteImage, Tooltip, TooltipSide,
};

