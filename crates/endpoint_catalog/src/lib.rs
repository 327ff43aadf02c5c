//! Endpoint catalog types shared by the chat navigation runtime and its host adapters.
//!
//! The crate owns the endpoints-configuration model delivered by the chat server, the closed
//! set of built-in provider endpoints, conversation records as the navigation sees them, and
//! the pure lookups used to decide which icon a conversation should show. Nothing here depends
//! on Leptos so the resolution rules can be exercised without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod conversation;
mod endpoint;
mod error;
mod icon_key;
mod query;

pub use config::{endpoint_field, EndpointConfig, EndpointField, EndpointsConfig};
pub use conversation::{Conversation, NEW_CONVERSATION_ID};
pub use endpoint::{KnownEndpoint, ModelEndpoint};
pub use error::CatalogError;
pub use icon_key::{icon_endpoint, icon_key, IconKey};
pub use query::EndpointsQuery;
