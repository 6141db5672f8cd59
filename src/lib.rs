//! Chat Shell
//!
//! A minimal chat web client: a server-rendered shell that lists the chats
//! held by a backend and offers a message box.
//!
//! # Architecture
//!
//! - **Retriever**: one async capability, "fetch the chat list", with a
//!   network-backed [`Client`] and an in-memory [`StaticRetriever`]
//! - **Shell**: [`PresentationShell`] receives a retriever at construction,
//!   retrieves once per mount and renders the result
//! - **Server**: Axum router serving the rendered shell
//!
//! # Modules
//!
//! - [`client`]: HTTP client for the backend
//! - [`retriever`]: the [`ChatListRetriever`] trait and its implementations
//! - [`types`]: chat records and prompt wire types
//! - [`ui`]: shell, chat list view and message entry widget
//! - [`config`]: layered configuration and CLI

pub mod client;
pub mod config;
pub mod error;
pub mod retriever;
pub mod server;
pub mod types;
pub mod ui;

use std::sync::Arc;

pub use client::Client;
pub use error::{Result, RetrievalError};
pub use retriever::{ChatListRetriever, StaticRetriever};
pub use types::{ChatList, ChatRecord};
pub use ui::{MessageEntry, PresentationShell};

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Shell mounted on every page request.
    pub shell: PresentationShell,
    /// Retriever behind the shell, also used by the JSON route.
    pub retriever: Arc<dyn ChatListRetriever>,
}
