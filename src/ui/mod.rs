//! Server-rendered UI.
//!
//! # Structure
//!
//! - [`shell`]: the presentation shell and its mount lifecycle
//! - [`chat_list`]: chat list view
//! - [`message_entry`]: message entry widget
//! - [`html`]: document shell and escaping

pub mod chat_list;
pub mod html;
pub mod message_entry;
pub mod shell;

pub use chat_list::ChatListView;
pub use message_entry::MessageEntry;
pub use shell::{MountedShell, PresentationShell};
