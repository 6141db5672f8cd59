//! The "retrieve chat list" capability.
//!
//! [`ChatListRetriever`] is the seam the shell depends on. [`Client`] is the
//! network-backed implementation; [`StaticRetriever`] answers from memory.

use async_trait::async_trait;

use crate::client::Client;
use crate::error::{Result, RetrievalError};
use crate::types::ChatList;

/// Something that can produce the current chat list.
///
/// Each call performs one retrieval and yields a fresh list; implementations
/// must not cache or merge results across calls.
#[async_trait]
pub trait ChatListRetriever: Send + Sync + std::fmt::Debug {
    /// Retrieve the chat list once.
    async fn fetch_chat_list(&self) -> Result<ChatList>;
}

#[async_trait]
impl ChatListRetriever for Client {
    async fn fetch_chat_list(&self) -> Result<ChatList> {
        Client::fetch_chat_list(self).await
    }
}

/// In-memory retriever returning a fixed outcome.
#[derive(Debug, Clone)]
pub enum StaticRetriever {
    /// Always yields this list.
    Chats(ChatList),
    /// Always fails with an API error of this status and message.
    Failure { status: u16, message: String },
}

impl StaticRetriever {
    /// Retriever that always yields `list`.
    pub fn chats(list: ChatList) -> Self {
        Self::Chats(list)
    }

    /// Retriever that always fails with `status` and `message`.
    pub fn failure(status: u16, message: impl Into<String>) -> Self {
        Self::Failure {
            status,
            message: message.into(),
        }
    }
}

#[async_trait]
impl ChatListRetriever for StaticRetriever {
    async fn fetch_chat_list(&self) -> Result<ChatList> {
        match self {
            Self::Chats(list) => Ok(list.clone()),
            Self::Failure { status, message } => Err(RetrievalError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
