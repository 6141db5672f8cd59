//! Chat list view.

use super::html::escape;
use crate::error::RetrievalError;
use crate::types::ChatList;

/// Outcome of the shell's single retrieval, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatListView {
    /// Retrieval succeeded; records in server order.
    Loaded(ChatList),
    /// Retrieval failed; holds the message shown to the user.
    Failed(String),
}

impl ChatListView {
    /// Map a retrieval outcome to the view state.
    pub fn from_result(result: Result<ChatList, RetrievalError>) -> Self {
        match result {
            Ok(list) => Self::Loaded(list),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Whether the retrieval failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Render as a `<section>` fragment.
    pub fn render(&self) -> String {
        let body = match self {
            Self::Loaded(list) if list.is_empty() => {
                r#"<p class="chat-list-empty text-sm text-textMuted">No chats yet.</p>"#.to_string()
            }
            Self::Loaded(list) => {
                // Records are opaque; show each one as compact JSON.
                let items: String = list
                    .iter()
                    .map(|record| {
                        format!(
                            "        <li class=\"chat-record\"><code>{}</code></li>\n",
                            escape(&record.as_value().to_string())
                        )
                    })
                    .collect();
                format!("<ul class=\"chat-list-items space-y-2\">\n{items}    </ul>")
            }
            Self::Failed(message) => format!(
                r#"<div class="chat-list-error rounded-xl p-4 text-error" role="alert">Could not load chats: {}</div>"#,
                escape(message)
            ),
        };

        format!(
            "<section class=\"chat-list flex-1 overflow-y-auto\" aria-label=\"Chats\">\n    {body}\n</section>"
        )
    }
}
