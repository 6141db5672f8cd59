//! Presentation shell: the root container of the page.

use std::sync::Arc;

use tracing::debug;

use super::chat_list::ChatListView;
use super::html::html_shell;
use super::message_entry::MessageEntry;
use crate::retriever::ChatListRetriever;

/// Root container composing the chat list and the message entry.
///
/// The retriever is handed in at construction; nothing is looked up globally.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use chat_shell::{Client, PresentationShell};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("http://localhost:8000/health")?;
/// let shell = PresentationShell::new(Arc::new(client), "Chats");
/// let page = shell.mount().await.render();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PresentationShell {
    retriever: Arc<dyn ChatListRetriever>,
    title: String,
}

impl PresentationShell {
    /// Create a shell around `retriever`, titled `title`.
    pub fn new(retriever: Arc<dyn ChatListRetriever>, title: impl Into<String>) -> Self {
        Self {
            retriever,
            title: title.into(),
        }
    }

    /// Mount the shell: retrieve the chat list exactly once.
    ///
    /// A failed retrieval does not fail the mount; it becomes a
    /// [`ChatListView::Failed`] that is rendered to the user.
    pub async fn mount(&self) -> MountedShell {
        let chat_list = ChatListView::from_result(self.retriever.fetch_chat_list().await);

        match &chat_list {
            ChatListView::Loaded(list) => {
                debug!(name: "shell.mounted", chats = list.len(), "Shell mounted");
            }
            ChatListView::Failed(message) => {
                debug!(name: "shell.mounted", error = %message, "Shell mounted without chats");
            }
        }

        MountedShell {
            title: self.title.clone(),
            chat_list,
            message_entry: MessageEntry::new(),
        }
    }
}

/// A shell after its single retrieval has resolved.
#[derive(Debug, Clone)]
pub struct MountedShell {
    title: String,
    chat_list: ChatListView,
    message_entry: MessageEntry,
}

impl MountedShell {
    /// Outcome of the mount's retrieval.
    pub fn chat_list(&self) -> &ChatListView {
        &self.chat_list
    }

    /// The message entry widget.
    pub fn message_entry(&self) -> &MessageEntry {
        &self.message_entry
    }

    /// Mutable access to the message entry, for committing input.
    pub fn message_entry_mut(&mut self) -> &mut MessageEntry {
        &mut self.message_entry
    }

    /// Render the full HTML document.
    pub fn render(&self) -> String {
        let content = format!(
            "<div class=\"chat-shell flex flex-col h-full bg-surface rounded-3xl overflow-hidden\">\n{}\n{}\n</div>",
            self.chat_list.render(),
            self.message_entry.render()
        );
        html_shell(&self.title, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::retriever::StaticRetriever;
    use crate::types::{ChatList, ChatRecord};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct CountingRetriever {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChatListRetriever for CountingRetriever {
        async fn fetch_chat_list(&self) -> Result<ChatList> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![ChatRecord(json!({"id": 7}))])
        }
    }

    #[tokio::test]
    async fn test_mount_retrieves_once() {
        let retriever = Arc::new(CountingRetriever::default());
        let shell = PresentationShell::new(
            Arc::clone(&retriever) as Arc<dyn ChatListRetriever>,
            "Chats",
        );

        let mounted = shell.mount().await;

        assert_eq!(retriever.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            mounted.chat_list(),
            &ChatListView::Loaded(vec![ChatRecord(json!({"id": 7}))])
        );
        assert_eq!(mounted.message_entry().text(), "");
    }

    #[tokio::test]
    async fn test_mount_renders_failure() {
        let shell = PresentationShell::new(
            Arc::new(StaticRetriever::failure(500, "internal")),
            "Chats",
        );

        let mounted = shell.mount().await;
        assert!(mounted.chat_list().is_failed());

        let page = mounted.render();
        assert!(page.contains("Could not load chats"));
        assert!(page.contains(r#"name="message""#));
    }

    #[derive(Clone, Default)]
    struct WarnCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() <= tracing::Level::WARN {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    #[tokio::test]
    async fn test_failed_mount_leaves_warning_to_retriever() {
        use tracing_subscriber::layer::SubscriberExt;

        let counter = WarnCounter::default();
        let subscriber = tracing_subscriber::registry().with(counter.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let shell = PresentationShell::new(
            Arc::new(StaticRetriever::failure(500, "internal")),
            "Chats",
        );
        let mounted = shell.mount().await;

        assert!(mounted.chat_list().is_failed());
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_message_entry_is_editable_after_mount() {
        let shell =
            PresentationShell::new(Arc::new(StaticRetriever::chats(Vec::new())), "Chats");
        let mut mounted = shell.mount().await;

        mounted.message_entry_mut().set_text("draft");
        assert_eq!(mounted.message_entry().text(), "draft");
        assert!(mounted.render().contains(">draft</textarea>"));
    }
}
