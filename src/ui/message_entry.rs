//! Message entry widget.

use super::html::escape;

/// Holds the text currently typed into the message box.
///
/// There is no submit action; the widget only keeps the last committed input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageEntry {
    text: String,
}

impl MessageEntry {
    /// Create an empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held text with `input`, unchanged.
    pub fn set_text(&mut self, input: impl Into<String>) {
        self.text = input.into();
    }

    /// The last committed input.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Render as a form field named `message`.
    pub fn render(&self) -> String {
        format!(
            r#"<div class="p-3 bg-surfaceContainer shrink-0">
    <textarea
        name="message"
        placeholder="Type your message..."
        class="w-full min-h-[44px] px-4 py-3 rounded-xl bg-surface text-textPrimary resize-none"
        rows="1"
    >{}</textarea>
</div>"#,
            escape(&self.text)
        )
    }
}
