//! Wire types exchanged with the backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One chat entry as returned by the backend.
///
/// The schema belongs to the backend; the client never inspects fields and
/// keeps the raw JSON value untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatRecord(pub Value);

impl ChatRecord {
    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the record, returning the JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for ChatRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Ordered chat records in server response order.
pub type ChatList = Vec<ChatRecord>;

/// Request body for `POST /prompt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptRequest {
    /// User message.
    pub message: String,
}

/// Response body of `POST /prompt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptResponse {
    /// Generated answer.
    pub answer: String,
    /// Routing decision taken by the backend.
    #[serde(default)]
    pub routing: Map<String, Value>,
    /// Source documents used for the answer, if any.
    #[serde(default)]
    pub sources: Option<Vec<Map<String, Value>>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_list_keeps_server_order() {
        let list: ChatList =
            serde_json::from_value(json!([{"id": 2}, {"id": 1}, "loose", 3])).unwrap();

        assert_eq!(list.len(), 4);
        assert_eq!(list[0].as_value(), &json!({"id": 2}));
        assert_eq!(list[1].as_value(), &json!({"id": 1}));
        assert_eq!(list[2].as_value(), &json!("loose"));
        assert_eq!(list[3].as_value(), &json!(3));
    }

    #[test]
    fn test_chat_list_rejects_non_array() {
        let result = serde_json::from_value::<ChatList>(json!({"chats": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_prompt_response_without_sources() {
        let resp: PromptResponse =
            serde_json::from_value(json!({"answer": "hi", "routing": {"route": "rag"}})).unwrap();

        assert_eq!(resp.answer, "hi");
        assert_eq!(resp.routing.get("route"), Some(&json!("rag")));
        assert!(resp.sources.is_none());
    }
}
