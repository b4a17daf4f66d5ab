use serde::{Deserialize, Serialize};

use super::{ConversationTurn, Message};

/// Body of a "create response" call.
///
/// Exactly one of `previous_response_id` and `store` is set: a continuation
/// names the prior response and lets the provider replay its state, a fresh
/// conversation asks the provider to store the new state instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRequest {
    model: String,
    input: Vec<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    previous_response_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    store: Option<bool>,
}

impl ResponseRequest {
    pub fn new(model: impl Into<String>, input: Vec<Message>, turn: &ConversationTurn) -> Self {
        let previous_response_id = turn.previous_response_id().map(str::to_string);
        let store = previous_response_id.is_none().then_some(true);
        Self {
            model: model.into(),
            input,
            previous_response_id,
            store,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn input(&self) -> &[Message] {
        &self.input
    }

    pub fn previous_response_id(&self) -> Option<&str> {
        self.previous_response_id.as_deref()
    }

    pub fn store(&self) -> bool {
        self.store.unwrap_or(false)
    }
}

/// What the reply client needs from a successful provider response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    id: String,
    output_text: String,
}

impl ProviderResponse {
    pub fn new(id: impl Into<String>, output_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            output_text: output_text.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn output_text(&self) -> &str {
        &self.output_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_turn_sets_store_only() {
        let turn = ConversationTurn::new("hello");
        let request = ResponseRequest::new("gpt-4o", vec![Message::user("hello")], &turn);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["store"], serde_json::json!(true));
        assert!(json.get("previous_response_id").is_none());
    }

    #[test]
    fn continuation_references_prior_response_only() {
        let turn = ConversationTurn::new("and then?").continuing("resp_abc");
        let request = ResponseRequest::new("gpt-4o", vec![Message::user("and then?")], &turn);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["previous_response_id"], serde_json::json!("resp_abc"));
        assert!(json.get("store").is_none());
        assert!(!request.store());
    }
}
