/// Input to one reply call: the user's text plus the continuation id returned
/// by the previous successful call, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    user_message: String,
    previous_response_id: Option<String>,
}

impl ConversationTurn {
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            previous_response_id: None,
        }
    }

    /// Continue from `id`. An empty id starts a fresh conversation.
    pub fn continuing(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.previous_response_id = (!id.is_empty()).then_some(id);
        self
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn previous_response_id(&self) -> Option<&str> {
        self.previous_response_id.as_deref()
    }

    pub fn is_continuation(&self) -> bool {
        self.previous_response_id.is_some()
    }
}

/// Outcome of one reply call.
///
/// A `None` response id marks a fallback reply; the caller keeps the id of
/// successful replies to continue the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyResult {
    text: String,
    response_id: Option<String>,
}

impl ReplyResult {
    pub fn success(text: impl Into<String>, response_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            response_id: Some(response_id.into()),
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            response_id: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn response_id(&self) -> Option<&str> {
        self.response_id.as_deref()
    }

    pub fn is_fallback(&self) -> bool {
        self.response_id.is_none()
    }

    pub fn into_parts(self) -> (String, Option<String>) {
        (self.text, self.response_id)
    }
}
