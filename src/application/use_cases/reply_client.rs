use std::sync::Arc;

use tracing::{debug, error};

use crate::application::ResponseProvider;
use crate::domain::{
    classify, hint_for, ClientConfig, ConversationTurn, FallbackHint, FallbackMessages, Message,
    PromptConfig, ProviderError, ReplyResult, ResponseRequest,
};

/// Composes prompts around a user message, asks the provider for a reply and
/// degrades every failure into a fallback reply.
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// callers as long as the provider can.
pub struct ReplyClient {
    provider: Arc<dyn ResponseProvider>,
    model: String,
    prompts: PromptConfig,
    fallbacks: FallbackMessages,
}

impl ReplyClient {
    pub fn new(provider: Arc<dyn ResponseProvider>, config: &ClientConfig) -> Self {
        Self {
            provider,
            model: config.model().to_string(),
            prompts: config.prompts().clone(),
            fallbacks: FallbackMessages::default(),
        }
    }

    pub fn with_fallbacks(mut self, fallbacks: FallbackMessages) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn compose_messages(&self, user_message: &str) -> Vec<Message> {
        self.prompts.compose_messages(user_message)
    }

    /// Get a reply to `user_message`, continuing from `previous_response_id`
    /// when given.
    ///
    /// Never fails: provider errors are logged and turned into a fallback
    /// text paired with no response id.
    pub async fn get_reply(&self, user_message: &str, previous_response_id: Option<&str>) -> ReplyResult {
        let mut turn = ConversationTurn::new(user_message);
        if let Some(id) = previous_response_id {
            turn = turn.continuing(id);
        }
        self.reply(turn).await
    }

    pub async fn reply(&self, turn: ConversationTurn) -> ReplyResult {
        let messages = self.compose_messages(turn.user_message());
        let request = ResponseRequest::new(&self.model, messages, &turn);

        debug!(
            "Sending {} messages to {} (continuation: {})",
            request.input().len(),
            self.provider.provider_name(),
            turn.is_continuation()
        );

        match self.provider.create_response(&request).await {
            Ok(response) => ReplyResult::success(response.output_text().trim(), response.id()),
            Err(e) => {
                let hint = hint_for(&e);
                let kind = classify(&e, hint);
                error!(
                    "ReplyClient: {} call failed ({}): {e:?}",
                    self.provider.provider_name(),
                    kind.as_str()
                );
                ReplyResult::fallback(self.fallbacks.message_for(&kind))
            }
        }
    }

    /// The fallback text for `error` under an explicit `hint`.
    pub fn fallback_message(&self, error: &ProviderError, hint: FallbackHint) -> &str {
        self.fallbacks.message_for(&classify(error, hint))
    }
}
