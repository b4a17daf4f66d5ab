pub mod application;
pub mod connector;
pub mod domain;

pub use application::{ReplyClient, ResponseProvider};

pub use connector::{OpenAiResponsesClient, ScriptedResponseProvider};

pub use domain::{
    classify, hint_for, is_rate_limited, ClientConfig, ConversationTurn, DomainError,
    FailureKind, FallbackHint, FallbackMessages, Message, PromptConfig, ProviderError,
    ProviderResponse, ReplyResult, ResponseRequest, Role, GENERIC_FALLBACK, RATE_FALLBACK,
    SENSITIVE_FALLBACK,
};
