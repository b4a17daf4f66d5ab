use async_trait::async_trait;

use crate::domain::{ProviderError, ProviderResponse, ResponseRequest};

/// A hosted endpoint that turns a composed message sequence into a reply.
///
/// Implementors own transport, authentication and wire format. Conversation
/// state lives on the provider side and is addressed by response id.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Issue one "create response" call. Implementations must not retry.
    async fn create_response(&self, request: &ResponseRequest) -> Result<ProviderResponse, ProviderError>;

    fn provider_name(&self) -> &str;
}
