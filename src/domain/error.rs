use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

/// Error kinds the provider reports for throttled requests.
const RATE_LIMIT_KINDS: &[&str] = &["rate_limit_exceeded", "rate_limit_error"];

/// Error codes the provider reports when a request or its output was blocked
/// by content moderation.
const CONTENT_POLICY_CODES: &[&str] = &["content_filter", "content_policy_violation"];

/// A failed call to the response endpoint.
///
/// Carries whatever structure the transport exposes (status code, provider
/// error type and code) so classification can look at those before falling
/// back to the rendered message text. The rendered text holds only the
/// provider's message, never the status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("API error: {message}")]
    Api {
        status: u16,
        error_type: Option<String>,
        code: Option<String>,
        message: String,
    },

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            error_type: None,
            code: None,
            message: message.into(),
        }
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Attach the provider's error `type` to an [`ProviderError::Api`] error.
    /// Other variants are returned unchanged.
    pub fn with_error_type(mut self, value: impl Into<String>) -> Self {
        if let Self::Api { error_type, .. } = &mut self {
            *error_type = Some(value.into());
        }
        self
    }

    /// Attach the provider's error `code` to an [`ProviderError::Api`] error.
    /// Other variants are returned unchanged.
    pub fn with_code(mut self, value: impl Into<String>) -> Self {
        if let Self::Api { code, .. } = &mut self {
            *code = Some(value.into());
        }
        self
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn error_type(&self) -> Option<&str> {
        match self {
            Self::Api { error_type, .. } => error_type.as_deref(),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// True when the provider tagged this error as a rate-limit error.
    pub fn is_rate_limit_kind(&self) -> bool {
        [self.error_type(), self.code()]
            .into_iter()
            .flatten()
            .any(|kind| RATE_LIMIT_KINDS.contains(&kind))
    }

    /// True when the provider tagged this error as a moderation rejection.
    pub fn is_content_policy_kind(&self) -> bool {
        self.code()
            .is_some_and(|code| CONTENT_POLICY_CODES.contains(&code))
    }

    /// True for failures the provider reports as transient: transport
    /// timeouts and `503 Service Unavailable`.
    pub fn is_temporarily_unavailable(&self) -> bool {
        matches!(self, Self::Timeout(_)) || self.status() == Some(503)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_only_touch_api_errors() {
        let err = ProviderError::transport("connection reset").with_code("rate_limit_exceeded");
        assert_eq!(err.code(), None);
        assert!(!err.is_rate_limit_kind());
    }

    #[test]
    fn rate_limit_kind_matches_type_or_code() {
        let by_code = ProviderError::api(400, "slow down").with_code("rate_limit_exceeded");
        let by_type = ProviderError::api(400, "slow down").with_error_type("rate_limit_error");
        let neither = ProviderError::api(400, "slow down").with_error_type("invalid_request_error");

        assert!(by_code.is_rate_limit_kind());
        assert!(by_type.is_rate_limit_kind());
        assert!(!neither.is_rate_limit_kind());
    }

    #[test]
    fn content_policy_kind_matches_code() {
        let err = ProviderError::api(400, "blocked").with_code("content_policy_violation");
        assert!(err.is_content_policy_kind());
        assert!(!ProviderError::api(400, "blocked").is_content_policy_kind());
    }

    #[test]
    fn temporarily_unavailable_covers_timeout_and_503() {
        assert!(ProviderError::timeout("deadline elapsed").is_temporarily_unavailable());
        assert!(ProviderError::api(503, "overloaded").is_temporarily_unavailable());
        assert!(!ProviderError::api(500, "boom").is_temporarily_unavailable());
    }

    #[test]
    fn display_omits_status() {
        let err = ProviderError::api(429, "Too Many Requests");
        assert_eq!(err.to_string(), "API error: Too Many Requests");
        assert_eq!(err.status(), Some(429));
    }
}
