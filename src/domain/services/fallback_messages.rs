use super::FailureKind;

pub const GENERIC_FALLBACK: &str = "エラーが発生しました。";
pub const RATE_FALLBACK: &str = "ただいま混み合っています。しばらく時間をおいてから再度お試しください。";
/// Content-policy rejections produce no visible text.
pub const SENSITIVE_FALLBACK: &str = "";

/// Replies substituted for the model's output when a call fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackMessages {
    generic: String,
    rate_limited: String,
    sensitive: String,
}

impl Default for FallbackMessages {
    fn default() -> Self {
        Self {
            generic: GENERIC_FALLBACK.to_string(),
            rate_limited: RATE_FALLBACK.to_string(),
            sensitive: SENSITIVE_FALLBACK.to_string(),
        }
    }
}

impl FallbackMessages {
    pub fn with_generic(mut self, text: impl Into<String>) -> Self {
        self.generic = text.into();
        self
    }

    pub fn with_rate_limited(mut self, text: impl Into<String>) -> Self {
        self.rate_limited = text.into();
        self
    }

    pub fn with_sensitive(mut self, text: impl Into<String>) -> Self {
        self.sensitive = text.into();
        self
    }

    pub fn message_for(&self, kind: &FailureKind) -> &str {
        match kind {
            FailureKind::RateLimited => &self.rate_limited,
            FailureKind::ContentPolicy => &self.sensitive,
            FailureKind::Other(_) => &self.generic,
        }
    }
}
