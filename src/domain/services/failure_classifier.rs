use std::fmt;
use std::str::FromStr;

use crate::domain::{DomainError, ProviderError};

/// What went wrong, as far as the user-facing reply is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    RateLimited,
    ContentPolicy,
    Other(String),
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::RateLimited => "rate_limited",
            FailureKind::ContentPolicy => "content_policy",
            FailureKind::Other(_) => "other",
        }
    }
}

/// Caller-supplied hint steering classification of errors that are not
/// recognisably rate-limited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackHint {
    #[default]
    Generic,
    Sensitive,
    Rate,
}

impl FallbackHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackHint::Generic => "generic",
            FallbackHint::Sensitive => "sensitive",
            FallbackHint::Rate => "rate",
        }
    }
}

impl fmt::Display for FallbackHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackHint {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic" => Ok(FallbackHint::Generic),
            "sensitive" => Ok(FallbackHint::Sensitive),
            "rate" => Ok(FallbackHint::Rate),
            other => Err(DomainError::configuration(format!(
                "unknown fallback kind '{other}', expected generic, sensitive or rate"
            ))),
        }
    }
}

const RATE_LIMIT_PHRASES: &[&str] = &["429", "rate limit", "too many requests"];
const TRANSIENT_PHRASES: &[&str] = &["rate", "429", "timeout", "temporarily", "503"];

/// Whether `error` means the provider throttled us.
///
/// Structured signals (error kind, status 429) are checked first; the rendered
/// message is only scanned when neither is present.
pub fn is_rate_limited(error: &ProviderError) -> bool {
    if error.is_rate_limit_kind() || error.status() == Some(429) {
        return true;
    }
    let text = error.to_string().to_lowercase();
    RATE_LIMIT_PHRASES.iter().any(|p| text.contains(p))
}

/// The hint the reply path passes for `error`: `Rate` for throttling,
/// `Generic` otherwise.
pub fn hint_for(error: &ProviderError) -> FallbackHint {
    if is_rate_limited(error) {
        FallbackHint::Rate
    } else {
        FallbackHint::Generic
    }
}

/// Map a provider failure to a [`FailureKind`].
///
/// Precedence: rate limiting always wins, then an explicit `Sensitive` or
/// `Rate` hint, then content-policy signals, then transient-failure signals.
/// Anything left is `Other` carrying the error text.
pub fn classify(error: &ProviderError, hint: FallbackHint) -> FailureKind {
    if is_rate_limited(error) {
        return FailureKind::RateLimited;
    }

    match hint {
        FallbackHint::Sensitive => return FailureKind::ContentPolicy,
        FallbackHint::Rate => return FailureKind::RateLimited,
        FallbackHint::Generic => {}
    }

    let detail = error.to_string();
    let text = detail.to_lowercase();

    if error.is_content_policy_kind()
        || text.contains("policy")
        || (text.contains("content") && text.contains("filter"))
    {
        return FailureKind::ContentPolicy;
    }

    if error.is_temporarily_unavailable() || TRANSIENT_PHRASES.iter().any(|p| text.contains(p)) {
        return FailureKind::RateLimited;
    }

    FailureKind::Other(detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_429_is_rate_limited() {
        let err = ProviderError::api(429, "quota exhausted");
        assert!(is_rate_limited(&err));
        assert_eq!(classify(&err, FallbackHint::Generic), FailureKind::RateLimited);
    }

    #[test]
    fn provider_rate_limit_kind_is_rate_limited() {
        let by_type = ProviderError::api(400, "slow down").with_error_type("rate_limit_error");
        let by_code = ProviderError::api(400, "slow down").with_code("rate_limit_exceeded");

        for err in [by_type, by_code] {
            assert!(is_rate_limited(&err));
            assert_eq!(classify(&err, FallbackHint::Sensitive), FailureKind::RateLimited);
        }
    }

    #[test]
    fn benign_api_error_is_not_rate_limited() {
        let err = ProviderError::api(400, "slow down");
        assert!(!is_rate_limited(&err));
        assert_eq!(
            classify(&err, FallbackHint::Generic),
            FailureKind::Other("API error: slow down".into())
        );
    }

    #[test]
    fn status_503_with_benign_message_is_transient() {
        let err = ProviderError::api(503, "upstream unavailable");
        assert_eq!(classify(&err, FallbackHint::Generic), FailureKind::RateLimited);
    }

    #[test]
    fn rate_limit_text_is_detected_case_insensitively() {
        assert!(is_rate_limited(&ProviderError::transport("Rate Limit reached")));
        assert!(is_rate_limited(&ProviderError::transport("TOO MANY REQUESTS")));
        assert!(!is_rate_limited(&ProviderError::transport("connection reset")));
    }

    #[test]
    fn rate_limit_wins_over_hint() {
        let err = ProviderError::api(429, "content filter triggered");
        assert_eq!(classify(&err, FallbackHint::Sensitive), FailureKind::RateLimited);
    }

    #[test]
    fn hints_apply_to_unrecognised_errors() {
        let err = ProviderError::transport("connection reset");
        assert_eq!(classify(&err, FallbackHint::Sensitive), FailureKind::ContentPolicy);
        assert_eq!(classify(&err, FallbackHint::Rate), FailureKind::RateLimited);
        assert_eq!(
            classify(&err, FallbackHint::Generic),
            FailureKind::Other("Request failed: connection reset".into())
        );
    }

    #[test]
    fn content_policy_from_code_or_text() {
        let by_code = ProviderError::api(400, "rejected").with_code("content_filter");
        let by_policy = ProviderError::api(400, "Your request violates our usage policy");
        let by_filter = ProviderError::api(400, "Blocked by the Content Filter");

        for err in [by_code, by_policy, by_filter] {
            assert_eq!(classify(&err, FallbackHint::Generic), FailureKind::ContentPolicy);
        }
    }

    #[test]
    fn content_policy_is_checked_before_transient_signals() {
        let err = ProviderError::api(503, "content filter unavailable");
        assert_eq!(classify(&err, FallbackHint::Generic), FailureKind::ContentPolicy);
    }

    #[test]
    fn transient_failures_map_to_rate_limited() {
        let cases = [
            ProviderError::api(503, "Service Unavailable"),
            ProviderError::timeout("deadline elapsed"),
            ProviderError::transport("server temporarily overloaded"),
        ];
        for err in cases {
            assert_eq!(classify(&err, FallbackHint::Generic), FailureKind::RateLimited);
        }
    }

    #[test]
    fn hint_for_follows_rate_limit_check() {
        assert_eq!(hint_for(&ProviderError::api(429, "x")), FallbackHint::Rate);
        assert_eq!(hint_for(&ProviderError::api(500, "x")), FallbackHint::Generic);
    }

    #[test]
    fn hint_parses_from_str() {
        assert_eq!("Sensitive".parse::<FallbackHint>().unwrap(), FallbackHint::Sensitive);
        assert_eq!(" rate ".parse::<FallbackHint>().unwrap(), FallbackHint::Rate);
        assert!("loud".parse::<FallbackHint>().is_err());
    }
}
