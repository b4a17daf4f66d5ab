use super::PromptConfig;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const MODEL_VAR: &str = "OPENAI_MODEL";
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const CORE_PROMPT_VAR: &str = "OPENAI_CORE_PROMPT";
pub const ROLE_PROMPT_VAR: &str = "OPENAI_ROLE_PROMPT";

/// Process-level settings for a [`crate::ReplyClient`] and the adapter it talks
/// through.
///
/// Read once at startup and handed to constructors; nothing reads the
/// environment after that.
///
/// | Variable             | Default                  | Purpose                         |
/// |----------------------|--------------------------|---------------------------------|
/// | `OPENAI_API_KEY`     | none                     | Bearer credential (required)    |
/// | `OPENAI_MODEL`       | `gpt-4o`                 | Model identifier                |
/// | `OPENAI_BASE_URL`    | `https://api.openai.com` | Any Responses-compatible server |
/// | `OPENAI_CORE_PROMPT` | `""`                     | First system message            |
/// | `OPENAI_ROLE_PROMPT` | `""`                     | Optional second system message  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: Option<String>,
    model: String,
    base_url: String,
    prompts: PromptConfig,
}

impl ClientConfig {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            prompts: PromptConfig::default(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reading through `lookup`, so callers can
    /// supply values from somewhere other than the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let model = lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let core = lookup(CORE_PROMPT_VAR).unwrap_or_default();
        let role = lookup(ROLE_PROMPT_VAR).unwrap_or_default();

        Self {
            api_key: lookup(API_KEY_VAR),
            model,
            base_url,
            prompts: PromptConfig::new(core.trim(), role.trim()),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_prompts(mut self, core_prompt: impl Into<String>, role_prompt: impl Into<String>) -> Self {
        self.prompts = PromptConfig::new(core_prompt, role_prompt);
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn prompts(&self) -> &PromptConfig {
        &self.prompts
    }
}
