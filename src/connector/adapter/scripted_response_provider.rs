use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::application::ResponseProvider;
use crate::domain::{ProviderError, ProviderResponse, ResponseRequest, Role};

/// In-process [`ResponseProvider`] that replays queued outcomes.
///
/// Every request is recorded. When the queue is empty the provider echoes the
/// last user message back under a fresh `resp_<uuid>` id, which makes it
/// usable as an offline backend as well as a test double.
pub struct ScriptedResponseProvider {
    outcomes: Mutex<VecDeque<Result<ProviderResponse, ProviderError>>>,
    requests: Mutex<Vec<ResponseRequest>>,
}

fn locked<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ScriptedResponseProvider {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, response: ProviderResponse) {
        locked(&self.outcomes).push_back(Ok(response));
    }

    pub fn push_error(&self, error: ProviderError) {
        locked(&self.outcomes).push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ResponseRequest> {
        locked(&self.requests).clone()
    }

    pub fn last_request(&self) -> Option<ResponseRequest> {
        locked(&self.requests).last().cloned()
    }

    fn echo(request: &ResponseRequest) -> ProviderResponse {
        let user_text = request
            .input()
            .iter()
            .rev()
            .find(|m| m.role() == Role::User)
            .map(|m| m.content())
            .unwrap_or_default();
        ProviderResponse::new(format!("resp_{}", Uuid::new_v4().simple()), format!("echo: {user_text}"))
    }
}

impl Default for ScriptedResponseProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseProvider for ScriptedResponseProvider {
    async fn create_response(&self, request: &ResponseRequest) -> Result<ProviderResponse, ProviderError> {
        locked(&self.requests).push(request.clone());

        let next = locked(&self.outcomes).pop_front();
        match next {
            Some(outcome) => outcome,
            None => {
                debug!("ScriptedResponseProvider: queue empty, echoing user message");
                Ok(Self::echo(request))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}
