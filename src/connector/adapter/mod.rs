mod openai_responses_client;
mod scripted_response_provider;

pub use openai_responses_client::*;
pub use scripted_response_provider::*;
