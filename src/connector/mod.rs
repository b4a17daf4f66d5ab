//! # Connector Layer
//!
//! Implementations of the application ports:
//! - `OpenAiResponsesClient` for the hosted Responses API
//! - `ScriptedResponseProvider` for offline runs and tests

pub mod adapter;

pub use adapter::*;
