//! # Domain Layer
//!
//! Prompt and conversation models, error types, and the failure
//! classification rules. Independent of any transport.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
