//! # Application Layer
//!
//! Port traits and the reply use case built on them.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
