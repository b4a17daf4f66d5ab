//! Rules for turning provider failures into user-facing replies.

mod failure_classifier;
mod fallback_messages;

pub use failure_classifier::*;
pub use fallback_messages::*;
