mod client_config;
mod conversation;
mod message;
mod prompt_config;
mod response;

pub use client_config::*;
pub use conversation::*;
pub use message::*;
pub use prompt_config::*;
pub use response::*;
