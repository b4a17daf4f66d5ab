mod reply_client;

pub use reply_client::*;
