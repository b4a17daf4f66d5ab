mod response_provider;

pub use response_provider::*;
