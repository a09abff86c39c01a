pub mod client;
pub mod parsing;
