pub mod client;
pub mod command;

// Re-export main client type
pub use client::Client;
pub use command::Command;
