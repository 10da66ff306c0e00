pub mod client;

// Re-export main client type
pub use client::{QaymClient, QAYM_API_URL};
