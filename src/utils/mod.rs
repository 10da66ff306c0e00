pub mod error;

// Re-export important items for easier access
pub use error::{ClientError, Result};
