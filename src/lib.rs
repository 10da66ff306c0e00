//! Client library and interactive explorer for the Qaym restaurant
//! directory API (public API v0.1).

pub mod api;
pub mod cli;
pub mod utils;

pub use api::{QaymClient, QAYM_API_URL};
pub use utils::{ClientError, Result};
