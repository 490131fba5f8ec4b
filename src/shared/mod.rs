/// Shared utilities used across all layers
pub mod error;
mod result;
pub mod security;

pub use result::Result;
