//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, size limits, defaults)
//! - Default browser-like request headers
//! - The `Config` struct, usable both as CLI options and as a library value

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{default_output_path, Config, LogFormat, LogLevel, StatusRetryPolicy};
