//! Shared utilities.
//!
//! This module provides:
//! - Diagnostic string sanitization and truncation
//! - Panic payload messages
//! - CSS selector parsing for static selectors

mod panic;
pub mod sanitize;
mod selector;

pub use panic::panic_message;
pub use sanitize::sanitize_and_truncate_error_message;
pub use selector::parse_selector_unsafe;
