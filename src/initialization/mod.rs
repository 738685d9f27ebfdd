//! Shared resource setup for a batch run.
//!
//! - HTTP client (timeouts, default headers, redirect limit)
//! - Logger
//! - Concurrency semaphores
//!
//! All initialization functions return `InitializationError` on failure.

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling concurrency.
///
/// # Arguments
///
/// * `count` - Maximum number of permits held at once
///
/// # Returns
///
/// An `Arc<Semaphore>` that can be shared across tasks.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
