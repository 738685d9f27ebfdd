//! Per-host in-flight request ceiling.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Lazily created semaphore per host name.
///
/// Hosts are keyed by their lowercase name, so `www.acme.com` and `acme.com`
/// are limited independently.
#[derive(Debug)]
pub struct HostLimiter {
    permits_per_host: usize,
    hosts: Mutex<HashMap<String, Arc<Semaphore>>>,
}

impl HostLimiter {
    pub fn new(permits_per_host: usize) -> Self {
        Self {
            permits_per_host: permits_per_host.max(1),
            hosts: Mutex::new(HashMap::new()),
        }
    }

    /// Waits for a request slot on `host`.
    ///
    /// Returns `None` only if the semaphore was closed, which never happens
    /// while the limiter is alive.
    pub async fn acquire(&self, host: &str) -> Option<OwnedSemaphorePermit> {
        let semaphore = self.semaphore_for(host);
        semaphore.acquire_owned().await.ok()
    }

    fn semaphore_for(&self, host: &str) -> Arc<Semaphore> {
        // A poisoned map is still a valid map
        let mut hosts = self.hosts.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(
            hosts
                .entry(host.to_ascii_lowercase())
                .or_insert_with(|| Arc::new(Semaphore::new(self.permits_per_host))),
        )
    }

    /// Number of hosts seen so far.
    pub fn host_count(&self) -> usize {
        self.hosts.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}
