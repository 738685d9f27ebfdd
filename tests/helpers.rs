// Shared test helpers: in-memory fetchers and input file creation.

// Not every test file uses every helper
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use contact_harvest::{FetchError, FetchedPage, PageFetcher};
use tempfile::TempDir;

/// Canned response for one URL.
#[derive(Debug, Clone)]
pub struct CannedResponse {
    pub delay: Duration,
    pub result: Result<FetchedPage, FetchError>,
}

/// Fetcher that answers from a table, after an optional delay.
///
/// Unknown URLs fail with a connection error. URLs containing `explode`
/// panic, to exercise task isolation.
#[derive(Debug, Default)]
pub struct TableFetcher {
    responses: HashMap<String, CannedResponse>,
    calls: Mutex<Vec<String>>,
}

impl TableFetcher {
    pub fn page(self, url: &str, body: &str) -> Self {
        self.delayed_page(url, body, Duration::ZERO)
    }

    pub fn delayed_page(mut self, url: &str, body: &str, delay: Duration) -> Self {
        self.responses.insert(
            url.to_string(),
            CannedResponse {
                delay,
                result: Ok(FetchedPage {
                    body: body.to_string(),
                    final_url: url.to_string(),
                }),
            },
        );
        self
    }

    pub fn error(mut self, url: &str, error: FetchError) -> Self {
        self.responses.insert(
            url.to_string(),
            CannedResponse {
                delay: Duration::ZERO,
                result: Err(error),
            },
        );
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl PageFetcher for TableFetcher {
    async fn fetch(&self, url: &str, _max_bytes: u64) -> Result<FetchedPage, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        if url.contains("explode") {
            panic!("fetcher exploded on {url}");
        }
        let Some(canned) = self.responses.get(url).cloned() else {
            return Err(FetchError::Connect("connection refused".to_string()));
        };
        if !canned.delay.is_zero() {
            tokio::time::sleep(canned.delay).await;
        }
        canned.result
    }
}

/// Page with a single mailto link.
pub fn page_with_email(email: &str) -> String {
    format!(r#"<html><body><a href="mailto:{email}">Email us</a></body></html>"#)
}

/// Writes `contents` to `name` inside a fresh temp dir.
pub fn write_input(contents: &str, name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write input file");
    (dir, path)
}
