//! End-to-end runs of `process_file` against a local HTTP server.

mod helpers;

use std::sync::Arc;

use contact_harvest::{
    process_file, process_file_with, Config, FetchError, FetchedPage, Fetcher, PageFetcher,
};
use helpers::write_input;
use httptest::{matchers::*, responders::*, Expectation, Server};

const FAKE_HOST: &str = "acme-widgets.com";

/// Routes a fake public domain to the local test server.
///
/// HTTPS variants of the fake domain fail with a TLS error so that the scraper
/// falls through to plain HTTP. Every other URL goes to the real fetcher.
struct LocalSiteFetcher {
    inner: Fetcher,
    server_base: String,
}

impl PageFetcher for LocalSiteFetcher {
    async fn fetch(&self, url: &str, max_bytes: u64) -> Result<FetchedPage, FetchError> {
        let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        let is_fake = parsed
            .host_str()
            .is_some_and(|host| host.ends_with(FAKE_HOST));
        if !is_fake {
            return self.inner.fetch(url, max_bytes).await;
        }
        if parsed.scheme() == "https" {
            return Err(FetchError::Tls("certificate verify failed".to_string()));
        }
        let local = format!("{}{}", self.server_base, parsed.path().trim_start_matches('/'));
        self.inner.fetch(&local, max_bytes).await
    }
}

fn test_config(input: std::path::PathBuf) -> Config {
    Config {
        input,
        max_retries: 1,
        max_concurrent: 2,
        timeout_seconds: 5,
        retry_base_delay_ms: 10,
        progress_interval_secs: 0,
        ..Config::default()
    }
}

fn serve_acme(server: &Server) {
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200).body(
                r#"<html><body>
                    <h1>Acme Widgets</h1>
                    <p>Quality widgets since 1982.</p>
                    <a href="/contact">Contact Us</a>
                </body></html>"#,
            ),
        ),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/contact")).respond_with(
            status_code(200).body(
                r#"<html><body>
                    <a href="mailto:sales@acme-widgets.com">Email sales</a>
                    <a href="tel:+14155550134">Call us</a>
                </body></html>"#,
            ),
        ),
    );
}

#[tokio::test]
async fn test_process_file_end_to_end() {
    let server = Server::run();
    serve_acme(&server);
    let server_base = server.url("/").to_string();

    let (dir, input) = write_input(
        "Title,Website\nAcme Widgets,acme-widgets.com\nNobody,N/A\nBroken,not a domain\n",
        "leads.csv",
    );
    let summary_path = dir.path().join("summary.json");
    let config = Config {
        summary_json: Some(summary_path.clone()),
        ..test_config(input)
    };
    let fetcher = LocalSiteFetcher {
        inner: Fetcher::new(&config).unwrap(),
        server_base: server_base.clone(),
    };

    let report = process_file_with(&config, Arc::new(fetcher)).await.unwrap();

    assert_eq!(report.total_inputs, 3);
    assert_eq!(report.succeeded, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.no_data_found, 0);

    let output_path = dir.path().join("leads_email_phone.csv");
    assert_eq!(report.output_path.as_deref(), Some(output_path.as_path()));
    let written = std::fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Title,Working_URL,Email,Phone".to_string(),
            format!("Acme Widgets,{server_base},sales@acme-widgets.com,+14155550134"),
            "Nobody,N/A,N/A,N/A".to_string(),
            "Broken,N/A,N/A,N/A".to_string(),
        ]
    );

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary["total_inputs"], 3);
    assert_eq!(summary["succeeded"], 1);
    assert_eq!(summary["results"][0]["status"], "SUCCESS");
    assert_eq!(summary["results"][0]["resolved_url"], server_base.as_str());
    assert_eq!(summary["results"][1]["status"], "SKIPPED_NO_WEBSITE");
    assert_eq!(summary["results"][2]["status"], "FAILED_INVALID_DOMAIN");
}

#[tokio::test]
async fn test_process_file_explicit_output_path() {
    let (dir, input) = write_input("Title,Website\nNobody,none\n", "leads.csv");
    let output = dir.path().join("nested").join("out.csv");
    let config = Config {
        output: Some(output.clone()),
        ..test_config(input)
    };

    let report = process_file(&config).await.unwrap();

    assert_eq!(report.skipped, 1);
    assert_eq!(
        std::fs::read_to_string(output).unwrap(),
        "Title,Working_URL,Email,Phone\nNobody,N/A,N/A,N/A\n"
    );
}

#[tokio::test]
async fn test_process_file_missing_input() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = test_config(dir.path().join("absent.csv"));

    let err = process_file(&config).await.unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to load input file"), "{message}");
    assert!(message.contains("not found"), "{message}");
    assert!(!dir.path().join("absent_email_phone.csv").exists());
}

#[tokio::test]
async fn test_process_file_missing_column() {
    let (dir, input) = write_input("Name,Website\nAcme,acme.com\n", "leads.csv");
    let config = test_config(input);

    let err = process_file(&config).await.unwrap_err();
    assert!(format!("{err:#}").contains("Required column 'Title' not found"));
    assert!(!dir.path().join("leads_email_phone.csv").exists());
}

#[tokio::test]
async fn test_process_file_rejects_invalid_config() {
    let (_dir, input) = write_input("Title,Website\n", "leads.csv");
    let config = Config {
        timeout_seconds: 4,
        ..test_config(input)
    };

    let err = process_file(&config).await.unwrap_err();
    assert!(format!("{err:#}").contains("Invalid configuration"));
}

#[tokio::test]
async fn test_process_file_header_only_input() {
    let (_dir, input) = write_input("Title,Website\n", "leads.csv");
    let report = process_file(&test_config(input)).await.unwrap();
    assert_eq!(report.total_inputs, 0);
    assert_eq!(
        report.summary_message().split(" in ").next(),
        Some("Processed 0 websites")
    );
}
