//! Tests for resolving and running named tool calls.

mod helpers;

use contact_harvest::tool::{ScraperArgs, ToolError, WEBSITE_SCRAPER_TOOL};
use contact_harvest::ToolRequest;
use helpers::write_input;
use serde_json::json;

#[test]
fn test_unknown_tool() {
    let err = ToolRequest::from_call("Weather-Tool", json!({})).unwrap_err();
    assert!(matches!(err, ToolError::UnknownTool(ref name) if name == "Weather-Tool"));
}

#[test]
fn test_missing_input_path_argument() {
    let err = ToolRequest::from_call(WEBSITE_SCRAPER_TOOL, json!({ "timeout": 10 })).unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments { .. }));
}

#[test]
fn test_nonexistent_input_file() {
    let err = ToolRequest::from_call(
        WEBSITE_SCRAPER_TOOL,
        json!({ "input_csv_path": "/definitely/not/here/leads.csv" }),
    )
    .unwrap_err();
    match err {
        ToolError::InvalidArguments { tool, reason } => {
            assert_eq!(tool, WEBSITE_SCRAPER_TOOL);
            assert!(reason.contains("not found"), "unexpected reason: {reason}");
        }
        other => panic!("expected InvalidArguments, got {other:?}"),
    }
}

#[test]
fn test_non_csv_input_rejected() {
    let (_dir, path) = write_input("Title,Website\n", "leads.txt");
    let err = ToolRequest::from_call(WEBSITE_SCRAPER_TOOL, json!({ "input_csv_path": path }))
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidArguments { .. }));
}

#[test]
fn test_out_of_range_knobs_rejected() {
    let (_dir, path) = write_input("Title,Website\n", "leads.csv");
    for args in [
        json!({ "input_csv_path": path, "timeout": 4 }),
        json!({ "input_csv_path": path, "max_retries": 6 }),
        json!({ "input_csv_path": path, "max_concurrent": 0 }),
        json!({ "input_csv_path": path, "max_concurrent": 51 }),
    ] {
        assert!(
            matches!(
                ToolRequest::from_call(WEBSITE_SCRAPER_TOOL, args.clone()),
                Err(ToolError::InvalidArguments { .. })
            ),
            "{args} should be rejected"
        );
    }
}

#[test]
fn test_defaults_applied() {
    let (_dir, path) = write_input("Title,Website\n", "leads.csv");
    let request =
        ToolRequest::from_call(WEBSITE_SCRAPER_TOOL, json!({ "input_csv_path": path })).unwrap();

    assert_eq!(request.name(), WEBSITE_SCRAPER_TOOL);
    let ToolRequest::WebsiteScraper(args) = request;
    assert_eq!(
        args,
        ScraperArgs {
            input_csv_path: path,
            title_column: "Title".to_string(),
            website_column: "Website".to_string(),
            timeout: 30,
            max_retries: 3,
            max_concurrent: 10,
        }
    );
}

#[tokio::test]
async fn test_dispatch_runs_batch_and_writes_output() {
    let (dir, path) = write_input(
        "Name,URL\nNobody,N/A\nPlaceholder,example.com\nBlank,\nGarbage,not a domain\n",
        "leads.csv",
    );
    let request = ToolRequest::from_call(
        WEBSITE_SCRAPER_TOOL,
        json!({
            "input_csv_path": path,
            "title_column": "Name",
            "website_column": "URL",
            "max_concurrent": 2,
        }),
    )
    .unwrap();

    let output = request.dispatch().await.unwrap();

    let expected_output = dir.path().join("leads_email_phone.csv");
    assert_eq!(output.output_path, expected_output.display().to_string());
    assert_eq!(output.total_processed, 4);
    assert_eq!(output.successful, 0);
    assert_eq!(output.no_data, 0);
    assert_eq!(output.skipped, 2);
    assert_eq!(output.failed, 2);
    assert!(output.message.starts_with("Processed 4 websites in "));

    let written = std::fs::read_to_string(expected_output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Title,Working_URL,Email,Phone",
            "Nobody,N/A,N/A,N/A",
            "Placeholder,N/A,N/A,N/A",
            "Blank,N/A,N/A,N/A",
            "Garbage,N/A,N/A,N/A",
        ]
    );
}

#[tokio::test]
async fn test_dispatch_reports_setup_failure() {
    let (_dir, path) = write_input("Name,URL\nAcme,acme.com\n", "leads.csv");
    // Column names default to Title/Website, which this file lacks
    let request =
        ToolRequest::from_call(WEBSITE_SCRAPER_TOOL, json!({ "input_csv_path": path })).unwrap();

    let err = request.dispatch().await.unwrap_err();
    assert!(matches!(err, ToolError::Failed(_)));
    assert!(err.to_string().contains("Title"), "unexpected error: {err}");
}
