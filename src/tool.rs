//! Named tool requests, as issued by an agent.
//!
//! A request arrives as a tool name plus JSON arguments. Names are resolved
//! through a fixed table to a parser that produces a `ToolRequest` variant;
//! there is one variant per capability this crate serves.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::batch::{process_file, BatchReport};
use crate::config::{
    Config, DEFAULT_MAX_CONCURRENT, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TITLE_COLUMN, DEFAULT_WEBSITE_COLUMN,
};

/// Name under which the website scraper is exposed.
pub const WEBSITE_SCRAPER_TOOL: &str = "WebsiteScraper-Tool";

type ToolParser = fn(Value) -> Result<ToolRequest, ToolError>;

const TOOLS: &[(&str, ToolParser)] = &[(WEBSITE_SCRAPER_TOOL, parse_website_scraper)];

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: &'static str, reason: String },

    #[error("Tool execution failed: {0:#}")]
    Failed(anyhow::Error),
}

/// Arguments of the website scraper tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperArgs {
    /// CSV file with title and website columns
    pub input_csv_path: PathBuf,
    #[serde(default = "default_title_column")]
    pub title_column: String,
    #[serde(default = "default_website_column")]
    pub website_column: String,
    /// Per-request timeout in seconds (5-120)
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Attempts per URL variant (1-5)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Sites scraped at once (1-50)
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

fn default_title_column() -> String {
    DEFAULT_TITLE_COLUMN.to_string()
}

fn default_website_column() -> String {
    DEFAULT_WEBSITE_COLUMN.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_max_concurrent() -> usize {
    DEFAULT_MAX_CONCURRENT
}

impl ScraperArgs {
    /// The batch configuration these arguments describe.
    pub fn to_config(&self) -> Config {
        Config {
            input: self.input_csv_path.clone(),
            title_column: self.title_column.clone(),
            website_column: self.website_column.clone(),
            timeout_seconds: self.timeout,
            max_retries: self.max_retries,
            max_concurrent: self.max_concurrent,
            ..Config::default()
        }
    }

    fn validate(&self) -> Result<(), ToolError> {
        let invalid = |reason: String| ToolError::InvalidArguments {
            tool: WEBSITE_SCRAPER_TOOL,
            reason,
        };
        if !self.input_csv_path.exists() {
            return Err(invalid(format!(
                "Input CSV file not found: {}",
                self.input_csv_path.display()
            )));
        }
        if !self.input_csv_path.to_string_lossy().ends_with(".csv") {
            return Err(invalid("Input file must be a CSV file".to_string()));
        }
        self.to_config()
            .validate()
            .map_err(|e| invalid(e.to_string()))
    }
}

/// A validated request for one of the crate's tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    WebsiteScraper(ScraperArgs),
}

impl ToolRequest {
    /// Resolves a tool call by name.
    ///
    /// # Errors
    ///
    /// `ToolError::UnknownTool` for names not in the table,
    /// `ToolError::InvalidArguments` if the arguments do not parse or validate.
    pub fn from_call(name: &str, args: Value) -> Result<Self, ToolError> {
        let (_, parse) = TOOLS
            .iter()
            .find(|(tool, _)| *tool == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        parse(args)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolRequest::WebsiteScraper(_) => WEBSITE_SCRAPER_TOOL,
        }
    }

    /// Runs the request.
    ///
    /// # Errors
    ///
    /// `ToolError::Failed` if the underlying batch fails to set up.
    pub async fn dispatch(self) -> Result<ToolOutput, ToolError> {
        match self {
            ToolRequest::WebsiteScraper(args) => {
                let report = process_file(&args.to_config())
                    .await
                    .map_err(ToolError::Failed)?;
                Ok(ToolOutput::from(&report))
            }
        }
    }
}

fn parse_website_scraper(args: Value) -> Result<ToolRequest, ToolError> {
    let args: ScraperArgs =
        serde_json::from_value(args).map_err(|e| ToolError::InvalidArguments {
            tool: WEBSITE_SCRAPER_TOOL,
            reason: e.to_string(),
        })?;
    args.validate()?;
    Ok(ToolRequest::WebsiteScraper(args))
}

/// What a tool call returns to the agent.
#[derive(Debug, Clone, Serialize)]
pub struct ToolOutput {
    pub output_path: String,
    pub message: String,
    pub total_processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub no_data: usize,
    pub skipped: usize,
    pub duration_seconds: f64,
}

impl From<&BatchReport> for ToolOutput {
    fn from(report: &BatchReport) -> Self {
        Self {
            output_path: report
                .output_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            message: report.summary_message(),
            total_processed: report.total_inputs,
            successful: report.succeeded,
            failed: report.failed,
            no_data: report.no_data_found,
            skipped: report.skipped,
            duration_seconds: report.elapsed_seconds,
        }
    }
}
