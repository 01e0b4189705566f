use clap::Parser;
use std::time::Duration;

use crate::domain::HttpMethod;

use super::defaults::DEFAULT_WORKERS;
use super::parsers::{parse_duration_arg, parse_header, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Batch HTTP latency prober - run a list of API calls through a fixed worker pool and check each response against an SLA threshold."
)]
pub struct KronosArgs {
    /// CSV file with one call per row (header: method,url,headers,body)
    #[arg(long)]
    pub csv: Option<String>,

    /// Acceptable response time per call (supports ms/s/m/h, bare numbers are seconds; invalid values fall back to 3s)
    #[arg(long, short = 't', env = "KRONOS_THRESHOLD")]
    pub threshold: Option<String>,

    /// Number of concurrent workers
    #[arg(long, short = 'w', default_value_t = default_workers(), value_parser = parse_positive_usize)]
    pub workers: PositiveUsize,

    /// Per-call transport timeout (supports ms/s/m/h)
    #[arg(long = "timeout", default_value = "5s", value_parser = parse_duration_arg)]
    pub request_timeout: Duration,

    /// Stop pulling new calls after the first failure and report what already ran
    #[arg(long = "fail-fast")]
    pub fail_fast: bool,

    /// Path to config file (TOML/JSON). Defaults to ./kronos.toml or ./kronos.json
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Single call target URL (appended after config and CSV jobs)
    #[arg(long, short)]
    pub url: Option<String>,

    /// HTTP method for --url
    #[arg(long, short = 'X', default_value = "get", ignore_case = true)]
    pub method: HttpMethod,

    /// HTTP headers for --url in 'Key: Value' format (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Request body for --url
    #[arg(long, short, default_value = "")]
    pub data: String,

    /// Prompt for a single call on stdin
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Write the full run report as JSON to this path
    #[arg(long = "export-json")]
    pub export_json: Option<String>,

    /// Only print per-call lines, no summary block
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Enable verbose (debug) logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable ANSI colors in log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

fn default_workers() -> PositiveUsize {
    PositiveUsize::try_from(DEFAULT_WORKERS).unwrap_or(PositiveUsize::MIN)
}
