//! Job sources: config `[[jobs]]`, CSV files, the single `--url` call and
//! the interactive prompt.

mod csv;
mod headers;
mod prompt;


use std::io::{BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::args::KronosArgs;
use crate::config::types::ConfigFile;
use crate::domain::Job;
use crate::error::SourceError;

pub use self::csv::load_csv_jobs;
pub use prompt::{Prompt, PromptedJob};

/// Jobs gathered from every source, indexed in submission order.
#[derive(Debug, Default)]
pub struct JobSet {
    pub jobs: Vec<Job>,
    /// Threshold typed at the prompt, if the prompt ran and got one.
    pub prompted_threshold: Option<String>,
}

/// Builds the job list: config jobs, then CSV, then `--url`. The prompt runs
/// when `--interactive` is set or nothing else produced a job; pass `None`
/// to never prompt.
///
/// # Errors
///
/// Returns the first `SourceError` any source reports.
pub fn collect_jobs<R: BufRead, W: Write>(
    args: &KronosArgs,
    config: Option<&ConfigFile>,
    prompt: Option<&mut Prompt<R, W>>,
) -> Result<JobSet, SourceError> {
    let mut jobs = Vec::new();

    if let Some(config) = config {
        for (index, job) in config.jobs.iter().enumerate() {
            jobs.push(job.to_job(index)?);
        }
        debug!("Loaded {} job(s) from config", config.jobs.len());
    }

    if let Some(path) = args.csv.as_deref() {
        let loaded = load_csv_jobs(Path::new(path))?;
        debug!("Loaded {} job(s) from {}", loaded.len(), path);
        jobs.extend(loaded);
    }

    if let Some(url) = args.url.as_deref() {
        let job = Job::new(0, args.method, url)
            .map_err(|err| SourceError::InvalidJob { source: err })?
            .with_headers(args.headers.iter().cloned().collect())
            .with_body(args.data.as_str());
        jobs.push(job);
    }

    let mut prompted_threshold = None;
    if let Some(prompt) = prompt
        && (args.interactive || jobs.is_empty())
    {
        let prompted = prompt.read_job(jobs.len())?;
        jobs.push(prompted.job);
        prompted_threshold = prompted.threshold;
    }

    let jobs = jobs
        .into_iter()
        .enumerate()
        .map(|(index, job)| job.with_index(index))
        .collect();
    Ok(JobSet {
        jobs,
        prompted_threshold,
    })
}
