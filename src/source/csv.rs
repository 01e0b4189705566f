use std::path::Path;

use serde::Deserialize;

use crate::domain::{HttpMethod, Job};
use crate::error::SourceError;

use super::headers::{MalformedEntries, parse_header_pairs};

/// Separator between `key=value` pairs inside the CSV `headers` column.
const CSV_HEADER_SEPARATOR: char = ';';

#[derive(Debug, Default, Deserialize)]
struct CsvRow {
    #[serde(default)]
    method: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    headers: String,
    #[serde(default)]
    body: String,
}

/// Loads jobs from a CSV file with a `method,url,headers,body` header row.
///
/// # Errors
///
/// Returns a `SourceError` when the file is unreadable, a row is malformed
/// or the file has no data rows.
pub fn load_csv_jobs(path: &Path) -> Result<Vec<Job>, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|err| SourceError::ReadFile {
        path: path.to_path_buf(),
        source: err,
    })?;
    let jobs = parse_csv_jobs(&content, path)?;
    if jobs.is_empty() {
        return Err(SourceError::EmptyFile {
            path: path.to_path_buf(),
        });
    }
    Ok(jobs)
}

pub(crate) fn parse_csv_jobs(content: &str, path: &Path) -> Result<Vec<Job>, SourceError> {
    let csv_error = |err| SourceError::Csv {
        path: path.to_path_buf(),
        source: err,
    };
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());
    let columns = reader.headers().map_err(csv_error)?.clone();

    let mut jobs = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let line = record.position().map_or(0, csv::Position::line);
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row: CsvRow = record.deserialize(Some(&columns)).map_err(csv_error)?;
        jobs.push(row_to_job(row, jobs.len(), line)?);
    }
    Ok(jobs)
}

fn row_to_job(row: CsvRow, index: usize, line: u64) -> Result<Job, SourceError> {
    if row.method.is_empty() {
        return Err(SourceError::MissingField {
            line,
            field: "method",
        });
    }
    if row.url.is_empty() {
        return Err(SourceError::MissingField { line, field: "url" });
    }
    let method: HttpMethod = row
        .method
        .parse()
        .map_err(|err| SourceError::InvalidRow { line, source: err })?;
    let headers = parse_header_pairs(&row.headers, CSV_HEADER_SEPARATOR, MalformedEntries::Reject)
        .map_err(|entry| SourceError::MalformedHeader { line, entry })?;
    let job = Job::new(index, method, &row.url)
        .map_err(|err| SourceError::InvalidRow { line, source: err })?;
    Ok(job.with_headers(headers).with_body(row.body))
}
