use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration_arg;
use crate::domain::{HttpMethod, Job};
use crate::error::{SourceError, ValidationError};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub threshold: Option<DurationValue>,
    #[serde(alias = "concurrency")]
    pub workers: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub fail_fast: Option<bool>,
    pub csv: Option<String>,
    pub export_json: Option<String>,
    pub quiet: Option<bool>,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default, alias = "data")]
    pub body: String,
}

impl JobConfig {
    /// # Errors
    ///
    /// Returns an error when the method or URL is missing or invalid.
    pub fn to_job(&self, index: usize) -> Result<Job, SourceError> {
        let method: HttpMethod = self
            .method
            .parse()
            .map_err(|err| SourceError::InvalidJob { source: err })?;
        let job = Job::new(index, method, &self.url)
            .map_err(|err| SourceError::InvalidJob { source: err })?;
        Ok(job
            .with_headers(self.headers.clone())
            .with_body(self.body.as_str()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }

    /// Raw form handed to the lenient threshold parser.
    pub(crate) fn to_raw(&self) -> String {
        match self {
            DurationValue::Seconds(secs) => secs.to_string(),
            DurationValue::Text(text) => text.clone(),
        }
    }
}
