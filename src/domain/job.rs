use std::collections::BTreeMap;

use crate::error::ValidationError;

use super::HttpMethod;

/// One HTTP call to make and time.
///
/// Built once by a job source and moved through the pipeline; nothing
/// downstream mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    index: usize,
    method: HttpMethod,
    url: String,
    headers: BTreeMap<String, String>,
    body: Option<String>,
}

impl Job {
    /// Creates a job with no headers and no body.
    ///
    /// # Errors
    ///
    /// Returns `UrlEmpty` when the URL is blank. Whether the URL parses is
    /// left to the transport.
    pub fn new(index: usize, method: HttpMethod, url: &str) -> Result<Self, ValidationError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ValidationError::UrlEmpty);
        }
        Ok(Self {
            index,
            method,
            url: url.to_owned(),
            headers: BTreeMap::new(),
            body: None,
        })
    }

    #[must_use]
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// An empty body means "no body".
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        let body = body.into();
        self.body = if body.is_empty() { None } else { Some(body) };
        self
    }

    /// Re-numbers the job when several sources are concatenated.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    #[must_use]
    pub fn reference(&self) -> JobRef {
        JobRef {
            index: self.index,
            method: self.method,
            url: self.url.clone(),
        }
    }
}

/// What an outcome remembers about the job that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRef {
    pub index: usize,
    pub method: HttpMethod,
    pub url: String,
}
