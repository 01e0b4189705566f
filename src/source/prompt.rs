use std::io::{BufRead, Write};

use crate::domain::{HttpMethod, Job};
use crate::error::SourceError;

use super::headers::{MalformedEntries, parse_header_pairs};

/// A job entered by hand, plus the threshold answer if one was given.
#[derive(Debug)]
pub struct PromptedJob {
    pub job: Job,
    pub threshold: Option<String>,
}

/// Asks for one call on `input`, echoing questions to `output`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks for method, headers, body, URL and threshold, in that order.
    /// Header entries that are not `key=value` are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when input ends early, the method or URL is empty
    /// or the method is unknown.
    pub fn read_job(&mut self, index: usize) -> Result<PromptedJob, SourceError> {
        let method = self.ask("Enter API method (GET/POST/PUT/DELETE): ", "method")?;
        if method.is_empty() {
            return Err(SourceError::PromptEmpty { field: "method" });
        }
        let method: HttpMethod = method
            .parse()
            .map_err(|err| SourceError::InvalidJob { source: err })?;

        let headers = self.ask(
            "Enter API headers (in key=value format, separated by commas): ",
            "headers",
        )?;
        let headers = parse_header_pairs(&headers, ',', MalformedEntries::Skip).unwrap_or_default();

        let body = self.ask("Enter API request body: ", "body")?;

        let url = self.ask("Enter API URL: ", "URL")?;
        if url.is_empty() {
            return Err(SourceError::PromptEmpty { field: "URL" });
        }

        let threshold = self.ask(
            "Enter acceptable response time threshold (in seconds, blank for default): ",
            "threshold",
        )?;

        let job = Job::new(index, method, &url)
            .map_err(|err| SourceError::InvalidJob { source: err })?
            .with_headers(headers)
            .with_body(body);
        Ok(PromptedJob {
            job,
            threshold: (!threshold.is_empty()).then_some(threshold),
        })
    }

    fn ask(&mut self, question: &str, field: &'static str) -> Result<String, SourceError> {
        write!(self.output, "{}", question)
            .and_then(|()| self.output.flush())
            .map_err(|err| SourceError::Prompt { source: err })?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|err| SourceError::Prompt { source: err })?;
        if read == 0 {
            return Err(SourceError::PromptClosed { field });
        }
        Ok(line.trim().to_owned())
    }
}
