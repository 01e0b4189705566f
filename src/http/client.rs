use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Method};
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::domain::{HttpMethod, Job};
use crate::error::{AppError, AppResult, HttpError, TransportError};

use super::transport::{Transport, TransportResponse};

/// `reqwest`-backed transport. One client (and connection pool) is built
/// per run and shared by every worker.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| {
                error!("Failed to build HTTP client: {}", err);
                AppError::http(HttpError::BuildClientFailed { source: err })
            })?;
        Ok(Self { client, timeout })
    }

    fn map_error(&self, err: &reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                timeout: self.timeout,
            }
        } else if err.is_builder() {
            TransportError::Build {
                message: err.to_string(),
            }
        } else if err.is_connect() {
            TransportError::Connect {
                message: err.to_string(),
            }
        } else {
            TransportError::Request {
                message: err.to_string(),
            }
        }
    }
}

const fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Options => Method::OPTIONS,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, job: &Job) -> Result<TransportResponse, TransportError> {
        let mut request_builder = self
            .client
            .request(to_reqwest_method(job.method()), job.url());
        for (key, value) in job.headers() {
            request_builder = request_builder.header(key, value);
        }
        if let Some(body) = job.body() {
            request_builder = request_builder.body(body.to_owned());
        }

        let request = request_builder
            .build()
            .map_err(|err| self.map_error(&err))?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|err| self.map_error(&err))?;

        let status = response.status().as_u16();
        let timeout = self.timeout;
        let body = response
            .bytes_stream()
            .map(move |chunk| match chunk {
                Ok(bytes) => Ok(u64::try_from(bytes.len()).unwrap_or(u64::MAX)),
                Err(err) if err.is_timeout() => Err(TransportError::Timeout { timeout }),
                Err(err) => Err(TransportError::Body {
                    message: err.to_string(),
                }),
            })
            .boxed();
        Ok(TransportResponse::new(status, body))
    }
}
