//! Shared blocking HTTP client

use super::ServiceError;
use log::debug;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around a reqwest client with the configured timeout
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// # Errors
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` with query parameters; any status is returned to the caller
    pub(crate) fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<Response, ServiceError> {
        let response = self.client.get(url).query(query).send()?;
        debug!("GET {url} -> {}", response.status());
        Ok(response)
    }
}

/// Turn a non-success status into an error
pub(crate) fn expect_success(response: Response) -> Result<Response, ServiceError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ServiceError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}
