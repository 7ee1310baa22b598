//! HTTP fetcher for the achievement endpoint.
//!
//! One GET per call via `reqwest`, a status check, then a JSON parse of the
//! body. The document shape is not checked here; see
//! [`unlocks_core::decode_snapshot`].

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error};

use crate::error::{FetchError, PollerError};

/// Issues GET requests and parses JSON responses.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    /// Create a fetcher, optionally bounding every request by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`PollerError::Config`] if the HTTP client cannot be built.
    pub fn new(timeout: Option<Duration>) -> Result<Self, PollerError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| PollerError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch `url` and return the parsed JSON body.
    ///
    /// Failures are logged here, once, and then returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`], [`FetchError::HttpStatus`] or
    /// [`FetchError::Parse`].
    pub async fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        let result = self.try_fetch(url).await;
        if let Err(e) = &result {
            error!(url = %url, error = %e, "failed to fetch data");
        }
        result
    }

    async fn try_fetch(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(FetchError::HttpStatus {
                url: url.to_owned(),
                status,
                body,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Network {
            url: url.to_owned(),
            source,
        })?;

        let value = serde_json::from_str(&body).map_err(|source| FetchError::Parse {
            url: url.to_owned(),
            source,
        })?;

        debug!(url = %url, status = status.as_u16(), bytes = body.len(), "response parsed");
        Ok(value)
    }
}
