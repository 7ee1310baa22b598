//! Error types for the poller.
//!
//! Uses `thiserror` for typed errors that surface through the whole run:
//! configuration, HTTP fetches, snapshot decoding and the delta itself.

use core::fmt;

use reqwest::StatusCode;
use unlocks_core::DeltaError;

/// Which of the two polls a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// The baseline poll.
    First,
    /// The poll compared against the baseline.
    Second,
}

impl fmt::Display for Poll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// Failures of a single GET against the endpoint.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, DNS, timeout or body transfer failure.
    #[error("request to {url} failed: {source}")]
    Network {
        /// The requested URL.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("{url} returned {status}: {body}")]
    HttpStatus {
        /// The requested URL.
        url: String,
        /// Response status.
        status: StatusCode,
        /// Response body, kept for diagnostics.
        body: String,
    },

    /// The response body is not valid JSON.
    #[error("response from {url} is not valid JSON: {source}")]
    Parse {
        /// The requested URL.
        url: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur during a poller run.
#[derive(Debug, thiserror::Error)]
pub enum PollerError {
    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// One of the two fetches failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A fetched document does not have the snapshot shape.
    #[error("{poll} snapshot rejected: {source}")]
    Decode {
        /// The poll whose document was rejected.
        poll: Poll,
        /// The decode failure.
        #[source]
        source: DeltaError,
    },

    /// The two snapshots could not be compared.
    #[error(transparent)]
    Delta(#[from] DeltaError),

    /// The result could not be rendered.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}
