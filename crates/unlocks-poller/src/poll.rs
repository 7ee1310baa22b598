//! Two-poll orchestration.
//!
//! The endpoint is fetched twice, strictly in sequence, and the two decoded
//! snapshots are compared. The polls must never overlap: the point is to
//! observe the endpoint at two distinct moments.

use tracing::info;
use unlocks_core::{compute_delta, decode_snapshot};
use unlocks_types::{DeltaResult, Snapshot};

use crate::config::PollerConfig;
use crate::error::{Poll, PollerError};
use crate::fetch::Fetcher;

/// Fetch and decode the first and then the second snapshot.
///
/// Sleeps for `config.poll_interval` between the two fetches when it is
/// non-zero.
///
/// # Errors
///
/// Returns [`PollerError::Fetch`] if either request fails and
/// [`PollerError::Decode`] if either document is not a snapshot. A failed
/// first poll means the second is never issued.
pub async fn poll_twice(
    fetcher: &Fetcher,
    config: &PollerConfig,
) -> Result<(Snapshot, Snapshot), PollerError> {
    let first = poll_once(fetcher, &config.source_url, Poll::First).await?;

    if !config.poll_interval.is_zero() {
        info!(
            interval_ms = config.poll_interval.as_millis(),
            "waiting before second poll"
        );
        tokio::time::sleep(config.poll_interval).await;
    }

    let second = poll_once(fetcher, &config.source_url, Poll::Second).await?;
    Ok((first, second))
}

async fn poll_once(fetcher: &Fetcher, url: &str, poll: Poll) -> Result<Snapshot, PollerError> {
    let raw = fetcher.fetch(url).await?;
    let snapshot = decode_snapshot(raw).map_err(|source| PollerError::Decode { poll, source })?;
    info!(poll = %poll, entities = snapshot.len(), "snapshot received");
    Ok(snapshot)
}

/// Run one complete poll-and-compare cycle.
///
/// # Errors
///
/// Propagates any configuration, fetch, decode or lookup failure.
pub async fn run(config: &PollerConfig) -> Result<DeltaResult, PollerError> {
    let fetcher = Fetcher::new(config.fetch_timeout)?;
    let (first, second) = poll_twice(&fetcher, config).await?;
    let delta = compute_delta(&first, &second)?;
    info!(
        entities = delta.len(),
        new_achievements = delta.total_new_achievements(),
        "delta computed"
    );
    Ok(delta)
}
