//! Timeout helpers used across the crate.
//!
//! Reads are either bounded by a short probe timeout (while synchronizing) or
//! block until satisfied (`None`). These helpers keep that vocabulary in one
//! place.

use std::time::Duration;

/// Per-probe read timeout used while looking for the bridge marker.
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 10;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default probe timeout as Duration.
pub fn default_probe_timeout() -> Duration {
    ms(DEFAULT_PROBE_TIMEOUT_MS)
}

/// Read timeout after synchronization: block until the read is satisfied.
pub const BLOCKING: Option<Duration> = None;
