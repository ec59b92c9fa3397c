//! Clock seam for time-dependent marketplace logic.
//!
//! Listing visibility windows close and favorite rows are stamped against
//! the current time; routing both through this trait keeps that logic
//! deterministic under test (see `mocks::MockTime`).

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current Unix timestamp, in seconds.
pub trait TimeProvider: Send + Sync {
    fn now_unix(&self) -> u64;
}

/// Production clock backed by `SystemTime`.
///
/// A clock before the epoch reads as 0 rather than failing; every consumer
/// treats timestamps as best-effort display/stamping data.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
    pub const fn new() -> Self {
        Self
    }
}

impl TimeProvider for SystemTimeProvider {
    fn now_unix(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
