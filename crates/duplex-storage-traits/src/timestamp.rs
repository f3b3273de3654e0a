//! Millisecond-precision unix timestamps.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Unix-epoch milliseconds.
///
/// Message timestamps are assigned at the storage layer with
/// [`Timestamp::now`], never accepted from clients, so the per-conversation
/// total order does not depend on client clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The current wall-clock time.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64;
        Self(millis)
    }

    /// Wrap a raw unix-millisecond value.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// The raw unix-millisecond value.
    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
