use std::sync::atomic::{AtomicI64, Ordering};

use serde::{Deserialize, Serialize};

// Record identity = millisecond timestamp at creation, bumped on collision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Hands out timestamp-shaped identifiers that never repeat.
///
/// Each id is the current wall-clock millisecond unless that would not be
/// strictly greater than both the last id issued by this generator and the
/// caller-supplied `floor` (usually the largest id already stored).
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self, now_millis: i64, floor: Option<RecordId>) -> RecordId {
        let floor = floor.map_or(i64::MIN, RecordId::as_i64);
        let pick = |last: i64| now_millis.max(last.saturating_add(1)).max(floor.saturating_add(1));

        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(pick(last)))
            .unwrap_or_else(|prev| prev);
        RecordId(pick(prev))
    }
}
