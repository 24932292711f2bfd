use chrono::{DateTime, Duration, Utc};

/// Minimum age a remote post must reach before it may be pruned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    horizon: Duration,
}

impl RetentionPolicy {
    pub fn new(horizon: Duration) -> Self {
        Self { horizon }
    }

    pub fn from_days(days: u32) -> Self {
        Self::new(Duration::days(i64::from(days)))
    }

    pub fn horizon_days(&self) -> i64 {
        self.horizon.num_days()
    }

    /// Posts created strictly before this instant are old enough.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.horizon
    }
}
