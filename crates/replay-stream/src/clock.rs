//! Session clock tracking.
//!
//! A recorded stream carries its own clock as embedded synchronization
//! records: each one reports the absolute source timestamp, and every payload
//! record that follows belongs to that instant. [`SessionClock`] folds those
//! observations into a session-relative time.

/// Tracks the session baseline and the current session-relative time.
///
/// The baseline is the absolute timestamp of the first synchronization record
/// observed (or one supplied up front via [`SessionClock::with_baseline`])
/// and never changes afterwards. Relative time is recomputed on every
/// observation as `timestamp - baseline` and may go negative when the source
/// reports an earlier absolute time; ordering is the producer's contract, so
/// no clamping or reordering happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionClock {
    baseline: Option<u64>,
    current: i64,
}

impl SessionClock {
    /// Create a clock with no baseline yet.
    ///
    /// Until the first observation, [`current_time`](Self::current_time)
    /// reads 0, so payload records ahead of any synchronization record are
    /// stamped at time zero rather than treated as an error.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            baseline: None,
            current: 0,
        }
    }

    /// Create a clock with an externally supplied baseline.
    ///
    /// The first synchronization record then reports its offset from this
    /// baseline instead of defining time zero itself. A baseline of 0 is a
    /// legitimate absolute timestamp and is honored as such.
    #[must_use]
    pub const fn with_baseline(baseline: u64) -> Self {
        Self {
            baseline: Some(baseline),
            current: 0,
        }
    }

    /// Fold in one synchronization record.
    pub fn observe(&mut self, timestamp: u64) {
        match self.baseline {
            None => {
                self.baseline = Some(timestamp);
                self.current = 0;
            }
            Some(baseline) => {
                self.current = timestamp as i64 - baseline as i64;
            }
        }
    }

    /// The current session-relative time.
    #[must_use]
    pub const fn current_time(&self) -> i64 {
        self.current
    }

    /// The session baseline, if one has been established.
    #[must_use]
    pub const fn baseline(&self) -> Option<u64> {
        self.baseline
    }
}
