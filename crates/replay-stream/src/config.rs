//! Decoder configuration.

/// Default bound on consecutive clock records consumed by a single read.
///
/// A corrupted or adversarial capture could front-load an arbitrarily long
/// run of clock records; the bound turns that livelock into an explicit
/// error. The default is far above anything a real recorder emits.
pub const DEFAULT_MAX_CONTROL_RUN: usize = 1 << 20;

/// Configuration for a [`MessageStreamReader`](crate::MessageStreamReader).
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Externally supplied session baseline, in absolute source clock units.
    ///
    /// When set, the first clock record in the stream reports its offset
    /// from this baseline instead of defining time zero itself.
    pub start_timestamp: Option<u64>,

    /// Bound on consecutive clock records consumed by one read.
    ///
    /// `None` disables the bound and accepts arbitrarily long runs.
    pub max_control_run: Option<usize>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            start_timestamp: None,
            max_control_run: Some(DEFAULT_MAX_CONTROL_RUN),
        }
    }
}

impl DecoderConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the externally supplied session baseline.
    #[must_use]
    pub const fn start_timestamp(mut self, timestamp: u64) -> Self {
        self.start_timestamp = Some(timestamp);
        self
    }

    /// Set the bound on consecutive clock records per read.
    #[must_use]
    pub const fn max_control_run(mut self, limit: usize) -> Self {
        self.max_control_run = Some(limit);
        self
    }

    /// Disable the clock-record run bound.
    #[must_use]
    pub const fn unbounded_control_runs(mut self) -> Self {
        self.max_control_run = None;
        self
    }
}
