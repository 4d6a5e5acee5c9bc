//! Scripted record sources for testing.
//!
//! [`MockSource`] replays a scripted sequence of outcomes (records, errors,
//! end of stream) without any capture data behind it, and instruments the
//! end-of-stream contract: it counts pulls made after exhaustion so tests can
//! assert that a well-behaved consumer never touches a drained source.
//!
//! # Example
//!
//! ```rust
//! use replay_stream::mock::MockSourceBuilder;
//! use replay_wire::{RecordSource, ReplayEvent};
//!
//! let mut source = MockSourceBuilder::new()
//!     .timestamp(1_000)
//!     .event(ReplayEvent::MouseMove { x: 1, y: 2 })
//!     .build();
//! assert!(source.read_record().unwrap().is_some());
//! ```

use std::collections::VecDeque;

use replay_wire::{RawRecord, RecordSource, ReplayEvent, WireError};

/// One scripted outcome.
#[derive(Debug)]
enum MockStep {
    Record(RawRecord),
    Error(WireError),
}

/// A record source driven by a script instead of capture data.
#[derive(Debug)]
pub struct MockSource {
    steps: VecDeque<MockStep>,
    eof_signaled: bool,
    pulls_after_eof: usize,
}

impl MockSource {
    /// Create a source that replays the given records then ends.
    #[must_use]
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self {
            steps: records.into_iter().map(MockStep::Record).collect(),
            eof_signaled: false,
            pulls_after_eof: 0,
        }
    }

    /// Whether end of stream has been signaled.
    #[must_use]
    pub const fn is_drained(&self) -> bool {
        self.eof_signaled
    }

    /// Pulls made after end of stream was first signaled.
    ///
    /// A consumer honoring the end-of-stream contract leaves this at zero.
    #[must_use]
    pub const fn pulls_after_eof(&self) -> usize {
        self.pulls_after_eof
    }
}

impl RecordSource for MockSource {
    fn read_record(&mut self) -> replay_wire::Result<Option<RawRecord>> {
        match self.steps.pop_front() {
            Some(MockStep::Record(record)) => Ok(Some(record)),
            Some(MockStep::Error(err)) => Err(err),
            None => {
                if self.eof_signaled {
                    self.pulls_after_eof += 1;
                }
                self.eof_signaled = true;
                Ok(None)
            }
        }
    }
}

/// Builder for scripted sources.
#[derive(Debug, Default)]
pub struct MockSourceBuilder {
    steps: Vec<MockStep>,
}

impl MockSourceBuilder {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a clock-synchronization record.
    #[must_use]
    pub fn timestamp(mut self, timestamp: u64) -> Self {
        self.steps.push(MockStep::Record(RawRecord::Timestamp {
            timestamp,
        }));
        self
    }

    /// Script a payload event.
    #[must_use]
    pub fn event(mut self, event: ReplayEvent) -> Self {
        self.steps.push(MockStep::Record(RawRecord::Event(event)));
        self
    }

    /// Script any raw record.
    #[must_use]
    pub fn record(mut self, record: RawRecord) -> Self {
        self.steps.push(MockStep::Record(record));
        self
    }

    /// Script a source fault.
    #[must_use]
    pub fn error(mut self, err: WireError) -> Self {
        self.steps.push(MockStep::Error(err));
        self
    }

    /// Build the scripted source.
    #[must_use]
    pub fn build(self) -> MockSource {
        MockSource {
            steps: self.steps.into(),
            eof_signaled: false,
            pulls_after_eof: 0,
        }
    }
}
