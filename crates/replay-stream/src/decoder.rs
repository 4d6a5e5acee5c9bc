//! Message stream decoding.
//!
//! [`MessageStreamReader`] turns a raw record stream into the normalized,
//! time-stamped, strictly ordered message sequence that playback consumes.
//! It drives its [`RecordSource`] pull by pull, folds clock records into a
//! [`SessionClock`], filters them out of the output, and stamps every
//! surviving payload record with a relative time and a gapless sequence
//! index.

use replay_wire::{RawRecord, RecordSource};

use crate::clock::SessionClock;
use crate::config::DecoderConfig;
use crate::error::{Result, StreamError};
use crate::types::SessionMessage;

/// A single-pass decoder over one recorded session.
///
/// The decoder is stateful and assumes one logical consumer advancing it
/// strictly in call order; it is not safe for concurrent callers without
/// external mutual exclusion. Once the source signals end of stream the
/// decoder enters a terminal state: every later call returns the marker
/// without touching the source again.
#[derive(Debug)]
pub struct MessageStreamReader<S> {
    source: S,
    clock: SessionClock,
    next_index: u64,
    exhausted: bool,
    max_control_run: Option<usize>,
}

impl<S: RecordSource> MessageStreamReader<S> {
    /// Create a decoder with the default configuration.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_config(source, DecoderConfig::default())
    }

    /// Create a decoder with an explicit configuration.
    #[must_use]
    pub fn with_config(source: S, config: DecoderConfig) -> Self {
        let clock = match config.start_timestamp {
            Some(timestamp) => SessionClock::with_baseline(timestamp),
            None => SessionClock::new(),
        };
        Self {
            source,
            clock,
            next_index: 0,
            exhausted: false,
            max_control_run: config.max_control_run,
        }
    }

    /// Pull the next replay message, or `None` at end of stream.
    ///
    /// Clock records are consumed silently: one call may read any number of
    /// raw records but emits at most one message. The end-of-stream marker is
    /// idempotent; after it has been returned once, further calls return it
    /// again without pulling the source or mutating clock or index state.
    pub fn read_next(&mut self) -> Result<Option<SessionMessage>> {
        if self.exhausted {
            return Ok(None);
        }

        let mut run = 0usize;
        loop {
            let Some(record) = self.source.read_record()? else {
                tracing::debug!(messages = self.next_index, "record source exhausted");
                self.exhausted = true;
                return Ok(None);
            };

            match record {
                RawRecord::Timestamp { timestamp } => {
                    self.clock.observe(timestamp);
                    tracing::trace!(
                        timestamp,
                        time = self.clock.current_time(),
                        "clock synchronization"
                    );
                    run += 1;
                    if let Some(limit) = self.max_control_run
                        && run > limit
                    {
                        tracing::warn!(limit, "clock record run exceeded bound");
                        return Err(StreamError::ControlRunExceeded { limit });
                    }
                }
                RawRecord::Event(event) => {
                    let message = SessionMessage {
                        time: self.clock.current_time(),
                        index: self.next_index,
                        event,
                    };
                    self.next_index += 1;
                    return Ok(Some(message));
                }
            }
        }
    }

    /// Whether the source has signaled end of stream.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Messages emitted so far; also the next sequence index.
    #[must_use]
    pub const fn messages_read(&self) -> u64 {
        self.next_index
    }

    /// The decoder's session clock.
    #[must_use]
    pub const fn clock(&self) -> &SessionClock {
        &self.clock
    }

    /// The underlying record source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<S: RecordSource> Iterator for MessageStreamReader<S> {
    type Item = Result<SessionMessage>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}

#[cfg(test)]
mod tests {
    use replay_wire::ReplayEvent;

    use super::*;

    /// In-memory source that counts pulls made after end of stream.
    struct VecSource {
        records: std::vec::IntoIter<RawRecord>,
        eof_signaled: bool,
        pulls_after_eof: usize,
    }

    impl VecSource {
        fn new(records: Vec<RawRecord>) -> Self {
            Self {
                records: records.into_iter(),
                eof_signaled: false,
                pulls_after_eof: 0,
            }
        }
    }

    impl RecordSource for VecSource {
        fn read_record(&mut self) -> replay_wire::Result<Option<RawRecord>> {
            match self.records.next() {
                Some(record) => Ok(Some(record)),
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

    fn click(label: &str) -> ReplayEvent {
        ReplayEvent::MouseClick {
            id: 1,
            hesitation_time: 0,
            label: label.into(),
        }
    }

    #[test]
    fn baseline_from_first_clock_record_only() {
        let mut reader = MessageStreamReader::new(VecSource::new(vec![
            RawRecord::Timestamp { timestamp: 1000 },
            click("a").into(),
            RawRecord::Timestamp { timestamp: 1500 },
            click("b").into(),
            RawRecord::Timestamp { timestamp: 900 },
            click("c").into(),
        ]));

        let a = reader.read_next().unwrap().unwrap();
        assert_eq!((a.time, a.index), (0, 0));
        let b = reader.read_next().unwrap().unwrap();
        assert_eq!((b.time, b.index), (500, 1));
        let c = reader.read_next().unwrap().unwrap();
        assert_eq!((c.time, c.index), (-100, 2));
        assert!(reader.read_next().unwrap().is_none());
    }

    #[test]
    fn payload_before_any_clock_record_is_time_zero() {
        let mut reader = MessageStreamReader::new(VecSource::new(vec![click("a").into()]));
        let a = reader.read_next().unwrap().unwrap();
        assert_eq!((a.time, a.index), (0, 0));
    }

    #[test]
    fn empty_source_is_immediately_exhausted() {
        let mut reader = MessageStreamReader::new(VecSource::new(vec![]));
        assert!(reader.read_next().unwrap().is_none());
        assert!(reader.is_exhausted());
        assert!(reader.read_next().unwrap().is_none());
    }

    #[test]
    fn trailing_clock_records_emit_nothing() {
        let mut reader = MessageStreamReader::new(VecSource::new(vec![
            click("a").into(),
            RawRecord::Timestamp { timestamp: 2000 },
        ]));

        let a = reader.read_next().unwrap().unwrap();
        assert_eq!((a.time, a.index), (0, 0));
        assert!(reader.read_next().unwrap().is_none());
        assert_eq!(reader.messages_read(), 1);
    }

    #[test]
    fn exhaustion_never_pulls_the_source_again() {
        let mut reader = MessageStreamReader::new(VecSource::new(vec![click("a").into()]));
        assert!(reader.read_next().unwrap().is_some());
        assert!(reader.read_next().unwrap().is_none());

        for _ in 0..5 {
            assert!(reader.read_next().unwrap().is_none());
        }
        assert_eq!(reader.messages_read(), 1);
        assert_eq!(reader.source().pulls_after_eof, 0);
    }

    #[test]
    fn control_run_bound_is_an_explicit_error() {
        let mut records: Vec<RawRecord> = (0..5)
            .map(|i| RawRecord::Timestamp { timestamp: 1000 + i })
            .collect();
        records.push(click("a").into());

        let config = DecoderConfig::new().max_control_run(4);
        let mut reader = MessageStreamReader::with_config(VecSource::new(records), config);
        assert!(matches!(
            reader.read_next(),
            Err(StreamError::ControlRunExceeded { limit: 4 })
        ));
    }

    #[test]
    fn unbounded_config_accepts_long_runs() {
        let mut records: Vec<RawRecord> = (0..10_000)
            .map(|i| RawRecord::Timestamp { timestamp: 1000 + i })
            .collect();
        records.push(click("a").into());

        let config = DecoderConfig::new().unbounded_control_runs();
        let mut reader = MessageStreamReader::with_config(VecSource::new(records), config);
        let a = reader.read_next().unwrap().unwrap();
        // Last clock record wins: 10999 - 1000.
        assert_eq!(a.time, 9999);
    }

    #[test]
    fn start_timestamp_predates_the_stream() {
        let config = DecoderConfig::new().start_timestamp(1000);
        let mut reader = MessageStreamReader::with_config(
            VecSource::new(vec![
                RawRecord::Timestamp { timestamp: 1500 },
                click("a").into(),
            ]),
            config,
        );
        let a = reader.read_next().unwrap().unwrap();
        assert_eq!(a.time, 500);
    }

    #[test]
    fn iterator_adapter_is_fused() {
        let reader = MessageStreamReader::new(VecSource::new(vec![
            RawRecord::Timestamp { timestamp: 10 },
            click("a").into(),
            click("b").into(),
        ]));

        let messages: Vec<SessionMessage> = reader.map(Result::unwrap).collect();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].index, 0);
        assert_eq!(messages[1].index, 1);
    }
}
