//! Timeline indexing of decoded sessions.
//!
//! Playback and seek UIs want the whole message list in memory: ordered by
//! sequence index for stable iteration, and bisectable by relative time for
//! jumping. [`Timeline`] is that accumulation.

use replay_wire::RecordSource;

use crate::decoder::MessageStreamReader;
use crate::error::Result;
use crate::types::SessionMessage;

/// An ordered, seekable index over a decoded session.
///
/// Messages are held in sequence-index order. Time-based lookups bisect on
/// `time` and therefore assume nondecreasing message times; a capture with
/// out-of-order clock records keeps its decoded times as data, but seek
/// results within the disordered span are unspecified.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    messages: Vec<SessionMessage>,
}

impl Timeline {
    /// Create an empty timeline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Drain a decoder to completion into a timeline.
    pub fn from_reader<S: RecordSource>(reader: &mut MessageStreamReader<S>) -> Result<Self> {
        let mut timeline = Self::new();
        while let Some(message) = reader.read_next()? {
            timeline.push(message);
        }
        Ok(timeline)
    }

    /// Append a message.
    pub fn push(&mut self, message: SessionMessage) {
        self.messages.push(message);
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the timeline holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Get a message by sequence index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SessionMessage> {
        self.messages.get(index)
    }

    /// All messages in sequence order.
    #[must_use]
    pub fn messages(&self) -> &[SessionMessage] {
        &self.messages
    }

    /// Relative time of the last message, or 0 when empty.
    #[must_use]
    pub fn duration(&self) -> i64 {
        self.messages.last().map_or(0, |m| m.time)
    }

    /// Resume position after jumping to `time`.
    ///
    /// Returns the number of messages at or before `time`, which is both the
    /// count a player must have applied after the jump and the index it
    /// resumes pulling from.
    #[must_use]
    pub fn position_at(&self, time: i64) -> usize {
        self.messages.partition_point(|m| m.time <= time)
    }

    /// The last message at or before `time`.
    #[must_use]
    pub fn message_at(&self, time: i64) -> Option<&SessionMessage> {
        self.position_at(time)
            .checked_sub(1)
            .and_then(|i| self.messages.get(i))
    }
}
