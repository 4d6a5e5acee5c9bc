//! Decoded message types.

use replay_wire::ReplayEvent;
use serde::{Deserialize, Serialize};

/// A payload event normalized for replay.
///
/// This is the unit playback and timeline logic consume: the payload of a raw
/// record, stamped with the session-relative time it belongs to and its
/// position in the decoded stream. Clock-synchronization records never become
/// messages, so `index` counts emitted messages only and is gapless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMessage {
    /// Offset from the session baseline, in source clock units.
    ///
    /// Negative when the capture reported an out-of-order clock; the value is
    /// surfaced as data, not rejected.
    pub time: i64,

    /// Position in the decoded stream: strictly increasing, gapless, from 0.
    pub index: u64,

    /// The decoded payload.
    pub event: ReplayEvent,
}

impl SessionMessage {
    /// The wire id of the underlying event.
    #[must_use]
    pub const fn kind(&self) -> u64 {
        self.event.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_delegates_to_event() {
        let message = SessionMessage {
            time: 0,
            index: 0,
            event: ReplayEvent::MouseMove { x: 1, y: 2 },
        };
        assert_eq!(message.kind(), replay_wire::kind::MOUSE_MOVE);
    }

    #[test]
    fn serializes_with_tagged_event() {
        let message = SessionMessage {
            time: -100,
            index: 2,
            event: ReplayEvent::ConsoleLog {
                level: "error".into(),
                value: "boom".into(),
            },
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"time\":-100"));
        assert!(json.contains("\"type\":\"console_log\""));
    }
}
