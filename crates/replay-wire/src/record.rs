//! Raw record data model.
//!
//! This module defines the records that make up a captured session stream:
//!
//! - [`RawRecord`]: the tagged union produced by a record source. Exactly one
//!   variant, [`RawRecord::Timestamp`], is a clock-synchronization control
//!   record; everything else is replay payload.
//! - [`ReplayEvent`]: the payload union. Kinds not known to this crate are
//!   carried through as [`ReplayEvent::Unknown`] rather than rejected, so a
//!   newer capture format can flow through an older pipeline.

use serde::{Deserialize, Serialize};

/// Stable wire ids for record kinds.
pub mod kind {
    /// Clock synchronization record.
    pub const TIMESTAMP: u64 = 0;
    /// Document location change.
    pub const SET_PAGE_LOCATION: u64 = 4;
    /// Viewport resize.
    pub const SET_VIEWPORT_SIZE: u64 = 5;
    /// Pointer movement.
    pub const MOUSE_MOVE: u64 = 20;
    /// Pointer click.
    pub const MOUSE_CLICK: u64 = 21;
    /// Console output entry.
    pub const CONSOLE_LOG: u64 = 22;
}

/// A replay payload event.
///
/// The catalog below is representative, not exhaustive; capture formats grow
/// new kinds over time and those arrive as [`ReplayEvent::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// Pointer moved to viewport coordinates.
    MouseMove {
        /// Horizontal position in CSS pixels.
        x: u32,
        /// Vertical position in CSS pixels.
        y: u32,
    },

    /// Pointer clicked on a tracked element.
    MouseClick {
        /// Tracked element id.
        id: u32,
        /// Milliseconds the pointer hovered before clicking.
        hesitation_time: u32,
        /// Accessible label of the clicked element.
        label: String,
    },

    /// A console entry was written by the page.
    ConsoleLog {
        /// Severity level ("log", "warn", "error", ...).
        level: String,
        /// Rendered log text.
        value: String,
    },

    /// The document navigated to a new location.
    SetPageLocation {
        /// Destination URL.
        url: String,
        /// Referrer URL, empty when absent.
        referrer: String,
    },

    /// The viewport was resized.
    SetViewportSize {
        /// Viewport width in CSS pixels.
        width: u32,
        /// Viewport height in CSS pixels.
        height: u32,
    },

    /// A kind this crate does not know. Carried through unchanged.
    Unknown {
        /// The wire id of the unrecognized kind.
        kind: u64,
        /// The undecoded record body.
        data: Vec<u8>,
    },
}

impl ReplayEvent {
    /// Get the wire id of this event.
    #[must_use]
    pub const fn kind(&self) -> u64 {
        match self {
            Self::MouseMove { .. } => kind::MOUSE_MOVE,
            Self::MouseClick { .. } => kind::MOUSE_CLICK,
            Self::ConsoleLog { .. } => kind::CONSOLE_LOG,
            Self::SetPageLocation { .. } => kind::SET_PAGE_LOCATION,
            Self::SetViewportSize { .. } => kind::SET_VIEWPORT_SIZE,
            Self::Unknown { kind, .. } => *kind,
        }
    }
}

/// A raw record as pulled from a record source.
///
/// Not yet time-normalized: [`RawRecord::Timestamp`] records carry the
/// absolute source clock and exist only to synchronize downstream decoding.
/// They never reach replay consumers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRecord {
    /// Clock synchronization: the absolute source timestamp in milliseconds.
    Timestamp {
        /// Absolute timestamp, source clock units.
        timestamp: u64,
    },

    /// Replay payload.
    Event(ReplayEvent),
}

impl RawRecord {
    /// Whether this record is a clock-synchronization control record.
    #[must_use]
    pub const fn is_timestamp(&self) -> bool {
        matches!(self, Self::Timestamp { .. })
    }

    /// Get the wire id of this record.
    #[must_use]
    pub const fn kind(&self) -> u64 {
        match self {
            Self::Timestamp { .. } => kind::TIMESTAMP,
            Self::Event(event) => event.kind(),
        }
    }
}

impl From<ReplayEvent> for RawRecord {
    fn from(event: ReplayEvent) -> Self {
        Self::Event(event)
    }
}
