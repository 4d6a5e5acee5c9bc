//! replay-stream: Message stream decoding for session replay
//!
//! This crate turns the raw record stream of a recorded session into the
//! normalized message sequence a player or timeline consumes. Raw records
//! arrive from a [`replay_wire::RecordSource`] carrying their own embedded
//! clock; [`MessageStreamReader`] derives session-relative time from the
//! clock records, filters them out, and stamps every surviving payload with a
//! gapless sequence index. [`Timeline`] accumulates the result into an
//! ordered, time-bisectable index.
//!
//! # Quick Start
//!
//! ```rust
//! use replay_stream::{MessageStreamReader, Timeline};
//! use replay_wire::{RecordReader, RecordWriter, ReplayEvent};
//!
//! fn main() -> replay_stream::Result<()> {
//!     let mut writer = RecordWriter::new();
//!     writer.push_timestamp(1_000);
//!     writer.push_event(&ReplayEvent::MouseMove { x: 10, y: 20 });
//!     writer.push_timestamp(1_500);
//!     writer.push_event(&ReplayEvent::MouseMove { x: 30, y: 40 });
//!
//!     let mut reader = MessageStreamReader::new(RecordReader::new(writer.into_bytes()));
//!     let timeline = Timeline::from_reader(&mut reader)?;
//!
//!     assert_eq!(timeline.len(), 2);
//!     assert_eq!(timeline.duration(), 500);
//!     assert_eq!(timeline.position_at(250), 1);
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod decoder;
pub mod error;
pub mod export;
pub mod timeline;
pub mod types;

/// Scripted record sources for testing.
#[cfg(feature = "mock")]
pub mod mock;

// Re-export primary types
pub use clock::SessionClock;
pub use config::{DEFAULT_MAX_CONTROL_RUN, DecoderConfig};
pub use decoder::MessageStreamReader;
pub use error::{Result, StreamError};
pub use export::{read_messages, write_messages};
#[cfg(feature = "mock")]
pub use mock::{MockSource, MockSourceBuilder};
pub use timeline::Timeline;
pub use types::SessionMessage;
