//! replay-wire: Raw record layer for recorded session streams
//!
//! This crate owns the lowest layer of the session replay pipeline: the
//! record data model, the binary codec that frames records on the wire, and
//! the pull-based [`RecordSource`] contract that everything downstream
//! consumes.
//!
//! # Quick Start
//!
//! ```rust
//! use replay_wire::{RawRecord, RecordReader, RecordSource, RecordWriter, ReplayEvent};
//!
//! fn main() -> replay_wire::Result<()> {
//!     // Capture side: frame a few records.
//!     let mut writer = RecordWriter::new();
//!     writer.push_timestamp(1_000);
//!     writer.push_event(&ReplayEvent::MouseMove { x: 10, y: 20 });
//!
//!     // Replay side: pull them back in capture order.
//!     let mut reader = RecordReader::new(writer.into_bytes());
//!     while let Some(record) = reader.read_record()? {
//!         match record {
//!             RawRecord::Timestamp { timestamp } => println!("clock: {timestamp}"),
//!             RawRecord::Event(event) => println!("event: {event:?}"),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Wire Format
//!
//! Every record is `kind varint, body-length varint, body bytes`, with
//! unsigned LEB128 varints and length-prefixed UTF-8 strings. The explicit
//! body length makes unrecognized kinds skippable, so newer capture formats
//! flow through older pipelines as [`ReplayEvent::Unknown`] instead of
//! failing the stream.

pub mod codec;
pub mod error;
pub mod reader;
pub mod record;
pub mod source;
pub mod writer;

// Re-export primary types
pub use bytes::Bytes;
pub use error::{Result, WireError};
pub use reader::RecordReader;
pub use record::{RawRecord, ReplayEvent, kind};
pub use source::RecordSource;
pub use writer::RecordWriter;
