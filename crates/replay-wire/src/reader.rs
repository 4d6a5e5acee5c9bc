//! Binary record stream reader.
//!
//! The wire layout is `kind varint, body-length varint, body bytes`. The
//! explicit body length is what keeps the stream forward-compatible: a reader
//! that does not recognize a kind can still frame the record and hand the
//! body through untouched, and known kinds may grow trailing fields that old
//! readers skip.

use std::io::Read;

use bytes::{Buf, Bytes};

use crate::codec::{read_bytes, read_string, read_varint, read_varint_u32};
use crate::error::Result;
use crate::record::{RawRecord, ReplayEvent, kind};
use crate::source::RecordSource;

/// A [`RecordSource`] over a fully loaded capture buffer.
///
/// Captures are read as a whole (the recording end uploads complete files),
/// so the reader owns a [`Bytes`] buffer and consumes it front to back. An
/// empty buffer yields the end-of-stream marker on every pull.
#[derive(Debug)]
pub struct RecordReader {
    buf: Bytes,
}

impl RecordReader {
    /// Create a reader over a capture buffer.
    #[must_use]
    pub fn new(buf: impl Into<Bytes>) -> Self {
        Self { buf: buf.into() }
    }

    /// Load a capture from any [`Read`] implementation.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::new(data))
    }

    /// Bytes left in the capture buffer.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn read_one(&mut self) -> Result<RawRecord> {
        let record_kind = read_varint(&mut self.buf)?;
        let len = usize::try_from(read_varint(&mut self.buf)?)
            .map_err(|_| crate::error::WireError::IntOutOfRange)?;
        let mut body = read_bytes(&mut self.buf, len)?;

        // Trailing bytes in a known body are newer fields; leave them unread.
        let record = match record_kind {
            kind::TIMESTAMP => RawRecord::Timestamp {
                timestamp: read_varint(&mut body)?,
            },
            kind::MOUSE_MOVE => ReplayEvent::MouseMove {
                x: read_varint_u32(&mut body)?,
                y: read_varint_u32(&mut body)?,
            }
            .into(),
            kind::MOUSE_CLICK => ReplayEvent::MouseClick {
                id: read_varint_u32(&mut body)?,
                hesitation_time: read_varint_u32(&mut body)?,
                label: read_string(&mut body)?,
            }
            .into(),
            kind::CONSOLE_LOG => ReplayEvent::ConsoleLog {
                level: read_string(&mut body)?,
                value: read_string(&mut body)?,
            }
            .into(),
            kind::SET_PAGE_LOCATION => ReplayEvent::SetPageLocation {
                url: read_string(&mut body)?,
                referrer: read_string(&mut body)?,
            }
            .into(),
            kind::SET_VIEWPORT_SIZE => ReplayEvent::SetViewportSize {
                width: read_varint_u32(&mut body)?,
                height: read_varint_u32(&mut body)?,
            }
            .into(),
            other => {
                tracing::debug!(kind = other, len, "unknown record kind, passing through");
                ReplayEvent::Unknown {
                    kind: other,
                    data: body.to_vec(),
                }
                .into()
            }
        };

        Ok(record)
    }
}

impl RecordSource for RecordReader {
    fn read_record(&mut self) -> Result<Option<RawRecord>> {
        if !self.buf.has_remaining() {
            return Ok(None);
        }
        self.read_one().map(Some)
    }
}
