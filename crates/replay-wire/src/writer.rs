//! Binary record stream writer.
//!
//! The capture-side counterpart of [`RecordReader`](crate::reader::RecordReader).
//! Records are framed as `kind varint, body-length varint, body bytes` and
//! appended to an in-memory buffer.

use bytes::{BufMut, Bytes, BytesMut};

use crate::codec::{write_string, write_varint};
use crate::record::{RawRecord, ReplayEvent, kind};

/// An append-only encoder for record streams.
#[derive(Debug, Default)]
pub struct RecordWriter {
    buf: BytesMut,
}

impl RecordWriter {
    /// Create an empty writer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a clock-synchronization record.
    pub fn push_timestamp(&mut self, timestamp: u64) {
        let mut body = BytesMut::new();
        write_varint(&mut body, timestamp);
        self.frame(kind::TIMESTAMP, &body);
    }

    /// Append a payload event.
    pub fn push_event(&mut self, event: &ReplayEvent) {
        let mut body = BytesMut::new();
        match event {
            ReplayEvent::MouseMove { x, y } => {
                write_varint(&mut body, u64::from(*x));
                write_varint(&mut body, u64::from(*y));
            }
            ReplayEvent::MouseClick {
                id,
                hesitation_time,
                label,
            } => {
                write_varint(&mut body, u64::from(*id));
                write_varint(&mut body, u64::from(*hesitation_time));
                write_string(&mut body, label);
            }
            ReplayEvent::ConsoleLog { level, value } => {
                write_string(&mut body, level);
                write_string(&mut body, value);
            }
            ReplayEvent::SetPageLocation { url, referrer } => {
                write_string(&mut body, url);
                write_string(&mut body, referrer);
            }
            ReplayEvent::SetViewportSize { width, height } => {
                write_varint(&mut body, u64::from(*width));
                write_varint(&mut body, u64::from(*height));
            }
            ReplayEvent::Unknown { data, .. } => {
                body.put_slice(data);
            }
        }
        self.frame(event.kind(), &body);
    }

    /// Append any raw record.
    pub fn push(&mut self, record: &RawRecord) {
        match record {
            RawRecord::Timestamp { timestamp } => self.push_timestamp(*timestamp),
            RawRecord::Event(event) => self.push_event(event),
        }
    }

    /// Encoded size so far, in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish and take the encoded stream.
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.buf.freeze()
    }

    fn frame(&mut self, record_kind: u64, body: &BytesMut) {
        write_varint(&mut self.buf, record_kind);
        write_varint(&mut self.buf, body.len() as u64);
        self.buf.put_slice(body);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writer_starts_empty() {
        let writer = RecordWriter::new();
        assert!(writer.is_empty());
        assert_eq!(writer.len(), 0);
    }

    #[test]
    fn timestamp_framing() {
        let mut writer = RecordWriter::new();
        writer.push_timestamp(5);
        // kind 0, length 1, body 0x05
        assert_eq!(writer.into_bytes().as_ref(), &[0x00, 0x01, 0x05]);
    }

    #[test]
    fn unknown_body_written_verbatim() {
        let mut writer = RecordWriter::new();
        writer.push_event(&ReplayEvent::Unknown {
            kind: 7,
            data: vec![0xaa, 0xbb],
        });
        assert_eq!(writer.into_bytes().as_ref(), &[0x07, 0x02, 0xaa, 0xbb]);
    }
}
