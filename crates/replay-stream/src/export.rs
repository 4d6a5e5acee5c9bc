//! JSON-lines export of decoded sessions.
//!
//! One JSON object per line, one line per message. This is the hand-off
//! format between the decoding pipeline and indexing or viewer layers that
//! want the session without speaking the binary record format.

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::types::SessionMessage;

/// Write messages as JSON lines.
pub fn write_messages<W: Write>(writer: &mut W, messages: &[SessionMessage]) -> Result<()> {
    for message in messages {
        serde_json::to_writer(&mut *writer, message)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Read messages back from JSON lines.
///
/// Blank lines are skipped; anything else must parse as a message.
pub fn read_messages<R: BufRead>(reader: R) -> Result<Vec<SessionMessage>> {
    let mut messages = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        messages.push(serde_json::from_str(&line)?);
    }
    Ok(messages)
}
