//! Session decoding example.
//!
//! This example frames a small captured session, decodes it back into
//! time-stamped messages, and prints the result.
//!
//! Run with: `cargo run --example decode_session`

use replay_stream::MessageStreamReader;
use replay_wire::{RecordReader, RecordWriter, ReplayEvent};

fn main() -> replay_stream::Result<()> {
    println!("replay-stream Session Decoding Example");
    println!("======================================\n");

    // Capture side: a short visit with two clock syncs.
    let mut writer = RecordWriter::new();
    writer.push_timestamp(1_700_000_000_000);
    writer.push_event(&ReplayEvent::SetPageLocation {
        url: "https://example.com/".into(),
        referrer: String::new(),
    });
    writer.push_event(&ReplayEvent::SetViewportSize {
        width: 1280,
        height: 720,
    });
    writer.push_timestamp(1_700_000_000_450);
    writer.push_event(&ReplayEvent::MouseMove { x: 640, y: 360 });
    writer.push_event(&ReplayEvent::MouseClick {
        id: 17,
        hesitation_time: 90,
        label: "Sign in".into(),
    });
    writer.push_timestamp(1_700_000_001_200);
    writer.push_event(&ReplayEvent::ConsoleLog {
        level: "warn".into(),
        value: "session token expires soon".into(),
    });

    let bytes = writer.into_bytes();
    println!("Captured {} bytes\n", bytes.len());

    // Replay side: normalized, time-stamped, strictly ordered messages.
    let mut reader = MessageStreamReader::new(RecordReader::new(bytes));
    while let Some(message) = reader.read_next()? {
        println!("[{:>5} ms] #{} {:?}", message.time, message.index, message.event);
    }

    println!("\nDecoded {} messages", reader.messages_read());
    Ok(())
}
