//! Timeline seeking example.
//!
//! This example builds a timeline from a decoded session and shows how a
//! player jumps to arbitrary points in time.
//!
//! Run with: `cargo run --example timeline_seek`

use replay_stream::{MessageStreamReader, Timeline};
use replay_wire::{RecordReader, RecordWriter, ReplayEvent};

fn main() -> replay_stream::Result<()> {
    println!("replay-stream Timeline Seek Example");
    println!("===================================\n");

    let mut writer = RecordWriter::new();
    for step in 0..20u64 {
        writer.push_timestamp(5_000 + step * 100);
        writer.push_event(&ReplayEvent::MouseMove {
            x: (step * 30) as u32,
            y: (step * 15) as u32,
        });
    }

    let mut reader = MessageStreamReader::new(RecordReader::new(writer.into_bytes()));
    let timeline = Timeline::from_reader(&mut reader)?;

    println!(
        "Timeline: {} messages over {} ms\n",
        timeline.len(),
        timeline.duration()
    );

    for jump in [0i64, 450, 1_050, 5_000] {
        let position = timeline.position_at(jump);
        match timeline.message_at(jump) {
            Some(message) => println!(
                "jump to {jump:>5} ms -> resume at #{position}, last applied {:?}",
                message.event
            ),
            None => println!("jump to {jump:>5} ms -> resume at #{position}, nothing applied yet"),
        }
    }

    Ok(())
}
