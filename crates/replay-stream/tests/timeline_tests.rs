//! Integration tests for timeline indexing over decoded sessions.

use replay_stream::{MessageStreamReader, Timeline};
use replay_wire::{RecordReader, RecordWriter, ReplayEvent};

/// A small browsing session: navigation, a few moves, a click, console noise.
fn session_reader() -> MessageStreamReader<RecordReader> {
    let mut writer = RecordWriter::new();
    writer.push_timestamp(10_000);
    writer.push_event(&ReplayEvent::SetPageLocation {
        url: "https://shop.example/cart".into(),
        referrer: String::new(),
    });
    writer.push_timestamp(10_250);
    writer.push_event(&ReplayEvent::MouseMove { x: 100, y: 80 });
    writer.push_event(&ReplayEvent::MouseMove { x: 180, y: 120 });
    writer.push_timestamp(10_600);
    writer.push_event(&ReplayEvent::MouseClick {
        id: 42,
        hesitation_time: 350,
        label: "Checkout".into(),
    });
    writer.push_timestamp(11_000);
    writer.push_event(&ReplayEvent::ConsoleLog {
        level: "error".into(),
        value: "payment widget failed to load".into(),
    });

    MessageStreamReader::new(RecordReader::new(writer.into_bytes()))
}

#[test]
fn from_reader_drains_the_decoder() {
    let mut reader = session_reader();
    let timeline = Timeline::from_reader(&mut reader).unwrap();

    assert!(reader.is_exhausted());
    assert_eq!(timeline.len(), 5);
    assert_eq!(timeline.duration(), 1000);

    let times: Vec<i64> = timeline.messages().iter().map(|m| m.time).collect();
    assert_eq!(times, vec![0, 250, 250, 600, 1000]);
    let indices: Vec<u64> = timeline.messages().iter().map(|m| m.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
}

#[test]
fn seek_positions_match_the_clock() {
    let mut reader = session_reader();
    let timeline = Timeline::from_reader(&mut reader).unwrap();

    // Jump before anything happened.
    assert_eq!(timeline.position_at(-1), 0);
    // Mid-session jumps land after everything already applied.
    assert_eq!(timeline.position_at(250), 3);
    assert_eq!(timeline.position_at(400), 3);
    assert_eq!(timeline.position_at(600), 4);
    // Past the end.
    assert_eq!(timeline.position_at(5_000), 5);
}

#[test]
fn message_at_finds_the_click() {
    let mut reader = session_reader();
    let timeline = Timeline::from_reader(&mut reader).unwrap();

    let at_700 = timeline.message_at(700).unwrap();
    assert!(matches!(
        &at_700.event,
        ReplayEvent::MouseClick { label, .. } if label == "Checkout"
    ));
}

#[test]
fn get_by_sequence_index() {
    let mut reader = session_reader();
    let timeline = Timeline::from_reader(&mut reader).unwrap();

    assert!(matches!(
        timeline.get(0).unwrap().event,
        ReplayEvent::SetPageLocation { .. }
    ));
    assert!(timeline.get(5).is_none());
}
