//! The pull-based record source contract.

use crate::error::Result;
use crate::record::RawRecord;

/// A pull-based producer of raw session records.
///
/// A source yields records one at a time, in capture order, to a single
/// consumer. There is no rewind. `Ok(None)` is the permanent end-of-stream
/// marker: a well-behaved source keeps returning it once the stream is
/// exhausted, and a well-behaved consumer stops pulling after the first one.
/// Faults (truncated data, I/O failures) surface as errors and are the
/// source's own; nothing downstream retries or rewrites them.
pub trait RecordSource {
    /// Pull the next raw record, or `None` at end of stream.
    fn read_record(&mut self) -> Result<Option<RawRecord>>;
}

impl<S: RecordSource + ?Sized> RecordSource for &mut S {
    fn read_record(&mut self) -> Result<Option<RawRecord>> {
        (**self).read_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ReplayEvent;

    struct OneShot(Option<RawRecord>);

    impl RecordSource for OneShot {
        fn read_record(&mut self) -> Result<Option<RawRecord>> {
            Ok(self.0.take())
        }
    }

    #[test]
    fn mut_ref_delegates() {
        let mut source = OneShot(Some(ReplayEvent::MouseMove { x: 1, y: 2 }.into()));
        let mut by_ref = &mut source;
        assert!(by_ref.read_record().unwrap().is_some());
        assert!(by_ref.read_record().unwrap().is_none());
    }
}
