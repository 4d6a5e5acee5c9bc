//! Error types for replay-stream.
//!
//! Decoding defines almost no failures of its own: faults raised by the
//! record source are surfaced to the consumer unchanged, and the only error
//! native to this layer is the defensive bound on synchronization-record
//! runs.

use replay_wire::WireError;

/// The main error type for replay stream operations.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// A fault surfaced by the underlying record source, unchanged.
    #[error("record source error: {0}")]
    Wire(#[from] WireError),

    /// A single read consumed more consecutive clock records than allowed.
    ///
    /// Raised only when a bound is configured; see
    /// [`DecoderConfig::max_control_run`](crate::config::DecoderConfig).
    #[error("more than {limit} consecutive clock records in one read")]
    ControlRunExceeded {
        /// The configured bound that was exceeded.
        limit: usize,
    },

    /// An I/O error occurred while exporting or importing messages.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A message failed to serialize or deserialize.
    #[error("message serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for replay stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StreamError::ControlRunExceeded { limit: 16 };
        assert_eq!(
            err.to_string(),
            "more than 16 consecutive clock records in one read"
        );
    }

    #[test]
    fn wire_errors_stay_inspectable() {
        let err = StreamError::from(WireError::VarintOverflow);
        assert!(matches!(err, StreamError::Wire(WireError::VarintOverflow)));
    }
}
