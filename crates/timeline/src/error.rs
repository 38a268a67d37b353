//! Error types for the apex-timeline crate.

/// Error type for all fallible operations in the apex-timeline crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimelineError {
    /// Returned when a span's end does not lie after its start.
    #[error("empty span: start {start} ms, end {end} ms")]
    EmptySpan {
        /// Span start in milliseconds.
        start: i64,
        /// Span end in milliseconds.
        end: i64,
    },

    /// Returned when a job short code is not recognized.
    #[error("unknown job code: {code:?}")]
    UnknownJob {
        /// The unrecognized code.
        code: String,
    },
}
