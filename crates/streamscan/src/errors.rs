//! # Error Types

use crate::engine::EngineError;

/// Errors from streamscan operations.
#[derive(Debug, thiserror::Error)]
pub enum StreamScanError {
    /// `max_match_size` must be at least 1.
    #[error("max_match_size must be greater than zero")]
    ZeroMaxMatchSize,

    /// `buffer_size` must be at least 1.
    #[error("buffer_size must be greater than zero")]
    ZeroBufferSize,

    /// The window must be able to hold at least one maximum-size match.
    #[error("buffer_size ({buffer_size}) is less than max_match_size ({max_match_size})")]
    BufferTooSmall {
        /// The configured buffer size.
        buffer_size: usize,

        /// The configured maximum match size.
        max_match_size: usize,
    },

    /// The stream is not valid UTF-8 at the given global byte offset.
    ///
    /// Raised for invalid byte sequences, for a multi-byte sequence
    /// truncated by end of stream, and for a multi-byte character that
    /// can never fit the configured window.
    #[error("stream is not valid utf-8 at byte {offset}")]
    Decode {
        /// Global byte offset of the offending sequence.
        offset: usize,
    },

    /// I/O error from the source stream; fatal for the scan session.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error from the underlying regex engine.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Result type for streamscan operations.
pub type ScanResult<T> = core::result::Result<T, StreamScanError>;
