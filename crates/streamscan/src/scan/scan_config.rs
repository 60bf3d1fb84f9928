//! # Scan Configuration

use crate::errors::{ScanResult, StreamScanError};

/// Window sizing for a stream scan.
///
/// `max_match_size` is important to performance: it represents the maximum
/// byte length of a match. If you only look for words of at most 10 bytes,
/// you should set this to 10. Matches whose true length exceeds it may be
/// missed or truncated; that bound is the caller's contract, not checked by
/// the engine.
///
/// `buffer_size` is the size of the window used for matching, and should
/// usually be left alone.
///
/// ## Style Hints
///
/// Instance names should prefer `scan_config`,
/// or `config` when there is no ambiguity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Maximum byte length of a match.
    max_match_size: usize,

    /// Byte capacity of the scan window.
    buffer_size: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_match_size: Self::DEFAULT_MAX_MATCH_SIZE,
            buffer_size: Self::DEFAULT_BUFFER_SIZE,
        }
    }
}

impl ScanConfig {
    /// Default maximum match size, in bytes.
    pub const DEFAULT_MAX_MATCH_SIZE: usize = 10_000;

    /// Default window capacity, in bytes.
    pub const DEFAULT_BUFFER_SIZE: usize = 65_536;

    /// Build a config with the default sizes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum match size.
    pub fn with_max_match_size(
        self,
        max_match_size: usize,
    ) -> Self {
        Self {
            max_match_size,
            ..self
        }
    }

    /// Set the window capacity.
    pub fn with_buffer_size(
        self,
        buffer_size: usize,
    ) -> Self {
        Self {
            buffer_size,
            ..self
        }
    }

    /// The maximum byte length of a match.
    pub fn max_match_size(&self) -> usize {
        self.max_match_size
    }

    /// The byte capacity of the scan window.
    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Check the sizing invariant `buffer_size >= max_match_size >= 1`.
    ///
    /// ## Returns
    /// `Ok(())`, or the configuration error; always raised before any
    /// stream I/O is attempted.
    pub fn validate(&self) -> ScanResult<()> {
        if self.max_match_size == 0 {
            return Err(StreamScanError::ZeroMaxMatchSize);
        }
        if self.buffer_size == 0 {
            return Err(StreamScanError::ZeroBufferSize);
        }
        if self.buffer_size < self.max_match_size {
            return Err(StreamScanError::BufferTooSmall {
                buffer_size: self.buffer_size,
                max_match_size: self.max_match_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::new();
        assert_eq!(config.max_match_size(), 10_000);
        assert_eq!(config.buffer_size(), 65_536);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = ScanConfig::new()
            .with_max_match_size(8)
            .with_buffer_size(32);
        assert_eq!(config.max_match_size(), 8);
        assert_eq!(config.buffer_size(), 32);
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            ScanConfig::new().with_max_match_size(0).validate(),
            Err(StreamScanError::ZeroMaxMatchSize)
        ));
        assert!(matches!(
            ScanConfig::new().with_buffer_size(0).validate(),
            Err(StreamScanError::ZeroBufferSize)
        ));
        assert!(matches!(
            ScanConfig::new()
                .with_max_match_size(100)
                .with_buffer_size(10)
                .validate(),
            Err(StreamScanError::BufferTooSmall {
                buffer_size: 10,
                max_match_size: 100,
            })
        ));
    }
}
