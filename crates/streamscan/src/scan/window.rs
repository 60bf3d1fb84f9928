//! # Window Buffer
//!
//! A fixed-capacity byte buffer holding a contiguous slice of the stream.
//!
//! The buffer is filled with whole reads (short reads are looped; only a
//! 0-byte read means end of stream), so outside of end-of-stream the window
//! is always full. Matching only ever sees the valid-UTF-8 prefix of the
//! filled bytes; a multi-byte sequence split by a refill boundary stays in
//! the buffer until the next fill completes it.

use std::io::Read;

use crate::errors::{ScanResult, StreamScanError};

/// Bounded in-memory slice of the stream available for matching.
///
/// Invariants: `cursor <= text_len <= len <= capacity`, all positions are
/// char boundaries of the buffered text, and `global_offset` (the stream
/// position of buffer index 0) is monotonically non-decreasing.
pub(crate) struct Window {
    /// Backing storage; capacity is fixed at construction.
    buf: Box<[u8]>,

    /// Bytes currently filled.
    len: usize,

    /// Length of the valid-UTF-8 prefix of the filled bytes.
    text_len: usize,

    /// Window-local position up to which matches have been consumed.
    cursor: usize,

    /// Stream position of buffer index 0.
    global_offset: usize,

    /// The source reported end of stream.
    eof: bool,
}

impl Window {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
            text_len: 0,
            cursor: 0,
            global_offset: 0,
            eof: false,
        }
    }

    /// The buffered text visible to the engine.
    pub(crate) fn text(&self) -> &str {
        debug_assert!(core::str::from_utf8(&self.buf[..self.text_len]).is_ok());
        // SAFETY: `buf[..text_len]` was validated as UTF-8 during `fill`,
        // and slides only ever discard prefixes ending on char boundaries.
        unsafe { core::str::from_utf8_unchecked(&self.buf[..self.text_len]) }
    }

    pub(crate) fn text_len(&self) -> usize {
        self.text_len
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn set_cursor(
        &mut self,
        cursor: usize,
    ) {
        debug_assert!(cursor <= self.text_len);
        self.cursor = cursor;
    }

    pub(crate) fn global_offset(&self) -> usize {
        self.global_offset
    }

    pub(crate) fn eof(&self) -> bool {
        self.eof
    }

    /// Top the buffer up from the source.
    ///
    /// Blocks until the buffer is full or the source reports end of stream;
    /// `ErrorKind::Interrupted` reads are retried, any other I/O error is
    /// fatal for the scan session.
    pub(crate) fn fill<R: Read>(
        &mut self,
        source: &mut R,
    ) -> ScanResult<()> {
        while self.len < self.buf.len() && !self.eof {
            match source.read(&mut self.buf[self.len..]) {
                Ok(0) => self.eof = true,
                Ok(n) => self.len += n,
                Err(err) if err.kind() == std::io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
        self.decode_tail()
    }

    /// Extend `text_len` over the newly filled bytes.
    ///
    /// An incomplete trailing sequence is left for the next fill, unless no
    /// further fill can complete it (end of stream), which is a decode
    /// error just like an outright invalid sequence.
    fn decode_tail(&mut self) -> ScanResult<()> {
        match core::str::from_utf8(&self.buf[self.text_len..self.len]) {
            Ok(_) => {
                self.text_len = self.len;
                Ok(())
            }
            Err(err) => {
                let valid = self.text_len + err.valid_up_to();
                if err.error_len().is_some() || self.eof {
                    return Err(StreamScanError::Decode {
                        offset: self.global_offset + valid,
                    });
                }
                self.text_len = valid;
                Ok(())
            }
        }
    }

    /// The position a slide would retain from: at least `max_match_size`
    /// trailing bytes stay buffered (floored to a char boundary), so any
    /// match starting in that tail survives the slide; already-consumed
    /// text is never retained.
    pub(crate) fn slide_origin(
        &self,
        max_match_size: usize,
    ) -> usize {
        let mut keep = self.text_len.saturating_sub(max_match_size);
        while keep > 0 && !self.text().is_char_boundary(keep) {
            keep -= 1;
        }
        keep.max(self.cursor)
    }

    /// Discard the consumed prefix, keep the safety tail, and refill.
    pub(crate) fn slide<R: Read>(
        &mut self,
        source: &mut R,
        max_match_size: usize,
    ) -> ScanResult<()> {
        debug_assert!(!self.eof);

        let mut keep_from = self.slide_origin(max_match_size);
        if keep_from == 0 && self.len == self.buf.len() {
            // A full window with nothing consumable cannot admit new data
            // (only reachable when buffer_size == max_match_size, or nearly
            // so with a split multi-byte tail); drop the leading character
            // so the scan keeps moving.
            keep_from = match self.text().chars().next() {
                Some(ch) => ch.len_utf8(),
                None => {
                    // No decodable character fits the window at all.
                    return Err(StreamScanError::Decode {
                        offset: self.global_offset,
                    });
                }
            };
        }

        self.buf.copy_within(keep_from..self.len, 0);
        self.global_offset += keep_from;
        self.len -= keep_from;
        self.text_len -= keep_from;
        self.cursor = 0;

        log::trace!(
            "window slide: discarded {} bytes, global_offset now {}",
            keep_from,
            self.global_offset,
        );

        self.fill(source)
    }
}
