//! # Stream Match Session

use std::cell::OnceCell;
use std::io::Read;

use crate::engine::{NativeMatch, StreamRegex};
use crate::errors::ScanResult;
use crate::results::{StreamCaptureCollection, StreamGroupCollection};
use crate::scan::ScanConfig;
use crate::scan::window::Window;

/// The results from a single regular expression match over a stream, and
/// the scan session that produces the subsequent ones.
///
/// Advancing with [`Self::next_match`] mutates this session in place; the
/// window behind it is refilled as the scan progresses, so all group and
/// capture views are owned snapshots taken at acceptance time, built
/// lazily on first access and memoized until the next advance.
///
/// A session is single-threaded: advancing takes `&mut self`, and the
/// memoized views are not `Sync`. Share the [`StreamRegex`] instead and
/// open one session per stream.
pub struct StreamMatch<'r, R> {
    /// The pattern driving the scan; externally owned.
    regex: &'r StreamRegex,

    /// The source stream; read forward-only, never rewound.
    source: R,

    /// The scan window over the source.
    window: Window,

    /// Maximum byte length of a match; governs the tail kept on a slide.
    max_match_size: usize,

    /// Global start of the most recently accepted match.
    ///
    /// Compared against every candidate so a match re-discovered in the
    /// retained tail after a slide is never returned twice.
    last_start: Option<usize>,

    /// Global end of the most recently accepted match.
    ///
    /// The engines' iterators suppress a zero-length match that ends where
    /// the previous match ended; byte-exact equivalence with in-memory
    /// matching requires the streamed scan to suppress it too.
    last_end: Option<usize>,

    /// The active match, in window-local coordinates.
    current: Option<NativeMatch>,

    /// The window's global offset captured at acceptance time.
    offset_at_accept: usize,

    /// Terminal: the stream is exhausted (or the session aborted on error).
    finished: bool,

    /// Memoized group views for the active match.
    groups: OnceCell<StreamGroupCollection>,

    /// Memoized capture views for the active match.
    captures: OnceCell<StreamCaptureCollection>,
}

impl<'r, R: Read> StreamMatch<'r, R> {
    /// Open a scan session and locate the first match.
    ///
    /// Validates `config` before any read; then performs one blocking fill
    /// and runs the locate-first scan.
    pub(crate) fn open(
        regex: &'r StreamRegex,
        source: R,
        config: &ScanConfig,
    ) -> ScanResult<Self> {
        config.validate()?;

        log::debug!(
            "stream scan open: pattern={:?}, buffer_size={}, max_match_size={}",
            regex.as_str(),
            config.buffer_size(),
            config.max_match_size(),
        );

        let mut session = Self {
            regex,
            source,
            window: Window::new(config.buffer_size()),
            max_match_size: config.max_match_size(),
            last_start: None,
            last_end: None,
            current: None,
            offset_at_accept: 0,
            finished: false,
            groups: OnceCell::new(),
            captures: OnceCell::new(),
        };
        session.window.fill(&mut session.source)?;
        session.next_match()?;
        Ok(session)
    }

    /// Gets a value indicating whether the match is successful.
    pub fn success(&self) -> bool {
        self.current.is_some()
    }

    /// The global byte offset of the match in the stream.
    ///
    /// An unsuccessful match reports 0.
    pub fn index(&self) -> usize {
        match &self.current {
            Some(m) => self.offset_at_accept + m.start,
            None => 0,
        }
    }

    /// The byte length of the match.
    pub fn len(&self) -> usize {
        match &self.current {
            Some(m) => m.end - m.start,
            None => 0,
        }
    }

    /// Is the match zero-length?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The matched text.
    pub fn value(&self) -> &str {
        match &self.current {
            Some(m) => &self.window.text()[m.start..m.end],
            None => "",
        }
    }

    /// The capture groups of the match, in declared order (group 0 first).
    ///
    /// Groups are present (as unsuccessful) even when the match failed.
    pub fn groups(&self) -> &StreamGroupCollection {
        self.groups.get_or_init(|| match &self.current {
            Some(m) => StreamGroupCollection::from_native(
                m,
                self.window.text(),
                self.offset_at_accept,
                &self.regex.group_names(),
            ),
            None => StreamGroupCollection::all_unmatched(&self.regex.group_names()),
        })
    }

    /// The captures of the match itself: one entry (the whole match) when
    /// successful, none otherwise.
    pub fn captures(&self) -> &StreamCaptureCollection {
        self.captures.get_or_init(|| match &self.current {
            Some(m) => StreamCaptureCollection::from_native(
                m,
                self.window.text(),
                self.offset_at_accept,
            ),
            None => StreamCaptureCollection::default(),
        })
    }

    /// Advance to the next match, starting where the last match ended.
    ///
    /// Chains within the buffered window when possible, sliding the window
    /// over the stream otherwise. Once the stream is exhausted the session
    /// is terminal: `success()` stays `false` and further calls keep
    /// returning `Ok(false)`.
    ///
    /// ## Returns
    /// Whether a (new) match is active, or the fatal scan error.
    pub fn next_match(&mut self) -> ScanResult<bool> {
        self.groups = OnceCell::new();
        self.captures = OnceCell::new();

        if self.finished {
            return Ok(false);
        }
        match self.advance() {
            Ok(found) => Ok(found),
            Err(err) => {
                self.finished = true;
                self.current = None;
                Err(err)
            }
        }
    }

    /// The locate/advance loop.
    ///
    /// Candidates are produced in leftmost order from the current window
    /// and filtered in global coordinates:
    ///
    /// * a candidate whose global start equals the last accepted start is
    ///   the same match re-discovered in the retained tail after a slide;
    /// * a zero-length candidate at the last accepted end is one the
    ///   in-memory iterators suppress;
    /// * a candidate that ends flush against a window that can still grow
    ///   may be a truncated prefix of a longer match, so when the retained
    ///   tail covers its start the scan slides and re-runs instead of
    ///   accepting it.
    fn advance(&mut self) -> ScanResult<bool> {
        let mut from = match self.current.take() {
            Some(prior) => next_search_pos(self.window.text(), &prior),
            None => Some(self.window.cursor()),
        };

        loop {
            let candidate = match from {
                Some(f) => self.regex.captures_at(self.window.text(), f)?,
                None => None,
            };

            if let Some(candidate) = candidate {
                let global_start = self.window.global_offset() + candidate.start;
                let global_end = self.window.global_offset() + candidate.end;

                let duplicate = Some(global_start) == self.last_start
                    || (candidate.is_zero_len() && Some(global_start) == self.last_end);
                if duplicate {
                    from = next_search_pos(self.window.text(), &candidate);
                    continue;
                }

                let origin = self.window.slide_origin(self.max_match_size);
                let boundary = candidate.end == self.window.text_len();
                if boundary && !self.window.eof() && origin > 0 && candidate.start >= origin {
                    self.window.slide(&mut self.source, self.max_match_size)?;
                    from = Some(0);
                    continue;
                }

                self.window.set_cursor(candidate.end);
                self.last_start = Some(global_start);
                self.last_end = Some(global_end);
                self.offset_at_accept = self.window.global_offset();
                self.current = Some(candidate);
                return Ok(true);
            }

            if self.window.eof() {
                self.finished = true;
                return Ok(false);
            }
            self.window.slide(&mut self.source, self.max_match_size)?;
            from = Some(0);
        }
    }
}

/// Where to resume the in-window search after `m`: its end, or one
/// character further for a zero-length match (which also guarantees
/// termination on empty patterns). `None` when the window text is spent.
fn next_search_pos(
    text: &str,
    m: &NativeMatch,
) -> Option<usize> {
    if m.is_zero_len() {
        text[m.end..].chars().next().map(|ch| m.end + ch.len_utf8())
    } else {
        Some(m.end)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::errors::StreamScanError;

    fn scan_all(
        pattern: &str,
        input: &str,
        max_match_size: usize,
        buffer_size: usize,
    ) -> Vec<(usize, String)> {
        let regex = StreamRegex::new(pattern).unwrap();
        let config = ScanConfig::new()
            .with_max_match_size(max_match_size)
            .with_buffer_size(buffer_size);
        let mut m = regex.match_stream_with(Cursor::new(input), &config).unwrap();

        let mut found = Vec::new();
        while m.success() {
            found.push((m.index(), m.value().to_string()));
            m.next_match().unwrap();
        }
        found
    }

    #[test]
    fn test_single_window_chaining() {
        assert_eq!(
            scan_all("a", "banana", 10, 64),
            vec![(1, "a".into()), (3, "a".into()), (5, "a".into())],
        );
    }

    #[test]
    fn test_slide_dedupes_retained_match() {
        // "d" at index 3 lands in the retained tail of every slide.
        assert_eq!(
            scan_all("d", "abcdabcd", 2, 4),
            vec![(3, "d".into()), (7, "d".into())],
        );
    }

    #[test]
    fn test_greedy_match_defers_at_window_edge() {
        // The run of a's touches the first window edge; accepting there
        // would truncate it.
        let input = "--------aaaa----";
        assert_eq!(scan_all("a+", input, 6, 12), vec![(8, "aaaa".into())]);
    }

    #[test]
    fn test_no_match_is_terminal() {
        let regex = StreamRegex::new("(x)(?<y>z)?").unwrap();
        let mut m = regex.match_stream(Cursor::new("abcd")).unwrap();

        assert!(!m.success());
        assert_eq!(m.index(), 0);
        assert_eq!(m.len(), 0);
        assert!(m.is_empty());
        assert_eq!(m.value(), "");
        assert!(m.captures().is_empty());

        // Groups are still exposed, all unsuccessful.
        assert_eq!(m.groups().len(), 3);
        assert!(!m.groups()[0].success());
        assert_eq!(m.groups()[2].name(), Some("y"));
        assert_eq!(m.groups()["y"].index(), 0);

        for _ in 0..3 {
            assert!(!m.next_match().unwrap());
            assert!(!m.success());
        }
    }

    #[test]
    fn test_io_error_is_fatal() {
        // Serves its data, then breaks instead of reporting end of stream.
        struct Breaking(Cursor<&'static [u8]>);
        impl Read for Breaking {
            fn read(
                &mut self,
                buf: &mut [u8],
            ) -> std::io::Result<usize> {
                match self.0.read(buf)? {
                    0 => Err(std::io::Error::other("stream broke")),
                    n => Ok(n),
                }
            }
        }

        let regex = StreamRegex::new("b").unwrap();
        let config = ScanConfig::new().with_max_match_size(2).with_buffer_size(4);

        // The first window matches; the refill for the next one fails.
        let mut m = regex
            .match_stream_with(Breaking(Cursor::new(b"abca")), &config)
            .unwrap();
        assert!(m.success());
        assert_eq!(m.index(), 1);

        let err = m.next_match().unwrap_err();
        assert!(matches!(err, StreamScanError::Io(_)));

        // Fatal: the session is terminal afterwards.
        assert!(!m.success());
        assert!(!m.next_match().unwrap());
    }

    #[test]
    fn test_validation_happens_before_io() {
        struct PanicReader;
        impl Read for PanicReader {
            fn read(
                &mut self,
                _buf: &mut [u8],
            ) -> std::io::Result<usize> {
                panic!("read attempted before configuration was validated");
            }
        }

        let regex = StreamRegex::new("x").unwrap();
        let config = ScanConfig::new().with_max_match_size(0);
        let err = regex
            .match_stream_with(PanicReader, &config)
            .err()
            .unwrap();
        assert!(matches!(err, StreamScanError::ZeroMaxMatchSize));
    }
}
