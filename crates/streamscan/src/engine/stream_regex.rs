//! # Stream Regex

use std::io::Read;

use crate::engine::{EngineError, ScanPattern};
use crate::errors::ScanResult;
use crate::scan::{ScanConfig, StreamMatch};

/// A compiled regular expression that can be matched against streams.
///
/// The wrapped engine is treated as a pure function of the currently
/// buffered window text; all scan state lives in the [`StreamMatch`]
/// session driving it.
#[derive(Debug, Clone)]
pub enum StreamRegex {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for StreamRegex {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for StreamRegex {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl StreamRegex {
    /// Compile a new stream regex.
    ///
    /// Plain strings compile as [`ScanPattern::Adaptive`]; pass an explicit
    /// [`ScanPattern`] to pin the engine flavor.
    ///
    /// ## Arguments
    /// * `pattern` - the pattern to compile.
    ///
    /// ## Returns
    /// The compiled regex, or the compilation error.
    pub fn new<P>(pattern: P) -> Result<Self, EngineError>
    where
        P: Into<ScanPattern>,
    {
        pattern.into().compile()
    }

    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        match self {
            Self::Basic(_) => true,
            Self::Fancy(_) => false,
        }
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        !self.is_basic()
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// The capture group names of the pattern, in declared order.
    ///
    /// Group 0 (the whole match) is first and unnamed.
    pub fn group_names(&self) -> Vec<Option<&str>> {
        match self {
            Self::Basic(regex) => regex.capture_names().collect(),
            Self::Fancy(regex) => regex.capture_names().collect(),
        }
    }

    /// Find the leftmost match starting at or after `start`, with captures.
    ///
    /// The returned coordinates are relative to `text`; they are only valid
    /// for the window state `text` was taken from.
    pub(crate) fn captures_at(
        &self,
        text: &str,
        start: usize,
    ) -> ScanResult<Option<NativeMatch>> {
        match self {
            Self::Basic(regex) => Ok(regex
                .captures_at(text, start)
                .map(|caps| NativeMatch::from_spans((0..caps.len()).map(|i| {
                    caps.get(i).map(|m| (m.start(), m.end()))
                })))),
            Self::Fancy(regex) => {
                let caps = regex
                    .captures_from_pos(text, start)
                    .map_err(EngineError::from)?;
                Ok(caps.map(|caps| NativeMatch::from_spans((0..caps.len()).map(|i| {
                    caps.get(i).map(|m| (m.start(), m.end()))
                }))))
            }
        }
    }

    /// Search a stream for the first occurrence of this pattern, with the
    /// default [`ScanConfig`].
    ///
    /// See [`Self::match_stream_with`].
    pub fn match_stream<R>(
        &self,
        source: R,
    ) -> ScanResult<StreamMatch<'_, R>>
    where
        R: Read,
    {
        self.match_stream_with(source, &ScanConfig::default())
    }

    /// Search a stream for the first occurrence of this pattern.
    ///
    /// The source is read as UTF-8; all reported offsets and lengths are in
    /// bytes. Configuration errors are raised before any read occurs.
    ///
    /// ## Arguments
    /// * `source` - the stream to scan; read forward-only, never rewound.
    /// * `config` - window sizing, see [`ScanConfig`].
    ///
    /// ## Returns
    /// The scan session, positioned on the first match (or on the terminal
    /// no-match state; see [`StreamMatch::success`]).
    pub fn match_stream_with<R>(
        &self,
        source: R,
        config: &ScanConfig,
    ) -> ScanResult<StreamMatch<'_, R>>
    where
        R: Read,
    {
        StreamMatch::open(self, source, config)
    }

    /// Iterate over all matches in a stream.
    ///
    /// # Arguments
    /// * `source` - the stream to scan.
    /// * `config` - window sizing, see [`ScanConfig`].
    /// * `f` - the function to apply to each match;
    ///   halts when the function returns `false`.
    ///
    /// ## Returns
    /// `Ok(())` once the stream is exhausted or `f` halts the scan.
    pub fn for_each_match<'s, R, F>(
        &'s self,
        source: R,
        config: &ScanConfig,
        mut f: F,
    ) -> ScanResult<()>
    where
        R: Read,
        F: FnMut(&StreamMatch<'s, R>) -> bool,
    {
        let mut stream_match = self.match_stream_with(source, config)?;
        while stream_match.success() {
            if !f(&stream_match) {
                break;
            }
            stream_match.next_match()?;
        }
        Ok(())
    }
}

/// Window-local coordinate snapshot of an engine match.
///
/// Spans are byte ranges into the window text the match was taken from;
/// `groups` is in declared order, group 0 (the whole match) first.
#[derive(Debug, Clone)]
pub(crate) struct NativeMatch {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) groups: Box<[Option<(usize, usize)>]>,
}

impl NativeMatch {
    fn from_spans<I>(spans: I) -> Self
    where
        I: Iterator<Item = Option<(usize, usize)>>,
    {
        let groups: Box<[_]> = spans.collect();
        let (start, end) = groups.first().copied().flatten().unwrap_or_default();
        Self {
            start,
            end,
            groups,
        }
    }

    /// A zero-length match is a match of the empty string.
    pub(crate) fn is_zero_len(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_names() {
        let regex = StreamRegex::new(r"(?<word>\w+)=(\d+)").unwrap();
        assert_eq!(regex.group_names(), vec![None, Some("word"), None]);
    }

    #[test]
    fn test_captures_at_positions() {
        let regex = StreamRegex::new("ab").unwrap();
        let text = "abab";

        let m = regex.captures_at(text, 0).unwrap().unwrap();
        assert_eq!((m.start, m.end), (0, 2));

        let m = regex.captures_at(text, 1).unwrap().unwrap();
        assert_eq!((m.start, m.end), (2, 4));

        assert!(regex.captures_at(text, 3).unwrap().is_none());
    }

    #[test]
    fn test_captures_at_group_spans() {
        let regex = StreamRegex::new(r"(a)|(b)").unwrap();
        let m = regex.captures_at("xb", 0).unwrap().unwrap();
        assert_eq!(m.groups.as_ref(), &[Some((1, 2)), None, Some((1, 2))]);
        assert!(!m.is_zero_len());
    }

    #[test]
    fn test_fancy_captures_at() {
        let regex = StreamRegex::new(r"(\w+)-\1").unwrap();
        assert!(regex.is_fancy());

        let m = regex.captures_at("xy ab-ab xy", 0).unwrap().unwrap();
        assert_eq!((m.start, m.end), (3, 8));
        assert_eq!(m.groups.as_ref(), &[Some((3, 8)), Some((3, 5))]);
    }
}
