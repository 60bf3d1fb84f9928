//! # `streamscan` Streaming Regex Scanner
//!
//! `streamscan` matches regular expressions against unbounded character
//! streams without materializing the input, producing results byte-for-byte
//! equivalent to matching the fully materialized text with the underlying
//! engine.
//!
//! The scan drives a bounded sliding window over any [`std::io::Read`]
//! source: a window of `buffer_size` bytes is filled, matched, and slid
//! forward, always retaining a `max_match_size` safety tail so a match
//! straddling a refill boundary is neither missed, duplicated, nor
//! mis-positioned. Matches whose true length exceeds `max_match_size` are
//! outside that guarantee; pick the bound to fit what you search for.
//!
//! See:
//! * [`StreamRegex`] to compile patterns and start scans.
//! * [`ScanConfig`] to size the window.
//! * [`StreamMatch`] for the match / advance session contract.
//! * [`ScanPattern`] to pin a pattern to the `regex` or `fancy_regex`
//!   engine instead of adaptive selection.
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use streamscan::StreamRegex;
//!
//! # fn main() -> streamscan::ScanResult<()> {
//! let regex = StreamRegex::new(r"\w+")?;
//! let mut stream_match = regex.match_stream(Cursor::new("one two three"))?;
//!
//! let mut words = Vec::new();
//! while stream_match.success() {
//!     words.push((stream_match.index(), stream_match.value().to_string()));
//!     stream_match.next_match()?;
//! }
//!
//! assert_eq!(words, vec![
//!     (0, "one".to_string()),
//!     (4, "two".to_string()),
//!     (8, "three".to_string()),
//! ]);
//! # Ok(())
//! # }
//! ```
//!
//! The source is decoded as UTF-8 and all offsets and lengths are byte
//! positions, matching the coordinate conventions of the `regex` crate.
//! Scanning is synchronous and single-threaded: refills block on the
//! source, and one session must not be driven from multiple threads.
#![warn(missing_docs, unused)]

pub mod engine;
pub mod errors;
pub mod results;
pub mod scan;

#[doc(inline)]
pub use engine::{EngineError, ScanPattern, StreamRegex};
#[doc(inline)]
pub use errors::{ScanResult, StreamScanError};
#[doc(inline)]
pub use results::{StreamCapture, StreamCaptureCollection, StreamGroup, StreamGroupCollection};
#[doc(inline)]
pub use scan::{ScanConfig, StreamMatch};
