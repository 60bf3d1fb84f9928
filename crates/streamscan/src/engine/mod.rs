//! # Regex Engine Adapter
//!
//! Some patterns (back-references, look-around) require the extended regex
//! machinery provided by the [`fancy_regex`] crate; but naturally, this has
//! performance costs. We'd prefer to avoid the [`fancy_regex`] crate when
//! possible, falling back on the standard [`regex`] crate when patterns
//! permit this.
//!
//! This recurses into two problems:
//!
//! * Labeling Patterns - [`ScanPattern`]
//!   * [`ScanPattern::Basic`] - a pattern which was written for [`regex`].
//!   * [`ScanPattern::Fancy`] - a pattern which was written for [`fancy_regex`].
//!   * [`ScanPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`StreamRegex`]
//!
//! [`StreamRegex`] unifies both engines behind a single "leftmost match at
//! or after a position, with captures" operation, which is all the scan
//! engine needs to drive a window across a stream.

pub mod scan_pattern;
pub mod stream_regex;

#[doc(inline)]
pub use scan_pattern::{EngineError, ScanPattern};
#[doc(inline)]
pub use stream_regex::StreamRegex;

pub(crate) use stream_regex::NativeMatch;
