//! # Sliding-Window Scan Engine
//!
//! This module owns the mechanics of matching a pattern over an unbounded
//! stream: a bounded window over the source, and the [`StreamMatch`]
//! session that drives the engine across successive windows, translating
//! window-local coordinates into stream-global ones.
//!
//! Most users will reach this through [`StreamRegex::match_stream`].
//!
//! [`StreamRegex::match_stream`]: crate::StreamRegex::match_stream

mod scan_config;
mod stream_match;
pub(crate) mod window;

#[doc(inline)]
pub use scan_config::*;
#[doc(inline)]
pub use stream_match::*;
